//! Builds a [`Document`] from `pulldown-cmark` events.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag};

use crate::tree::{Document, ListKind, NodeId, NodeKind};

/// Parser options used for page sources.
///
/// Standard extensions (tables, footnotes, strikethrough, task lists,
/// definition lists) plus explicit heading attributes.
#[must_use]
pub fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_HEADING_ATTRIBUTES
        | Options::ENABLE_DEFINITION_LIST
}

/// Parse Markdown into a document tree.
#[must_use]
pub fn parse(markdown: &str) -> Document {
    let mut builder = TreeBuilder::new();
    for event in Parser::new_ext(markdown, parser_options()) {
        builder.event(event);
    }
    builder.finish()
}

/// Stack-based tree construction from a flat event stream.
struct TreeBuilder {
    doc: Document,
    stack: Vec<NodeId>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            doc: Document::new(),
            stack: vec![NodeId::ROOT],
        }
    }

    fn current(&self) -> NodeId {
        self.stack.last().copied().unwrap_or(NodeId::ROOT)
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => {
                let kind = node_kind(tag);
                let id = self.doc.append(self.current(), kind);
                self.stack.push(id);
            }
            Event::End(_) => {
                // The root is never popped, so unbalanced input cannot escape it.
                if self.stack.len() > 1 {
                    self.stack.pop();
                }
            }
            Event::Text(text)
            | Event::Html(text)
            | Event::InlineHtml(text)
            | Event::InlineMath(text)
            | Event::DisplayMath(text) => self.text(&text),
            Event::SoftBreak => self.text("\n"),
            Event::Code(code) => {
                self.doc
                    .append(self.current(), NodeKind::InlineCode(code.into_string()));
            }
            Event::HardBreak
            | Event::Rule
            | Event::TaskListMarker(_)
            | Event::FootnoteReference(_) => {
                self.doc.append(self.current(), NodeKind::Other);
            }
        }
    }

    /// Append text to the current node.
    ///
    /// Code blocks collect text into their literal. Elsewhere consecutive
    /// runs merge into a single `Text` node.
    fn text(&mut self, text: &str) {
        let current = self.current();

        if let NodeKind::CodeBlock { literal, .. } = &mut self.doc.node_mut(current).kind {
            literal.push_str(text);
            return;
        }

        let last_child = self.doc.children(current).last().copied();
        if let Some(last) = last_child
            && let NodeKind::Text(existing) = &mut self.doc.node_mut(last).kind
        {
            existing.push_str(text);
            return;
        }

        self.doc.append(current, NodeKind::Text(text.to_owned()));
    }

    fn finish(self) -> Document {
        self.doc
    }
}

fn node_kind(tag: Tag<'_>) -> NodeKind {
    match tag {
        Tag::Paragraph => NodeKind::Paragraph,
        Tag::Heading { level, .. } => NodeKind::Heading {
            level: heading_level_to_num(level),
        },
        Tag::BlockQuote(_) => NodeKind::BlockQuote,
        Tag::CodeBlock(kind) => NodeKind::CodeBlock {
            language: match kind {
                CodeBlockKind::Fenced(info) => fence_language(&info),
                CodeBlockKind::Indented => None,
            },
            literal: String::new(),
        },
        Tag::List(Some(_)) => NodeKind::List(ListKind::Ordered),
        Tag::List(None) => NodeKind::List(ListKind::Unordered),
        Tag::DefinitionList => NodeKind::List(ListKind::Definition),
        Tag::Item | Tag::DefinitionListTitle | Tag::DefinitionListDefinition => {
            NodeKind::ListItem
        }
        Tag::FootnoteDefinition(_) => NodeKind::Container,
        Tag::Emphasis => NodeKind::Emphasis,
        Tag::Strong => NodeKind::Strong,
        Tag::Link { dest_url, .. } => NodeKind::Link {
            destination: dest_url.into_string(),
        },
        Tag::HtmlBlock
        | Tag::MetadataBlock(_)
        | Tag::Table(_)
        | Tag::TableHead
        | Tag::TableRow
        | Tag::TableCell
        | Tag::Strikethrough
        | Tag::Superscript
        | Tag::Subscript
        | Tag::Image { .. } => NodeKind::Other,
    }
}

/// First whitespace-separated token of a fence info string.
fn fence_language(info: &str) -> Option<String> {
    info.split_whitespace().next().map(str::to_owned)
}

fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
