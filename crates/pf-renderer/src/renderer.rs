//! Recursive HTML rendering of a [`Document`].

use std::fmt::Write;

use crate::tree::{Document, ListKind, NodeId, NodeKind};

/// Render a whole document to HTML.
#[must_use]
pub fn render(doc: &Document) -> String {
    render_node(doc, doc.root())
}

/// Render the subtree rooted at `id` to HTML.
///
/// Every node kind has exactly one rule; kinds without a dedicated rule
/// render their children with no wrapping tag. Text is emitted verbatim.
#[must_use]
pub fn render_node(doc: &Document, id: NodeId) -> String {
    let mut out = String::with_capacity(4096);
    write_node(doc, id, &mut out);
    out
}

fn write_node(doc: &Document, id: NodeId, out: &mut String) {
    match doc.kind(id) {
        NodeKind::Text(text) => {
            // Text under a blockquote paragraph gets its own paragraph
            if doc
                .grandparent(id)
                .is_some_and(|g| doc.kind(g) == &NodeKind::BlockQuote)
            {
                write!(out, "<p>{text}</p>").unwrap();
            } else {
                out.push_str(text);
            }
        }
        NodeKind::Heading { level } => {
            write!(out, "<h{level}>").unwrap();
            write_children(doc, id, out);
            write!(out, "</h{level}>").unwrap();
        }
        NodeKind::Container => wrap(doc, id, out, "<div>", "</div>"),
        NodeKind::Link { destination } => {
            write!(out, r#"<a href="{destination}">"#).unwrap();
            write_children(doc, id, out);
            out.push_str("</a>");
        }
        NodeKind::List(ListKind::Ordered) => wrap(doc, id, out, "<ol>", "</ol>"),
        NodeKind::List(ListKind::Unordered) => wrap(doc, id, out, "<ul>", "</ul>"),
        NodeKind::ListItem => wrap(doc, id, out, "<li>", "</li>"),
        NodeKind::CodeBlock { language, literal } => {
            write!(
                out,
                r#"<pre><code class="code-block language-{}">{literal}</code></pre>"#,
                language.as_deref().unwrap_or_default()
            )
            .unwrap();
        }
        NodeKind::InlineCode(literal) => {
            write!(out, r#"<span class="inline-code">{literal}</span>"#).unwrap();
        }
        NodeKind::BlockQuote => wrap(doc, id, out, r#"<div class="block-quote">"#, "</div>"),
        NodeKind::Strong => wrap(
            doc,
            id,
            out,
            r#"<span style="font-weight: bold;">"#,
            "</span>",
        ),
        NodeKind::Emphasis => wrap(
            doc,
            id,
            out,
            r#"<span style="font-style: italic;">"#,
            "</span>",
        ),
        NodeKind::Paragraph => wrap(doc, id, out, "<p>", "</p>"),
        NodeKind::Document | NodeKind::List(ListKind::Definition) | NodeKind::Other => {
            write_children(doc, id, out);
        }
    }
}

fn wrap(doc: &Document, id: NodeId, out: &mut String, open: &str, close: &str) {
    out.push_str(open);
    write_children(doc, id, out);
    out.push_str(close);
}

fn write_children(doc: &Document, id: NodeId, out: &mut String) {
    for &child in doc.children(id) {
        write_node(doc, child, out);
    }
}
