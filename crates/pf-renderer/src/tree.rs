//! Arena-backed document tree.
//!
//! Nodes live in a single `Vec` owned by [`Document`] and refer to each other
//! by [`NodeId`]. A parent owns its ordered child list; the `parent` link is
//! only used for read-only ancestor queries.

/// Identifier of a node within its [`Document`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The root node ID (always 0).
    pub const ROOT: NodeId = NodeId(0);

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Kind of list a [`NodeKind::List`] node represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKind {
    /// Numbered list (`<ol>`).
    Ordered,
    /// Bulleted list (`<ul>`).
    Unordered,
    /// Definition list. Has no list tag of its own.
    Definition,
}

/// Structural kind of a document node, with its kind-specific attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Root of the tree.
    Document,
    /// Literal text run.
    Text(String),
    /// Heading with level 1-6.
    Heading { level: u8 },
    Paragraph,
    /// Generic block container (footnote definitions).
    Container,
    Link { destination: String },
    List(ListKind),
    ListItem,
    /// Fenced or indented code. The literal is stored here, not as children.
    CodeBlock {
        language: Option<String>,
        literal: String,
    },
    InlineCode(String),
    BlockQuote,
    Strong,
    Emphasis,
    /// Anything the renderer has no dedicated rule for.
    Other,
}

/// A node in the document tree.
#[derive(Clone, Debug)]
pub struct Node {
    pub kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(kind: NodeKind, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            parent,
            children: Vec::new(),
        }
    }

    /// Parent node (`None` for the root).
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child nodes in document order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Parsed document: an arena of nodes rooted at [`NodeId::ROOT`].
#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Create a document containing only the root node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Document, None)],
        }
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not allocated by this document.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    #[must_use]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.node(id).kind
    }

    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).children()
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Parent of the parent, if both exist.
    #[must_use]
    pub fn grandparent(&self, id: NodeId) -> Option<NodeId> {
        self.parent(id).and_then(|p| self.parent(p))
    }

    /// Number of nodes, including the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the document holds nothing but the root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Append a new node as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not allocated by this document, or if the
    /// document already holds `u32::MAX + 1` nodes. Nothing is added when it
    /// panics.
    pub fn append(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        assert!(
            parent.index() < self.nodes.len(),
            "append() called with a parent from another document"
        );
        let index = u32::try_from(self.nodes.len()).expect("document node count exceeds u32");
        let id = NodeId(index);
        self.nodes.push(Node::new(kind, Some(parent)));
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Concatenation of every `Text` leaf in document order.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(self.root(), &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        if let NodeKind::Text(text) = self.kind(id) {
            out.push_str(text);
        }
        for &child in self.children(id) {
            self.collect_text(child, out);
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
