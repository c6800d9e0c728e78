//! Markdown document tree and HTML renderer for page-forge.
//!
//! Rendering happens in two steps:
//! - [`parse`] feeds Markdown through `pulldown-cmark` and builds a
//!   [`Document`]: an arena of [`Node`]s where each node owns its ordered
//!   children and keeps a non-owning link to its parent.
//! - [`render`] walks the tree recursively and produces HTML, one rule per
//!   [`NodeKind`]. Unknown kinds render their children with no wrapping tag,
//!   so rendering never fails and never drops text.
//!
//! # Example
//!
//! ```
//! use pf_renderer::{parse, render};
//!
//! let doc = parse("## Hi");
//! assert_eq!(render(&doc), "<h2>Hi</h2>");
//! ```

mod parser;
mod renderer;
mod tree;
mod util;

pub use parser::{parse, parser_options};
pub use renderer::{render, render_node};
pub use tree::{Document, ListKind, Node, NodeId, NodeKind};
pub use util::{clean_path, relative_path};
