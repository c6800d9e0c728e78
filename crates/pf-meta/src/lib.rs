//! Front matter extraction for page-forge documents.
//!
//! A document may start with a metadata block delimited by `---` lines:
//!
//! ```text
//! ---
//! title: Getting Started
//! subtitle: Install and run
//! ---
//! # Body starts here
//! ```
//!
//! [`extract`] splits such a document into the remaining body and an ordered
//! [`Metadata`] list. Documents without the opening delimiter are returned
//! unchanged with empty metadata.
//!
//! # Example
//!
//! ```
//! use pf_meta::extract;
//!
//! let doc = extract("---\ntitle: A\n---\nBody").unwrap();
//! assert_eq!(doc.body, "Body");
//! assert_eq!(doc.metadata.title(), Some("A"));
//! ```

mod metadata;

pub use metadata::{Metadata, MetadataEntry};

/// Delimiter line opening and closing a metadata block.
const DELIMITER: &str = "---";

/// Document split into front matter and body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrontMatter<'a> {
    /// Document text following the metadata block.
    pub body: &'a str,
    /// Metadata entries in source order.
    pub metadata: Metadata,
}

/// Error returned when a metadata block is malformed.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FrontMatterError {
    /// A line inside the metadata block has no `key: value` separator.
    #[error("malformed metadata on line {line}: expected `key: value`, found {content:?}")]
    MissingColon {
        /// 1-based line number in the source document.
        line: usize,
        /// The offending line, trimmed.
        content: String,
    },
}

/// Split a document into its front matter and body.
///
/// The block opens when the first four characters, trimmed, equal `---`.
/// Every following line up to the closing `---` must be a `key: value` pair,
/// split on the first colon with both sides trimmed. Blank lines after the
/// closing delimiter are consumed so the body starts at the first
/// non-blank line.
///
/// A block with no closing delimiter consumes the rest of the document.
///
/// # Errors
///
/// Returns [`FrontMatterError::MissingColon`] for a line inside the block
/// that contains no colon.
pub fn extract(raw: &str) -> Result<FrontMatter<'_>, FrontMatterError> {
    let opener: String = raw.chars().take(4).collect();
    if opener.trim() != DELIMITER {
        return Ok(FrontMatter {
            body: raw,
            metadata: Metadata::default(),
        });
    }

    let mut lines = raw.split_inclusive('\n');
    let mut consumed = lines.next().map_or(0, str::len);
    let mut metadata = Metadata::default();
    let mut closed = false;

    for (index, line) in lines.enumerate() {
        let trimmed = line.trim();

        if closed {
            if !trimmed.is_empty() {
                break;
            }
        } else if trimmed == DELIMITER {
            closed = true;
        } else {
            let Some((key, value)) = trimmed.split_once(':') else {
                return Err(FrontMatterError::MissingColon {
                    // +2: skip the opening line and count from one
                    line: index + 2,
                    content: trimmed.to_owned(),
                });
            };
            metadata.push(key.trim(), value.trim());
        }

        consumed += line.len();
    }

    Ok(FrontMatter {
        body: &raw[consumed..],
        metadata,
    })
}
