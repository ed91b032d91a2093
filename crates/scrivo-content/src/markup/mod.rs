//! Line-oriented markup formatting.
//!
//! This module turns loosely-structured generated text into semantic HTML in
//! two passes:
//!
//! - [`scanner`]: classify every line (heading, list item, quote, rule,
//!   code block, paragraph, blank)
//! - [`render`]: render the classified lines, tracking the open list group
//!
//! Supporting modules:
//!
//! - [`inline`]: code spans, links, bold, and italic inside a line
//! - [`plain`]: the same classification rendered for terminals
//! - [`helpers`]: outline extraction, paragraph wrapping, fence stripping
//!
//! # Example
//!
//! ```rust
//! use scrivo_content::markup::format;
//!
//! let doc = format("# Hello\n\nSome **bold** text.");
//! assert_eq!(
//!     doc.processed_content,
//!     "<h1>Hello</h1>\n\n<p>Some <strong>bold</strong> text.</p>"
//! );
//! ```

pub mod helpers;
pub mod inline;
pub mod plain;
pub mod render;
pub mod scanner;

// Re-export key types and functions
pub use helpers::{outline, strip_code_fences, wrap_paragraphs, Section};
pub use plain::{format_plain, format_plain_at};
pub use render::{format, format_at, render_html, ListKind};
pub use scanner::{classify_line, classify_lines, LineClass};
