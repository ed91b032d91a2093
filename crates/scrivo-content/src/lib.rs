//! Markup formatting for generated blog content.
//!
//! This crate converts AI-generated, markdown-like text into HTML that is
//! ready for rendering and PDF export. It is deliberately narrower than
//! CommonMark: one line is one block, and anything ambiguous renders as a
//! paragraph instead of failing.
//!
//! # Modules
//!
//! - [`markup`]: Line classification and rendering
//!   - [`markup::scanner`]: Line classification
//!   - [`markup::render`]: HTML rendering and [`format`]
//!   - [`markup::plain`]: Plain-text rendering
//!   - [`markup::helpers`]: Outline, paragraph wrapping, fence stripping
//! - [`document`]: Output types
//!
//! The HTML is built from escaped text, but callers must still run it through
//! an HTML sanitizer before injecting it into a page.
//!
//! # Example
//!
//! ```rust
//! use scrivo_content::format;
//!
//! let doc = format("## Tips\n- Buy early\n- Compare prices\n\nDone.");
//! assert!(doc.processed_content.starts_with("<h2>Tips</h2>"));
//! assert_eq!(doc.metadata.unwrap().word_count, 9);
//! ```

pub mod document;
pub mod markup;

// Re-export commonly used types
pub use document::{DocumentMetadata, FormattedDocument};
pub use markup::{
    classify_lines, format, format_at, format_plain, format_plain_at, outline, strip_code_fences,
    wrap_paragraphs, LineClass, Section,
};
