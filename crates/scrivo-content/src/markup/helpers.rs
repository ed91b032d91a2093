//! Content helpers around the formatter.
//!
//! - [`outline`]: Heading outline for navigation menus and tables of contents
//! - [`wrap_paragraphs`]: Minimal paragraph wrapping for text that is not
//!   markdown-like
//! - [`strip_code_fences`]: Remove the ``` wrappers generators put around
//!   HTML answers

use super::inline::strip_inline;
use super::scanner::{classify_lines, LineClass};
use regex::Regex;
use scrivo_core::{escape_html, normalize_whitespace, slugify};
use serde::Serialize;
use std::sync::LazyLock;

static BLANK_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\n").expect("Invalid blank line regex"));
static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(?:html)?").expect("Invalid fence regex"));

/// One entry of a document outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Heading level, 1 to 3.
    pub level: u8,
    /// Heading text with inline markup removed.
    pub title: String,
    /// Slug usable as an element id.
    pub id: String,
}

/// List the headings of `raw` in document order.
///
/// Uses the same rules as the formatter, so exactly the lines that render as
/// `<h1>`–`<h3>` appear here. Headings inside code fences are skipped.
///
/// # Example
///
/// ```rust
/// use scrivo_content::markup::helpers::outline;
///
/// let sections = outline("# Guide\n\ntext\n\n## Getting *Started*");
/// assert_eq!(sections.len(), 2);
/// assert_eq!(sections[1].title, "Getting Started");
/// assert_eq!(sections[1].id, "getting-started");
/// ```
pub fn outline(raw: &str) -> Vec<Section> {
    classify_lines(raw)
        .into_iter()
        .filter_map(|class| match class {
            LineClass::Heading { level, text } => {
                let title = strip_inline(text);
                let id = slugify(&title);
                Some(Section { level, title, id })
            }
            _ => None,
        })
        .collect()
}

/// Wrap blank-line-separated blocks of `text` in `<p>` tags.
///
/// Whitespace inside a block collapses to single spaces and the text is
/// HTML-escaped. Empty blocks are dropped.
///
/// # Example
///
/// ```rust
/// use scrivo_content::markup::helpers::wrap_paragraphs;
///
/// assert_eq!(
///     wrap_paragraphs("First  line\ncontinues.\n\nFish & chips"),
///     "<p>First line continues.</p>\n<p>Fish &amp; chips</p>"
/// );
/// ```
pub fn wrap_paragraphs(text: &str) -> String {
    let normalized = text.trim().replace("\r\n", "\n");
    BLANK_LINE_RE
        .split(&normalized)
        .map(normalize_whitespace)
        .filter(|block| !block.is_empty())
        .map(|block| format!("<p>{}</p>", escape_html(&block)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Remove ```` ```html ```` and ```` ``` ```` markers and trim the result.
///
/// # Example
///
/// ```rust
/// use scrivo_content::markup::helpers::strip_code_fences;
///
/// assert_eq!(strip_code_fences("```html\n<p>Hi</p>\n```"), "<p>Hi</p>");
/// ```
pub fn strip_code_fences(text: &str) -> String {
    FENCE_RE.replace_all(text, "").trim().to_string()
}
