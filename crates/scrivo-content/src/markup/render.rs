//! HTML rendering of classified lines.
//!
//! The renderer consumes the scanner's [`LineClass`] sequence front to back
//! and keeps one piece of state: the currently open [`ListGroup`]. A list
//! item of the open kind extends the group; anything else (a blank line, the
//! other list kind, any other block) closes it before being rendered.
//!
//! Headings, lists, blockquotes, rules and code blocks are followed by one
//! blank line; consecutive paragraphs are separated by a single newline.
//!
//! # Example
//!
//! ```rust
//! use scrivo_content::markup::render::format;
//!
//! let doc = format("- a\n- b\n\nPlain");
//! assert_eq!(
//!     doc.processed_content,
//!     "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n\n<p>Plain</p>"
//! );
//! ```

use super::inline::render_inline;
use super::scanner::{classify_lines, LineClass};
use crate::document::{DocumentMetadata, FormattedDocument};
use chrono::{DateTime, Utc};
use scrivo_core::escape_html;

/// Kind of an open list group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `<ol>`
    Ordered,
    /// `<ul>`
    Unordered,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            Self::Ordered => "ol",
            Self::Unordered => "ul",
        }
    }

    fn of(class: &LineClass<'_>) -> Option<Self> {
        match class {
            LineClass::OrderedItem { .. } => Some(Self::Ordered),
            LineClass::UnorderedItem(_) => Some(Self::Unordered),
            _ => None,
        }
    }
}

/// Consecutive same-kind list items awaiting their closing tag.
#[derive(Debug)]
struct ListGroup {
    kind: ListKind,
    items: Vec<String>,
}

impl ListGroup {
    fn render(&self) -> String {
        let tag = self.kind.tag();
        let mut html = format!("<{tag}>\n");
        for item in &self.items {
            html.push_str("<li>");
            html.push_str(item);
            html.push_str("</li>\n");
        }
        html.push_str(&format!("</{tag}>"));
        html
    }
}

/// A rendered block and whether a blank line follows it.
struct Block {
    html: String,
    separated: bool,
}

/// Format raw text into HTML, stamping metadata with the current time.
pub fn format(raw: &str) -> FormattedDocument {
    format_at(raw, Utc::now())
}

/// Format raw text into HTML with an explicit processing timestamp.
///
/// Empty input short-circuits to [`FormattedDocument::empty`]. Metadata is
/// counted on the trimmed input. Classification sees the input with leading
/// blank lines and trailing whitespace removed, so an indented first line
/// degrades to a paragraph like any other indented line.
pub fn format_at(raw: &str, processed_at: DateTime<Utc>) -> FormattedDocument {
    if raw.is_empty() {
        return FormattedDocument::empty();
    }

    let metadata = DocumentMetadata::from_text(raw.trim(), processed_at);
    let classes = classify_lines(skip_leading_blank_lines(raw.trim_end()));
    let html = render_html(&classes);

    log::debug!(
        "Formatted {} lines ({} words) into {} bytes of HTML",
        classes.len(),
        metadata.word_count,
        html.len()
    );

    FormattedDocument {
        processed_content: html,
        metadata: Some(metadata),
    }
}

/// `text` from the start of its first non-blank line.
fn skip_leading_blank_lines(text: &str) -> &str {
    match text.find(|c: char| !c.is_whitespace()) {
        Some(first) => {
            let line_start = text[..first].rfind('\n').map_or(0, |nl| nl + 1);
            &text[line_start..]
        }
        None => "",
    }
}

/// Render a classified line sequence to HTML.
pub fn render_html(classes: &[LineClass<'_>]) -> String {
    let mut blocks: Vec<Block> = Vec::new();
    let mut open: Option<ListGroup> = None;

    for class in classes {
        let kind = ListKind::of(class);

        if let Some(group) = open.take() {
            if Some(group.kind) == kind {
                open = Some(group);
            } else {
                blocks.push(Block {
                    html: group.render(),
                    separated: true,
                });
            }
        }

        match class {
            LineClass::OrderedItem { text, .. } | LineClass::UnorderedItem(text) => {
                let item = render_inline(text);
                match open.as_mut() {
                    Some(group) => group.items.push(item),
                    None => {
                        // `kind` is always Some for list items
                        if let Some(kind) = kind {
                            open = Some(ListGroup {
                                kind,
                                items: vec![item],
                            });
                        }
                    }
                }
            }
            LineClass::Heading { level, text } => blocks.push(Block {
                html: format!("<h{level}>{}</h{level}>", render_inline(text)),
                separated: true,
            }),
            LineClass::Blockquote(text) => blocks.push(Block {
                html: format!("<blockquote>{}</blockquote>", render_inline(text)),
                separated: true,
            }),
            LineClass::Rule => blocks.push(Block {
                html: "<hr>".to_string(),
                separated: true,
            }),
            LineClass::CodeBlock(lines) => blocks.push(Block {
                html: format!("<pre><code>{}</code></pre>", escape_html(&lines.join("\n"))),
                separated: true,
            }),
            LineClass::Paragraph(text) => {
                let inner = render_inline(text.trim());
                if !inner.trim().is_empty() {
                    blocks.push(Block {
                        html: format!("<p>{inner}</p>"),
                        separated: false,
                    });
                }
            }
            LineClass::Blank => {}
        }
    }

    if let Some(group) = open {
        blocks.push(Block {
            html: group.render(),
            separated: true,
        });
    }

    join_blocks(&blocks)
}

fn join_blocks(blocks: &[Block]) -> String {
    let mut html = String::new();
    for (idx, block) in blocks.iter().enumerate() {
        html.push_str(&block.html);
        if idx + 1 < blocks.len() {
            html.push('\n');
            if block.separated {
                html.push('\n');
            }
        }
    }
    html
}

// ============================================================================
// Tests
// ============================================================================
