//! Plain-text rendering for terminals and logs.
//!
//! Plain mode classifies lines like the HTML formatter but marks them up with
//! indentation and brackets (or ANSI bold) instead of tags:
//!
//! | Input                         | Output (brackets style) |
//! |-------------------------------|-------------------------|
//! | `KEY POINTS` / `Next Steps:`  | `[KEY POINTS]`          |
//! | `## Section`                  | `[Section]`             |
//! | `- item`                      | `  • item`              |
//! | `3. item`                     | `  3. item`             |
//! | `> quote`                     | `    "quote"`           |
//! | `*phrase*`                    | `[phrase]`              |
//!
//! Lines are trimmed, blank lines dropped, and the remaining lines separated
//! by one blank line.

use crate::document::{DocumentMetadata, FormattedDocument};
use chrono::{DateTime, Utc};
use regex::Regex;
use scrivo_core::PlainStyle;
use std::sync::LazyLock;

static ALL_CAPS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z\s]+[A-Z]$").expect("Invalid all-caps regex"));
static TITLE_CASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z][a-z]+(?: [A-Z][a-z]+)*):?$").expect("Invalid title case regex")
});
static MARKDOWN_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,3}\s+(.+)$").expect("Invalid heading regex"));
static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*•]\s+(.+)$").expect("Invalid bullet regex"));
static NUMBERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\s+(.+)$").expect("Invalid numbered regex"));
static QUOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^>\s+(.+)$").expect("Invalid quote regex"));
static STRONG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("Invalid strong regex"));
static PHRASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+)\*").expect("Invalid phrase regex"));

const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RESET: &str = "\x1b[0m";

/// Format raw text for plain-text display.
pub fn format_plain(raw: &str, style: PlainStyle) -> FormattedDocument {
    format_plain_at(raw, style, Utc::now())
}

/// Format raw text for plain-text display with an explicit timestamp.
///
/// Empty input short-circuits exactly like [`super::render::format_at`].
pub fn format_plain_at(
    raw: &str,
    style: PlainStyle,
    processed_at: DateTime<Utc>,
) -> FormattedDocument {
    if raw.is_empty() {
        return FormattedDocument::empty();
    }

    let text = raw.trim();
    let metadata = DocumentMetadata::from_text(text, processed_at);

    let rendered: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| render_line(line, style))
        .collect();

    FormattedDocument {
        processed_content: rendered.join("\n\n"),
        metadata: Some(metadata),
    }
}

fn render_line(line: &str, style: PlainStyle) -> String {
    if ALL_CAPS_RE.is_match(line) {
        return emphasize(line, style);
    }

    if let Some(title) = TITLE_CASE_RE.captures(line).and_then(|caps| caps.get(1)) {
        return emphasize(title.as_str(), style);
    }

    if let Some(title) = MARKDOWN_HEADING_RE.captures(line).and_then(|caps| caps.get(1)) {
        return emphasize(&strip_delimiters(title.as_str()), style);
    }

    if let Some(item) = BULLET_RE.captures(line).and_then(|caps| caps.get(1)) {
        return format!("  • {}", render_phrases(item.as_str(), style));
    }

    if let Some(caps) = NUMBERED_RE.captures(line) {
        if let (Some(number), Some(item)) = (caps.get(1), caps.get(2)) {
            return format!(
                "  {}. {}",
                number.as_str(),
                render_phrases(item.as_str(), style)
            );
        }
    }

    if let Some(quote) = QUOTE_RE.captures(line).and_then(|caps| caps.get(1)) {
        return format!("    \"{}\"", render_phrases(quote.as_str(), style));
    }

    render_phrases(line, style)
}

fn render_phrases(text: &str, style: PlainStyle) -> String {
    let replacement = match style {
        PlainStyle::Brackets => "[${1}]".to_string(),
        PlainStyle::Ansi => format!("{ANSI_BOLD}${{1}}{ANSI_RESET}"),
    };
    let strong = STRONG_RE.replace_all(text, replacement.as_str());
    PHRASE_RE
        .replace_all(&strong, replacement.as_str())
        .into_owned()
}

fn strip_delimiters(text: &str) -> String {
    let strong = STRONG_RE.replace_all(text, "${1}");
    PHRASE_RE.replace_all(&strong, "${1}").into_owned()
}

fn emphasize(text: &str, style: PlainStyle) -> String {
    match style {
        PlainStyle::Brackets => format!("[{text}]"),
        PlainStyle::Ansi => format!("{ANSI_BOLD}{text}{ANSI_RESET}"),
    }
}
