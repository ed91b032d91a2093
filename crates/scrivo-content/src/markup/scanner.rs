//! Line classification.
//!
//! The scanner walks the input once, front to back, and assigns every
//! physical line exactly one [`LineClass`]. A fenced code block is the only
//! construct spanning several lines; it is emitted as a single
//! [`LineClass::CodeBlock`] covering its fences and body.
//!
//! Block rules match only at column zero. Indented lines (for example nested
//! bullets under a numbered item) fall through to [`LineClass::Paragraph`].
//!
//! # Example
//!
//! ```rust
//! use scrivo_content::markup::scanner::{classify_lines, LineClass};
//!
//! let classes = classify_lines("## Intro\n- one\n\nBody");
//! assert_eq!(classes[0], LineClass::Heading { level: 2, text: "Intro" });
//! assert_eq!(classes[1], LineClass::UnorderedItem("one"));
//! assert_eq!(classes[2], LineClass::Blank);
//! assert_eq!(classes[3], LineClass::Paragraph("Body"));
//! ```

use regex::Regex;
use std::sync::LazyLock;

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,3})[ \t]+(\S.*)$").expect("Invalid heading regex"));
static RULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*_]{3,}$").expect("Invalid rule regex"));
static ORDERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.[ \t]+(\S.*)$").expect("Invalid ordered item regex"));
static UNORDERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*•][ \t]+(\S.*)$").expect("Invalid unordered item regex"));
static QUOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^>[ \t]+(\S.*)$").expect("Invalid blockquote regex"));

const FENCE: &str = "```";

/// Classification of a single physical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// `#`, `##` or `###` heading; `level` is 1 to 3.
    Heading {
        /// Heading depth.
        level: u8,
        /// Heading text with the `#` prefix removed.
        text: &'a str,
    },
    /// `N. text`
    OrderedItem {
        /// The item number as written.
        number: &'a str,
        /// Item text.
        text: &'a str,
    },
    /// `- text`, `* text` or `• text`
    UnorderedItem(&'a str),
    /// `> text`
    Blockquote(&'a str),
    /// Three or more of `-`, `*` and `_`, in any mix (`---`, `***`, `-*-`).
    Rule,
    /// Body lines of a closed ``` fence.
    CodeBlock(Vec<&'a str>),
    /// Anything else that is not blank.
    Paragraph(&'a str),
    /// Empty or whitespace-only line.
    Blank,
}

impl LineClass<'_> {
    /// Returns true for list items of either kind.
    pub fn is_list_item(&self) -> bool {
        matches!(self, Self::OrderedItem { .. } | Self::UnorderedItem(_))
    }
}

/// Classify every line of `raw`.
///
/// Lines are compared with trailing whitespace removed. A line opening a
/// code fence without a matching closing fence is treated as a paragraph.
pub fn classify_lines(raw: &str) -> Vec<LineClass<'_>> {
    let lines: Vec<&str> = raw.lines().collect();
    let fences: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_fence(line))
        .map(|(idx, _)| idx)
        .collect();

    let mut classes = Vec::with_capacity(lines.len());
    let mut next_fence = 0;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i].trim_end();

        if is_fence(line) {
            while next_fence < fences.len() && fences[next_fence] <= i {
                next_fence += 1;
            }
            if let Some(&close) = fences.get(next_fence) {
                classes.push(LineClass::CodeBlock(lines[i + 1..close].to_vec()));
                next_fence += 1;
                i = close + 1;
                continue;
            }
            log::debug!("Unclosed code fence at line {}, treating as text", i + 1);
            classes.push(LineClass::Paragraph(line));
            i += 1;
            continue;
        }

        let class = classify_line(line);
        log::trace!("line {}: {:?}", i + 1, class);
        classes.push(class);
        i += 1;
    }

    classes
}

/// Classify a single line, without fence handling.
///
/// `line` is expected to have its trailing whitespace removed already.
pub fn classify_line(line: &str) -> LineClass<'_> {
    if line.trim().is_empty() {
        return LineClass::Blank;
    }

    if let Some(caps) = HEADING_RE.captures(line) {
        if let (Some(hashes), Some(text)) = (caps.get(1), caps.get(2)) {
            return LineClass::Heading {
                level: hashes.as_str().len() as u8,
                text: text.as_str(),
            };
        }
    }

    if RULE_RE.is_match(line) {
        return LineClass::Rule;
    }

    if let Some(caps) = ORDERED_RE.captures(line) {
        if let (Some(number), Some(text)) = (caps.get(1), caps.get(2)) {
            return LineClass::OrderedItem {
                number: number.as_str(),
                text: text.as_str(),
            };
        }
    }

    if let Some(text) = UNORDERED_RE.captures(line).and_then(|caps| caps.get(1)) {
        return LineClass::UnorderedItem(text.as_str());
    }

    if let Some(text) = QUOTE_RE.captures(line).and_then(|caps| caps.get(1)) {
        return LineClass::Blockquote(text.as_str());
    }

    LineClass::Paragraph(line)
}

/// A fence line opens with ``` and holds no second ```; a line such as
/// ```` ```x``` ```` is an inline code span instead.
fn is_fence(line: &str) -> bool {
    line.strip_prefix(FENCE)
        .is_some_and(|rest| !rest.contains(FENCE))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // classify_line tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_heading_levels() {
        assert_eq!(
            classify_line("# Title"),
            LineClass::Heading { level: 1, text: "Title" }
        );
        assert_eq!(
            classify_line("## Title"),
            LineClass::Heading { level: 2, text: "Title" }
        );
        assert_eq!(
            classify_line("###\tTitle"),
            LineClass::Heading { level: 3, text: "Title" }
        );
    }

    #[test]
    fn test_deep_heading_is_paragraph() {
        assert_eq!(classify_line("#### Deep"), LineClass::Paragraph("#### Deep"));
    }

    #[test]
    fn test_hash_without_space_is_paragraph() {
        assert_eq!(classify_line("#hashtag"), LineClass::Paragraph("#hashtag"));
    }

    #[test]
    fn test_ordered_item() {
        assert_eq!(
            classify_line("12. Twelfth"),
            LineClass::OrderedItem { number: "12", text: "Twelfth" }
        );
    }

    #[test]
    fn test_unordered_markers() {
        assert_eq!(classify_line("- dash"), LineClass::UnorderedItem("dash"));
        assert_eq!(classify_line("* star"), LineClass::UnorderedItem("star"));
        assert_eq!(classify_line("• dot"), LineClass::UnorderedItem("dot"));
    }

    #[test]
    fn test_emphasis_is_not_a_list() {
        assert_eq!(
            classify_line("*italic* opener"),
            LineClass::Paragraph("*italic* opener")
        );
        assert_eq!(
            classify_line("**Bold** opener"),
            LineClass::Paragraph("**Bold** opener")
        );
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(classify_line("> quoted"), LineClass::Blockquote("quoted"));
        assert_eq!(classify_line(">no space"), LineClass::Paragraph(">no space"));
    }

    #[test]
    fn test_rules() {
        assert_eq!(classify_line("---"), LineClass::Rule);
        assert_eq!(classify_line("*****"), LineClass::Rule);
        assert_eq!(classify_line("___"), LineClass::Rule);
        assert_eq!(classify_line("-*-"), LineClass::Rule);
        assert_eq!(classify_line("_-_-"), LineClass::Rule);
        assert_eq!(classify_line("--"), LineClass::Paragraph("--"));
    }

    #[test]
    fn test_indented_lines_degrade_to_paragraph() {
        assert_eq!(
            classify_line("   - nested"),
            LineClass::Paragraph("   - nested")
        );
        assert_eq!(classify_line("  # Title"), LineClass::Paragraph("  # Title"));
    }

    #[test]
    fn test_blank() {
        assert_eq!(classify_line(""), LineClass::Blank);
        assert_eq!(classify_line(" \t "), LineClass::Blank);
    }

    // ------------------------------------------------------------------------
    // classify_lines tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_one_class_per_line() {
        let classes = classify_lines("# A\n1. one\n2. two\n\n> q\ntext");
        assert_eq!(classes.len(), 6);
        assert!(classes[1].is_list_item());
        assert!(classes[2].is_list_item());
    }

    #[test]
    fn test_fenced_block() {
        let classes = classify_lines("Before\n```rust\nfn main() {}\n# not a heading\n```\nAfter");
        assert_eq!(
            classes,
            vec![
                LineClass::Paragraph("Before"),
                LineClass::CodeBlock(vec!["fn main() {}", "# not a heading"]),
                LineClass::Paragraph("After"),
            ]
        );
    }

    #[test]
    fn test_two_fenced_blocks() {
        let classes = classify_lines("```\na\n```\n```\nb\n```");
        assert_eq!(
            classes,
            vec![
                LineClass::CodeBlock(vec!["a"]),
                LineClass::CodeBlock(vec!["b"]),
            ]
        );
    }

    #[test]
    fn test_unclosed_fence_degrades() {
        let classes = classify_lines("```\n- item");
        assert_eq!(
            classes,
            vec![LineClass::Paragraph("```"), LineClass::UnorderedItem("item")]
        );
    }

    #[test]
    fn test_single_line_triple_backticks_are_not_a_fence() {
        let classes = classify_lines("```x```
text
```
body
```");
        assert_eq!(
            classes,
            vec![
                LineClass::Paragraph("```x```"),
                LineClass::Paragraph("text"),
                LineClass::CodeBlock(vec!["body"]),
            ]
        );
    }

    #[test]
    fn test_trailing_whitespace_ignored() {
        let classes = classify_lines("## Title   \n- item\t");
        assert_eq!(classes[0], LineClass::Heading { level: 2, text: "Title" });
        assert_eq!(classes[1], LineClass::UnorderedItem("item"));
    }

    #[test]
    fn test_empty_input() {
        assert!(classify_lines("").is_empty());
    }
}
