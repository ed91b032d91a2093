//! Inline markup: code spans, links, bold, and italic.
//!
//! Text is HTML-escaped before any rule runs, so the only tags in the output
//! are the ones produced here. Rules are applied in a fixed order:
//!
//! 1. Inline code spans are cut out first; their content is escaped only.
//!    A span may be delimited by one backtick or by three on the same line.
//! 2. Links are cut out next; the URL is kept verbatim (escaped), the link
//!    text gets emphasis.
//! 3. Bold (`**text**`) is resolved before italic (`*text*`), so a bold
//!    span's delimiters are never read as two italic delimiters.
//!
//! Emphasis delimiters must hug non-space text: `2 * 3 * 4` stays literal.

use regex::Regex;
use scrivo_core::escape_html;
use std::sync::LazyLock;

static CODE_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```(.+?)```|`([^`]+)`").expect("Invalid code span regex")
});
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)\s]+)\)").expect("Invalid link regex"));
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*([^*\s](?:[^*]*[^*\s])?)\*\*").expect("Invalid bold regex")
});
static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*([^*\s](?:[^*]*[^*\s])?)\*").expect("Invalid italic regex")
});

/// Render the inline markup of one line of text to HTML.
///
/// # Example
///
/// ```rust
/// use scrivo_content::markup::inline::render_inline;
///
/// assert_eq!(
///     render_inline("**bold** and *italic*"),
///     "<strong>bold</strong> and <em>italic</em>"
/// );
/// assert_eq!(render_inline("use `a<b`"), "use <code>a&lt;b</code>");
/// ```
pub fn render_inline(text: &str) -> String {
    let mut html = String::with_capacity(text.len() + 16);
    let mut last = 0;

    for caps in CODE_SPAN_RE.captures_iter(text) {
        let (Some(whole), Some(code)) = (caps.get(0), caps.get(1).or_else(|| caps.get(2))) else {
            continue;
        };
        html.push_str(&render_links(&text[last..whole.start()]));
        html.push_str("<code>");
        html.push_str(&escape_html(code.as_str()));
        html.push_str("</code>");
        last = whole.end();
    }

    html.push_str(&render_links(&text[last..]));
    html
}

/// Escape `text`, turn `[text](url)` into anchors, and apply emphasis outside
/// of the URLs.
fn render_links(text: &str) -> String {
    let escaped = escape_html(text);
    let mut html = String::with_capacity(escaped.len());
    let mut last = 0;

    for caps in LINK_RE.captures_iter(&escaped) {
        let (Some(whole), Some(label), Some(url)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        html.push_str(&render_emphasis(&escaped[last..whole.start()]));
        html.push_str("<a href=\"");
        html.push_str(url.as_str());
        html.push_str("\">");
        html.push_str(&render_emphasis(label.as_str()));
        html.push_str("</a>");
        last = whole.end();
    }

    html.push_str(&render_emphasis(&escaped[last..]));
    html
}

/// Apply bold, then italic, to already-escaped text.
fn render_emphasis(escaped: &str) -> String {
    let bold = BOLD_RE.replace_all(escaped, "<strong>${1}</strong>");
    ITALIC_RE.replace_all(&bold, "<em>${1}</em>").into_owned()
}

/// Remove inline markup delimiters, leaving plain text.
///
/// Used where a heading or list item is needed as text (outline titles,
/// plain-text rendering).
///
/// # Example
///
/// ```rust
/// use scrivo_content::markup::inline::strip_inline;
///
/// assert_eq!(strip_inline("**Big** [deal](/d) `now`"), "Big deal now");
/// ```
pub fn strip_inline(text: &str) -> String {
    let without_code = CODE_SPAN_RE.replace_all(text, "${1}${2}");
    let without_links = LINK_RE.replace_all(&without_code, "${1}");
    let without_bold = BOLD_RE.replace_all(&without_links, "${1}");
    ITALIC_RE.replace_all(&without_bold, "${1}").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_escaped() {
        assert_eq!(render_inline("a < b && c"), "a &lt; b &amp;&amp; c");
    }

    #[test]
    fn test_emphasis_precedence() {
        assert_eq!(
            render_inline("**bold** and *italic*"),
            "<strong>bold</strong> and <em>italic</em>"
        );
    }

    #[test]
    fn test_bold_nested_in_italic() {
        assert_eq!(
            render_inline("*an **important** point*"),
            "<em>an <strong>important</strong> point</em>"
        );
    }

    #[test]
    fn test_spaced_asterisks_stay_literal() {
        assert_eq!(render_inline("2 * 3 * 4"), "2 * 3 * 4");
    }

    #[test]
    fn test_unmatched_delimiters_stay_literal() {
        assert_eq!(render_inline("**unclosed bold"), "**unclosed bold");
        assert_eq!(render_inline("lone *star"), "lone *star");
    }

    #[test]
    fn test_link() {
        assert_eq!(
            render_inline("see [the docs](https://example.com/a?b=1&c=2)"),
            "see <a href=\"https://example.com/a?b=1&amp;c=2\">the docs</a>"
        );
    }

    #[test]
    fn test_link_label_gets_emphasis_but_url_does_not() {
        assert_eq!(
            render_inline("[**big** sale](/a*b*c)"),
            "<a href=\"/a*b*c\"><strong>big</strong> sale</a>"
        );
    }

    #[test]
    fn test_code_span_content_untouched() {
        assert_eq!(
            render_inline("run `*args*` now"),
            "run <code>*args*</code> now"
        );
    }

    #[test]
    fn test_triple_backtick_span_on_one_line() {
        assert_eq!(
            render_inline("Use ```x < y``` here"),
            "Use <code>x &lt; y</code> here"
        );
        assert_eq!(
            render_inline("```a `b` c``` and `d`"),
            "<code>a `b` c</code> and <code>d</code>"
        );
    }

    #[test]
    fn test_quote_in_url_is_escaped() {
        assert_eq!(
            render_inline("[x](/a\"b)"),
            "<a href=\"/a&quot;b\">x</a>"
        );
    }

    #[test]
    fn test_strip_inline() {
        assert_eq!(strip_inline("*Why* **now**?"), "Why now?");
        assert_eq!(strip_inline("plain"), "plain");
        assert_eq!(strip_inline("run ```ls``` first"), "run ls first");
    }
}
