//! Text helpers: HTML escaping, whitespace normalization, truncation.

/// Escape text for use in HTML element content or a quoted attribute value.
///
/// # Example
///
/// ```
/// use scrivo_core::util::text::escape_html;
///
/// assert_eq!(escape_html("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Collapse all whitespace runs to single spaces and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Count whitespace-separated tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Truncate `text` to `max_chars` characters.
///
/// Text longer than `max_chars` keeps its first `max_chars - suffix.len()`
/// characters followed by `suffix`, so the result is exactly `max_chars`
/// characters long. Counts are in `char`s, never bytes.
///
/// # Example
///
/// ```
/// use scrivo_core::util::text::truncate_chars;
///
/// assert_eq!(truncate_chars("short", 10, "..."), "short");
/// assert_eq!(truncate_chars("abcdefghij", 6, "..."), "abc...");
/// ```
pub fn truncate_chars(text: &str, max_chars: usize, suffix: &str) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let keep = max_chars.saturating_sub(suffix.chars().count());
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str(suffix);
    truncated
}
