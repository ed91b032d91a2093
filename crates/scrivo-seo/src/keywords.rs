//! Keyword matching shared by linking and analysis.

use regex::{Regex, RegexBuilder};

/// Build a case-insensitive whole-word matcher for `keyword`.
///
/// The keyword is matched literally (regex metacharacters are escaped).
/// Blank keywords yield `None`: they would otherwise match at every word
/// boundary.
///
/// # Example
///
/// ```rust
/// use scrivo_seo::keywords::keyword_pattern;
///
/// let re = keyword_pattern("Shoes").unwrap();
/// assert!(re.is_match("new shoes in stock"));
/// assert!(!re.is_match("shoeshine"));
/// assert!(keyword_pattern("  ").is_none());
/// ```
pub fn keyword_pattern(keyword: &str) -> Option<Regex> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return None;
    }

    let pattern = format!(r"\b{}\b", regex::escape(keyword));
    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => Some(re),
        Err(e) => {
            log::warn!("Ignoring keyword {keyword:?}: {e}");
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        let re = keyword_pattern("retail").unwrap();
        assert_eq!(re.find_iter("Retail and RETAIL and retail").count(), 3);
    }

    #[test]
    fn test_whole_word_only() {
        let re = keyword_pattern("sale").unwrap();
        assert!(!re.is_match("wholesale prices"));
        assert!(re.is_match("on sale."));
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let re = keyword_pattern("a.b").unwrap();
        assert!(re.is_match("see a.b here"));
        assert!(!re.is_match("see axb here"));
    }

    #[test]
    fn test_multi_word_keyword() {
        let re = keyword_pattern("summer sale").unwrap();
        assert!(re.is_match("The Summer Sale starts"));
    }

    #[test]
    fn test_keyword_is_trimmed() {
        let re = keyword_pattern("  shoes ").unwrap();
        assert!(re.is_match("red shoes"));
    }

    #[test]
    fn test_blank_keyword() {
        assert!(keyword_pattern("").is_none());
    }
}
