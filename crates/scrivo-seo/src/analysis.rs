//! Keyword density, keyword distribution, and readability scoring.
//!
//! These functions work on any text, raw or processed, and never modify it.

use crate::keywords::keyword_pattern;
use regex::Regex;
use scrivo_core::word_count;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

static SENTENCE_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("Invalid sentence break regex"));

const SECTION_SEPARATOR: &str = "\n\n";

/// Where a keyword's occurrences fall among a document's sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Distribution {
    /// Present in every third of the document.
    WellDistributed,
    /// Present in the first third (but not in all three).
    StartHeavy,
    /// Present in the last third but not the first.
    EndHeavy,
    /// Everything else, including no occurrences at all.
    MiddleHeavy,
}

impl Distribution {
    /// The kebab-case label used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WellDistributed => "well-distributed",
            Self::StartHeavy => "start-heavy",
            Self::EndHeavy => "end-heavy",
            Self::MiddleHeavy => "middle-heavy",
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Statistics for a single keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordStats {
    /// Whole-word, case-insensitive occurrences.
    pub count: usize,
    /// `100 * count / words`, two decimals and a `%` sign.
    pub density: String,
    /// Placement across blank-line-separated sections.
    pub distribution: Distribution,
}

/// Per-keyword statistics, in the order keywords were first given.
///
/// Serializes as a JSON object keyed by keyword.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordAnalysis {
    entries: Vec<(String, KeywordStats)>,
}

impl KeywordAnalysis {
    /// Statistics for `keyword`, if it was analyzed.
    pub fn get(&self, keyword: &str) -> Option<&KeywordStats> {
        self.entries
            .iter()
            .find(|(k, _)| k == keyword)
            .map(|(_, stats)| stats)
    }

    /// Iterate over `(keyword, stats)` pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &KeywordStats)> {
        self.entries.iter().map(|(k, stats)| (k.as_str(), stats))
    }

    /// Number of distinct keywords analyzed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no keywords were analyzed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for KeywordAnalysis {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (keyword, stats) in &self.entries {
            map.serialize_entry(keyword, stats)?;
        }
        map.end()
    }
}

/// Combined keyword and readability report for one text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentReport {
    /// Whitespace-separated words.
    pub word_count: usize,
    /// Score in `[0, 100]`; higher reads easier.
    pub readability: f64,
    /// Per-keyword statistics.
    pub keywords: KeywordAnalysis,
}

/// Analyze `content` for every keyword and score its readability.
pub fn analyze(content: &str, keywords: &[String]) -> ContentReport {
    ContentReport {
        word_count: word_count(content),
        readability: readability_score(content),
        keywords: analyze_keywords(content, keywords),
    }
}

/// Count, density, and distribution for each keyword.
///
/// Repeated keywords are reported once. A blank keyword never matches.
///
/// # Example
///
/// ```rust
/// use scrivo_seo::analysis::{analyze_keywords, Distribution};
///
/// let text = "Shoes first.\n\nNothing here.\n\nMore shoes.";
/// let analysis = analyze_keywords(text, &["shoes".to_string()]);
/// let stats = analysis.get("shoes").unwrap();
///
/// assert_eq!(stats.count, 2);
/// assert_eq!(stats.density, "33.33%");
/// assert_eq!(stats.distribution, Distribution::StartHeavy);
/// ```
pub fn analyze_keywords(content: &str, keywords: &[String]) -> KeywordAnalysis {
    let total_words = word_count(content);
    let sections: Vec<&str> = content.split(SECTION_SEPARATOR).collect();
    let mut analysis = KeywordAnalysis::default();

    for keyword in keywords {
        if analysis.get(keyword).is_some() {
            continue;
        }

        let pattern = keyword_pattern(keyword);
        let count = pattern
            .as_ref()
            .map_or(0, |re| re.find_iter(content).count());
        let stats = KeywordStats {
            count,
            density: density(count, total_words),
            distribution: distribution(&sections, pattern.as_ref()),
        };
        log::trace!("Keyword {keyword:?}: {stats:?}");
        analysis.entries.push((keyword.clone(), stats));
    }

    analysis
}

fn density(count: usize, total_words: usize) -> String {
    if total_words == 0 {
        return "0.00%".to_string();
    }
    format!("{:.2}%", count as f64 / total_words as f64 * 100.0)
}

fn distribution(sections: &[&str], pattern: Option<&Regex>) -> Distribution {
    let Some(pattern) = pattern else {
        return Distribution::MiddleHeavy;
    };

    let n = sections.len();
    let (first_end, last_start) = (n / 3, 2 * n / 3);
    let present = |range: &[&str]| range.iter().any(|section| pattern.is_match(section));

    let first = present(&sections[..first_end]);
    let middle = present(&sections[first_end..last_start]);
    let last = present(&sections[last_start..]);

    match (first, middle, last) {
        (true, true, true) => Distribution::WellDistributed,
        (true, _, _) => Distribution::StartHeavy,
        (_, _, true) => Distribution::EndHeavy,
        _ => Distribution::MiddleHeavy,
    }
}

/// Readability on a 0 to 100 scale.
///
/// `100 - (words_per_sentence * 0.5 + chars_per_word * 2)`, clamped.
/// Sentences are the non-blank fragments between runs of `.`, `!` and `?`.
/// Text with no words scores 100.
///
/// # Example
///
/// ```rust
/// use scrivo_seo::analysis::readability_score;
///
/// // 4 words in 1 sentence, 3 characters per word: 100 - (2 + 6)
/// assert_eq!(readability_score("The cat sat now"), 92.0);
/// ```
pub fn readability_score(text: &str) -> f64 {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return 100.0;
    }

    let sentences = SENTENCE_BREAK_RE
        .split(text)
        .filter(|fragment| !fragment.trim().is_empty())
        .count()
        .max(1);

    let letters: usize = words.iter().map(|w| w.chars().count()).sum();
    let words_per_sentence = words.len() as f64 / sentences as f64;
    let chars_per_word = letters as f64 / words.len() as f64;

    (100.0 - (words_per_sentence * 0.5 + chars_per_word * 2.0)).clamp(0.0, 100.0)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn kw(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sections_with_hits(total: usize, hits: &[usize]) -> String {
        (0..total)
            .map(|i| {
                if hits.contains(&i) {
                    "retail section".to_string()
                } else {
                    "plain section".to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn dist(total: usize, hits: &[usize]) -> Distribution {
        let text = sections_with_hits(total, hits);
        analyze_keywords(&text, &kw(&["retail"]))
            .get("retail")
            .unwrap()
            .distribution
    }

    // ------------------------------------------------------------------------
    // Density
    // ------------------------------------------------------------------------

    #[test]
    fn test_density_three_in_hundred() {
        let mut words = vec!["filler"; 97];
        words.extend(["retail", "Retail", "RETAIL"]);
        let analysis = analyze_keywords(&words.join(" "), &kw(&["retail"]));
        let stats = analysis.get("retail").unwrap();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.density, "3.00%");
    }

    #[test]
    fn test_density_rounds_to_two_places() {
        let analysis = analyze_keywords("sale one two", &kw(&["sale"]));
        assert_eq!(analysis.get("sale").unwrap().density, "33.33%");
    }

    #[test]
    fn test_empty_content() {
        let analysis = analyze_keywords("", &kw(&["sale"]));
        let stats = analysis.get("sale").unwrap();
        assert_eq!(stats.count, 0);
        assert_eq!(stats.density, "0.00%");
    }

    #[test]
    fn test_whole_word_counting() {
        let analysis = analyze_keywords("sale wholesale sales sale.", &kw(&["sale"]));
        assert_eq!(analysis.get("sale").unwrap().count, 2);
    }

    #[test]
    fn test_blank_keyword_counts_nothing() {
        let analysis = analyze_keywords("some text", &kw(&[""]));
        let stats = analysis.get("").unwrap();
        assert_eq!(stats.count, 0);
        assert_eq!(stats.distribution, Distribution::MiddleHeavy);
    }

    // ------------------------------------------------------------------------
    // Distribution
    // ------------------------------------------------------------------------

    #[test]
    fn test_nine_sections() {
        assert_eq!(dist(9, &[0, 4, 8]), Distribution::WellDistributed);
        assert_eq!(dist(9, &[1]), Distribution::StartHeavy);
        assert_eq!(dist(9, &[4]), Distribution::MiddleHeavy);
        assert_eq!(dist(9, &[7]), Distribution::EndHeavy);
    }

    #[test]
    fn test_first_and_last_only_is_start_heavy() {
        assert_eq!(dist(9, &[0, 8]), Distribution::StartHeavy);
    }

    #[test]
    fn test_bounds_not_divisible_by_three() {
        // n = 4: thirds are [0], [1], [2, 3]
        assert_eq!(dist(4, &[1]), Distribution::MiddleHeavy);
        assert_eq!(dist(4, &[2]), Distribution::EndHeavy);
        // n = 5: thirds are [0], [1, 2], [3, 4]
        assert_eq!(dist(5, &[2]), Distribution::MiddleHeavy);
        assert_eq!(dist(5, &[3]), Distribution::EndHeavy);
        assert_eq!(dist(5, &[0, 2, 4]), Distribution::WellDistributed);
    }

    #[test]
    fn test_short_documents() {
        // n = 1 and n = 2: the first third is empty
        assert_eq!(dist(1, &[0]), Distribution::EndHeavy);
        assert_eq!(dist(2, &[0]), Distribution::MiddleHeavy);
        assert_eq!(dist(2, &[1]), Distribution::EndHeavy);
    }

    #[test]
    fn test_no_occurrences_is_middle_heavy() {
        assert_eq!(dist(6, &[]), Distribution::MiddleHeavy);
    }

    // ------------------------------------------------------------------------
    // Report shape
    // ------------------------------------------------------------------------

    #[test]
    fn test_duplicates_reported_once_in_order() {
        let analysis = analyze_keywords("a b c", &kw(&["b", "a", "b"]));
        let keys: Vec<&str> = analysis.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["b", "a"]);
        assert_eq!(analysis.len(), 2);
    }

    #[test]
    fn test_serializes_as_keyed_object() {
        let analysis = analyze_keywords("retail news", &kw(&["retail"]));
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "retail": {"count": 1, "density": "50.00%", "distribution": "end-heavy"}
            })
        );
    }

    #[test]
    fn test_report_fields() {
        let report = analyze("One two. Three four.", &kw(&["two"]));
        assert_eq!(report.word_count, 4);
        assert!(report.keywords.get("two").is_some());
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("wordCount").is_some());
    }

    #[test]
    fn test_distribution_display() {
        assert_eq!(Distribution::WellDistributed.to_string(), "well-distributed");
    }

    // ------------------------------------------------------------------------
    // Readability
    // ------------------------------------------------------------------------

    #[test]
    fn test_readability_empty_text() {
        assert_eq!(readability_score(""), 100.0);
        assert_eq!(readability_score("   \n"), 100.0);
    }

    #[test]
    fn test_readability_counts_sentences() {
        // 4 words in 2 sentences, 3.5 chars per word: 100 - (1 + 7)
        assert_eq!(readability_score("One two. Six ten!"), 92.0);
    }

    #[test]
    fn test_readability_clamped() {
        let word = "x".repeat(80);
        assert_eq!(readability_score(&word), 0.0);
    }

    #[test]
    fn test_readability_in_range_for_prose() {
        let score = readability_score(
            "Retail moves quickly in summer. Shoppers compare prices online before visiting stores.",
        );
        assert!((0.0..=100.0).contains(&score));
        assert!(score < 100.0);
    }
}
