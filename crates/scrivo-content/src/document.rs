//! Formatter output types.

use chrono::{DateTime, Utc};
use scrivo_core::{iso_timestamp, word_count};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// The result of formatting raw text.
///
/// Serializes as `{"processedContent": ..., "metadata": {...}}`. Empty input
/// produces empty content and no metadata, which serializes as `{}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedDocument {
    /// Rendered HTML (or plain text, for plain mode).
    pub processed_content: String,

    /// Counts and timestamp; `None` for empty input.
    #[serde(serialize_with = "metadata_or_empty")]
    pub metadata: Option<DocumentMetadata>,
}

/// Counts describing the formatted input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    /// Whitespace-separated tokens in the trimmed input.
    pub word_count: usize,
    /// Characters in the trimmed input.
    pub char_count: usize,
    /// When the input was processed.
    #[serde(serialize_with = "iso_millis")]
    pub processed_at: DateTime<Utc>,
}

impl FormattedDocument {
    /// The short-circuit result for empty input.
    pub fn empty() -> Self {
        Self {
            processed_content: String::new(),
            metadata: None,
        }
    }
}

impl DocumentMetadata {
    /// Compute metadata for already-trimmed text.
    pub fn from_text(text: &str, processed_at: DateTime<Utc>) -> Self {
        Self {
            word_count: word_count(text),
            char_count: text.chars().count(),
            processed_at,
        }
    }
}

fn metadata_or_empty<S: Serializer>(
    metadata: &Option<DocumentMetadata>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match metadata {
        Some(metadata) => metadata.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

fn iso_millis<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&iso_timestamp(at))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_empty_serializes_with_empty_metadata() {
        let json = serde_json::to_string(&FormattedDocument::empty()).unwrap();
        assert_eq!(json, r#"{"processedContent":"","metadata":{}}"#);
    }

    #[test]
    fn test_metadata_counts() {
        let at = Utc.timestamp_opt(0, 0).unwrap();
        let meta = DocumentMetadata::from_text("héllo wide  world", at);
        assert_eq!(meta.word_count, 3);
        assert_eq!(meta.char_count, 17);
    }

    #[test]
    fn test_metadata_serializes_camel_case() {
        let at = Utc.timestamp_opt(0, 0).unwrap();
        let doc = FormattedDocument {
            processed_content: "<p>x</p>".to_string(),
            metadata: Some(DocumentMetadata::from_text("x", at)),
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["metadata"]["wordCount"], 1);
        assert_eq!(json["metadata"]["charCount"], 1);
        assert_eq!(json["metadata"]["processedAt"], "1970-01-01T00:00:00.000Z");
    }
}
