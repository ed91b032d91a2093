//! SEO metadata and schema.org markup types.

use serde::Serialize;

/// Enriched HTML together with the derived metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedContent {
    /// Re-serialized HTML document.
    pub processed_content: String,
    /// Derived metadata.
    pub metadata: SeoMetadata,
}

/// Search metadata derived from a title and a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetadata {
    /// URL-safe slug of the title.
    pub slug: String,
    /// First paragraph, truncated with `...` past the configured maximum.
    pub meta_description: String,
    /// JSON text of an [`ArticleSchema`].
    pub schema: String,
}

/// schema.org `Article` markup. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleSchema {
    /// `@context`, normally `https://schema.org`.
    #[serde(rename = "@context")]
    pub context: String,
    /// Always `Article`.
    #[serde(rename = "@type")]
    pub kind: String,
    /// The post title.
    pub headline: String,
    /// The meta description.
    pub description: String,
    /// Keywords joined by `, `.
    pub keywords: String,
    /// ISO-8601 publication time.
    #[serde(rename = "datePublished")]
    pub date_published: String,
    /// Article author.
    pub author: SchemaPerson,
}

/// schema.org `Person`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaPerson {
    /// Always `Person`.
    #[serde(rename = "@type")]
    pub kind: String,
    /// Display name.
    pub name: String,
}

impl SchemaPerson {
    /// A `Person` with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            kind: "Person".to_string(),
            name: name.into(),
        }
    }
}

impl ArticleSchema {
    /// Serialize to compact JSON text.
    pub fn to_json(&self) -> String {
        match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize article schema: {e}");
                String::from("{}")
            }
        }
    }
}
