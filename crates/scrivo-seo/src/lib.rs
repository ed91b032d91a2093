//! SEO enrichment and keyword analysis for formatted HTML.
//!
//! Takes the HTML produced by `scrivo-content` (or any HTML fragment) plus a
//! title and target keywords, and returns a re-serialized document with a
//! synthetic subheading, image alt text and keyword links, together with a
//! slug, a meta description and schema.org `Article` markup.
//!
//! # Modules
//!
//! - [`enrich`]: The enrichment pass and [`optimize`]
//! - [`analysis`]: Keyword density, distribution, and readability
//! - [`alt_text`]: Alt text synthesis
//! - [`keywords`]: Whole-word keyword matching
//! - [`metadata`]: Output and schema types
//!
//! # Example
//!
//! ```rust
//! use scrivo_seo::{analysis::analyze_keywords, optimize};
//!
//! let keywords = vec!["retail".to_string()];
//! let result = optimize("<p>Retail is changing.</p>", "Retail Trends", &keywords);
//! assert_eq!(result.metadata.slug, "retail-trends");
//!
//! let analysis = analyze_keywords("Retail is changing.", &keywords);
//! assert_eq!(analysis.get("retail").unwrap().count, 1);
//! ```

pub mod alt_text;
pub mod analysis;
pub mod enrich;
pub mod keywords;
pub mod metadata;

// Re-export commonly used types
pub use analysis::{
    analyze, analyze_keywords, readability_score, ContentReport, Distribution, KeywordAnalysis,
    KeywordStats,
};
pub use enrich::{optimize, optimize_at, optimize_with};
pub use metadata::{ArticleSchema, OptimizedContent, SchemaPerson, SeoMetadata};
