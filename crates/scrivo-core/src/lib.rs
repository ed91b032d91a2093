//! Shared errors, configuration, and text utilities for Scrivo.
//!
//! This crate has no internal Scrivo dependencies. The formatter
//! (`scrivo-content`) and the enricher (`scrivo-seo`) both build on it.
//!
//! # Modules
//!
//! - [`config`]: Configuration structs and loading
//! - [`error`]: Error types and Result alias
//! - [`util`]: Slug, escaping, and truncation helpers

pub mod config;
pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use config::{PlainConfig, PlainStyle, ScrivoConfig, SeoConfig};
pub use error::{Error, Result};

// Convenience re-exports from util
pub use util::ids::slugify;
pub use util::text::{escape_html, normalize_whitespace, truncate_chars, word_count};
pub use util::time::iso_timestamp;
