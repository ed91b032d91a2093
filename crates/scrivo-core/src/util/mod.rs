//! Utility modules shared by the formatter and the SEO enricher.
//!
//! # Modules
//!
//! - [`ids`]: Slug computation for titles, headings, and keywords
//! - [`text`]: HTML escaping, whitespace and truncation helpers
//! - [`time`]: Timestamp formatting for metadata

pub mod ids;
pub mod text;
pub mod time;
