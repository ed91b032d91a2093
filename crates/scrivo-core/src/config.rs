//! Configuration for the Scrivo pipeline.
//!
//! Provides the [`ScrivoConfig`] struct that loads from TOML files,
//! environment variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `SCRIVO_CONFIG` environment variable
//! 3. XDG default: `~/.config/scrivo/config.toml`
//! 4. Built-in defaults
//!
//! `SCRIVO_SEO_*` and `SCRIVO_PLAIN_*` environment variables override
//! individual keys of the matching section.

use crate::{Error, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Configuration structs
// ============================================================================

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrivoConfig {
    /// SEO enrichment settings.
    pub seo: SeoConfig,

    /// Plain-text rendering settings.
    pub plain: PlainConfig,
}

/// Knobs for the SEO enricher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoConfig {
    /// Maximum meta description length, in characters, including the ellipsis.
    pub meta_description_max: usize,

    /// Paragraphs longer than this many characters receive a subheading.
    pub subheading_min_chars: usize,

    /// Number of leading words used for a synthetic subheading.
    pub subheading_words: usize,

    /// Path prefix for keyword links.
    pub tag_path_prefix: String,

    /// Author name written into the schema markup.
    pub author_name: String,

    /// `@context` value of the schema markup.
    pub schema_context: String,
}

/// Plain-text rendering settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlainConfig {
    /// How emphasized lines and phrases are marked.
    pub style: PlainStyle,
}

/// Emphasis markup used by plain-text rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlainStyle {
    /// `[Heading]`
    #[default]
    Brackets,
    /// ANSI bold escape sequences, for terminals.
    Ansi,
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            meta_description_max: 160,
            subheading_min_chars: 100,
            subheading_words: 5,
            tag_path_prefix: "/tag/".to_string(),
            author_name: "Blog Author".to_string(),
            schema_context: "https://schema.org".to_string(),
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl ScrivoConfig {
    /// Load configuration from file, environment, and defaults.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                log::debug!("Loading configuration from {}", path.display());
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            } else if config_path.is_some() {
                return Err(Error::config(format!(
                    "config file does not exist: {}",
                    path.display()
                )));
            }
        }

        let mut env_opts = env::Options::with_top_level("SCRIVO");
        env_opts.add_section("seo");
        env_opts.add_section("plain");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the enricher cannot honor.
    ///
    /// The meta description must keep at least one character of text ahead
    /// of the `...` suffix, and a subheading needs at least one word.
    pub fn validate(&self) -> Result<()> {
        if self.seo.meta_description_max <= 3 {
            return Err(Error::invalid_data(format!(
                "seo.meta_description_max must be greater than 3, got {}",
                self.seo.meta_description_max
            )));
        }
        if self.seo.subheading_words == 0 {
            return Err(Error::invalid_data("seo.subheading_words must be at least 1"));
        }
        Ok(())
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var("SCRIVO_CONFIG") {
            return Some(PathBuf::from(path));
        }

        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("scrivo").join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_seo_defaults() {
        let seo = SeoConfig::default();
        assert_eq!(seo.meta_description_max, 160);
        assert_eq!(seo.subheading_min_chars, 100);
        assert_eq!(seo.subheading_words, 5);
        assert_eq!(seo.tag_path_prefix, "/tag/");
        assert_eq!(seo.author_name, "Blog Author");
    }

    #[test]
    fn test_plain_style_default_is_brackets() {
        assert_eq!(PlainConfig::default().style, PlainStyle::Brackets);
    }

    #[test]
    fn test_toml_roundtrip_keeps_values() {
        let mut config = ScrivoConfig::default();
        config.seo.author_name = "Editorial Team".to_string();
        config.plain.style = PlainStyle::Ansi;

        let rendered = config.to_toml_string().unwrap();
        assert!(rendered.contains("author_name = \"Editorial Team\""));
        assert!(rendered.contains("style = \"ansi\""));

        let parsed: ScrivoConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let parsed: ScrivoConfig = toml::from_str("[seo]\nsubheading_words = 3\n").unwrap();
        assert_eq!(parsed.seo.subheading_words, 3);
        assert_eq!(parsed.seo.meta_description_max, 160);
        assert_eq!(parsed.plain.style, PlainStyle::Brackets);
    }

    #[test]
    fn test_resolve_explicit_path_wins() {
        let path = ScrivoConfig::resolve_config_path(Some("/etc/scrivo.toml"));
        assert_eq!(path, Some(PathBuf::from("/etc/scrivo.toml")));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[seo]\nauthor_name = \"Jo\"\n").unwrap();

        let config = ScrivoConfig::load(Some(&path.to_string_lossy())).unwrap();
        assert_eq!(config.seo.author_name, "Jo");
        assert_eq!(config.seo.subheading_words, 5);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ScrivoConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_tiny_meta_description() {
        let mut config = ScrivoConfig::default();
        config.seo.meta_description_max = 3;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
        assert!(err.to_string().contains("meta_description_max"));
    }

    #[test]
    fn test_validate_rejects_zero_subheading_words() {
        let mut config = ScrivoConfig::default();
        config.seo.subheading_words = 0;
        assert!(matches!(config.validate(), Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_load_rejects_invalid_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[seo]\nsubheading_words = 0\n").unwrap();

        let err = ScrivoConfig::load(Some(&path.to_string_lossy())).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn test_load_missing_explicit_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = ScrivoConfig::load(Some(&path.to_string_lossy())).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
