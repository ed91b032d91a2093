//! Command-line interface for the Scrivo content pipeline.
//!
//! The `scrivo` binary exposes the formatter, the SEO enricher, and the
//! analysis utilities:
//!
//! - `scrivo format [--plain] [--json]`: markdown-like text to HTML
//! - `scrivo optimize --title T --keyword K...`: SEO enrichment as JSON
//! - `scrivo analyze --keyword K...`: keyword and readability report
//! - `scrivo outline`: heading list
//! - `scrivo config path|show|get|init`: configuration management
//!
//! Every pipeline command reads a file argument or stdin.

pub mod app;
pub mod cli;
pub mod config_handlers;
pub mod input;

pub use app::run;
pub use cli::{CliArgs, Command};
