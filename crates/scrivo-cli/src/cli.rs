//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use scrivo_core::PlainStyle;
use std::path::PathBuf;

// ============================================================================
// CLI argument types
// ============================================================================

/// Format, enrich, and analyze generated blog content.
#[derive(Parser, Debug)]
#[command(name = "scrivo", author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "SCRIVO_CONFIG", global = true)]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Pipeline commands. Every command reads a file argument or stdin.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert markdown-like text to HTML (or plain text).
    Format {
        /// Input file (stdin when omitted).
        input: Option<PathBuf>,

        /// Render plain text instead of HTML.
        #[arg(long)]
        plain: bool,

        /// Emphasis style for plain text (overrides config).
        #[arg(long, value_enum, requires = "plain")]
        style: Option<StyleArg>,

        /// Print the full JSON document instead of the bare HTML.
        #[arg(long, conflicts_with = "plain")]
        json: bool,
    },

    /// Add SEO metadata, a subheading, alt text, and keyword links to HTML.
    Optimize {
        /// Input file (stdin when omitted).
        input: Option<PathBuf>,

        /// Post title, used for the slug, alt text, and schema headline.
        #[arg(short, long, default_value = "")]
        title: String,

        /// Target keyword (repeatable).
        #[arg(short, long = "keyword")]
        keywords: Vec<String>,

        /// Treat the input as markdown-like text and format it first.
        #[arg(long)]
        markup: bool,
    },

    /// Report keyword density, distribution, and readability.
    Analyze {
        /// Input file (stdin when omitted).
        input: Option<PathBuf>,

        /// Keyword to analyze (repeatable).
        #[arg(short, long = "keyword")]
        keywords: Vec<String>,
    },

    /// List the headings of markdown-like text.
    Outline {
        /// Input file (stdin when omitted).
        input: Option<PathBuf>,
    },

    /// Configuration operations.
    Config(ConfigCommand),
}

/// Plain-text emphasis style.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleArg {
    /// `[Heading]`
    Brackets,
    /// ANSI bold.
    Ansi,
}

impl From<StyleArg> for PlainStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Brackets => PlainStyle::Brackets,
            StyleArg::Ansi => PlainStyle::Ansi,
        }
    }
}

/// Config-specific subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// Config subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigAction,
}

/// Available config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path.
    Path,

    /// Print the effective configuration as TOML.
    Show,

    /// Get a configuration value by dotted key.
    Get {
        /// Dotted key (e.g., "seo.author_name").
        key: String,
    },

    /// Create a default configuration file.
    Init {
        /// Output file path (defaults to XDG config path).
        #[arg(short, long)]
        file: Option<String>,

        /// Overwrite existing file.
        #[arg(long)]
        force: bool,
    },
}

// ============================================================================
// Tests
// ============================================================================
