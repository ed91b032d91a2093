//! Command execution.
//!
//! Each pipeline command is a pure function from input text and
//! configuration to the text printed on stdout; [`run`] adds logging setup,
//! config loading, and I/O around them.

use crate::cli::{CliArgs, Command, StyleArg};
use crate::config_handlers::handle_config_command;
use crate::input::read_input;
use anyhow::Context;
use chrono::Utc;
use scrivo_content::{format, format_plain, outline};
use scrivo_core::{Result, ScrivoConfig};
use scrivo_seo::{analyze, optimize_with};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Install the tracing subscriber. Logs go to stderr so stdout stays clean
/// for command output.
pub fn init_logging(verbose: bool, quiet: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if quiet {
        EnvFilter::new("warn")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Ignore error if a subscriber is already set (e.g. in tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the CLI with parsed arguments.
pub fn run(args: CliArgs) -> anyhow::Result<()> {
    init_logging(args.verbose, args.quiet);
    let config_path = args.config.as_deref();

    match args.command {
        Command::Config(cmd) => handle_config_command(config_path, cmd.command)?,
        command => {
            let config =
                ScrivoConfig::load(config_path).context("failed to load configuration")?;
            tracing::debug!(?config, "Configuration loaded");
            println!("{}", execute(command, &config)?);
        }
    }

    Ok(())
}

/// Read the command's input and produce its output text.
fn execute(command: Command, config: &ScrivoConfig) -> anyhow::Result<String> {
    let output = match command {
        Command::Format {
            input,
            plain,
            style,
            json,
        } => format_command(&read(input.as_deref())?, config, plain, style, json)?,
        Command::Optimize {
            input,
            title,
            keywords,
            markup,
        } => optimize_command(&read(input.as_deref())?, config, &title, &keywords, markup)?,
        Command::Analyze { input, keywords } => {
            analyze_command(&read(input.as_deref())?, &keywords)?
        }
        Command::Outline { input } => outline_command(&read(input.as_deref())?)?,
        Command::Config(_) => anyhow::bail!("config commands do not read input"),
    };
    Ok(output)
}

fn read(path: Option<&Path>) -> anyhow::Result<String> {
    let source = path.map_or_else(|| "stdin".to_string(), |p| p.display().to_string());
    let text = read_input(path).with_context(|| format!("failed to read {source}"))?;
    tracing::debug!(bytes = text.len(), %source, "Input read");
    Ok(text)
}

// ============================================================================
// Commands
// ============================================================================

/// `scrivo format`: bare HTML, the JSON document, or plain text.
pub fn format_command(
    raw: &str,
    config: &ScrivoConfig,
    plain: bool,
    style: Option<StyleArg>,
    json: bool,
) -> Result<String> {
    if plain {
        let style = style.map_or(config.plain.style, Into::into);
        return Ok(format_plain(raw, style).processed_content);
    }

    let document = format(raw);
    if json {
        Ok(serde_json::to_string_pretty(&document)?)
    } else {
        Ok(document.processed_content)
    }
}

/// `scrivo optimize`: the enriched document and its metadata as JSON.
pub fn optimize_command(
    raw: &str,
    config: &ScrivoConfig,
    title: &str,
    keywords: &[String],
    markup: bool,
) -> Result<String> {
    let formatted;
    let html = if markup {
        formatted = format(raw).processed_content;
        formatted.as_str()
    } else {
        raw
    };

    let result = optimize_with(&config.seo, html, title, keywords, Utc::now());
    Ok(serde_json::to_string_pretty(&result)?)
}

/// `scrivo analyze`: word count, readability, and keyword statistics as JSON.
pub fn analyze_command(raw: &str, keywords: &[String]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&analyze(raw, keywords))?)
}

/// `scrivo outline`: the heading list as JSON.
pub fn outline_command(raw: &str) -> Result<String> {
    Ok(serde_json::to_string_pretty(&outline(raw))?)
}

// ============================================================================
// Tests
// ============================================================================
