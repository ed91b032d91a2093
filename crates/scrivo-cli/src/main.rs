//! Scrivo CLI
//!
//! Format, enrich, and analyze generated blog content.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use scrivo_cli::CliArgs;

fn main() -> Result<()> {
    scrivo_cli::run(CliArgs::parse())
}
