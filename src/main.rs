//! Marquee - flattens a folder of Markdown front-matter into a JSON catalog.

mod cli;
mod config;
mod frontmatter;
mod index;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::CatalogConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = CatalogConfig::load(cli.config.as_deref())?;

    match &cli.command {
        Commands::Build { args } => cli::build::run_build(args, &config),
        Commands::Query { args } => cli::query::run_query(args, &config),
    }
}
