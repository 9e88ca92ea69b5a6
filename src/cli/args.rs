//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_EXTENSION;

/// Marquee: flatten Markdown front-matter into JSON catalogs
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: marquee.toml, searched upward)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Index collections and write their JSON catalogs
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        args: BuildArgs,
    },

    /// Index a collection and print its catalog to stdout
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },
}

/// Ad-hoc source directory, bypassing the configured collections.
#[derive(clap::Args, Debug, Clone)]
pub struct SourceArgs {
    /// Directory to index instead of the configured collections
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub source: Option<PathBuf>,

    /// File extension to index, without the dot (with --source)
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Index files without front-matter instead of failing (with --source)
    #[arg(long)]
    pub lenient: bool,
}

/// Build command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Collections to build. If omitted, builds all of them.
    #[arg(value_name = "NAME", conflicts_with = "source")]
    pub names: Vec<String>,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Catalog file to write (with --source; default: `<source>.json`)
    #[arg(short, long, requires = "source", value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// Collection to query. Defaults to the first configured collection.
    #[arg(value_name = "NAME", conflicts_with = "source")]
    pub name: Option<String>,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Only print these fields (comma-separated); `id` is always included
    #[arg(short, long, value_delimiter = ',')]
    pub fields: Option<Vec<String>>,

    /// Print single-line JSON
    #[arg(long)]
    pub compact: bool,
}
