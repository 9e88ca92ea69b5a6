//! Build command implementation.
//!
//! Indexes each selected collection in turn and writes its catalog.
//! The first failing collection aborts the command; catalogs already
//! written by earlier collections are kept.

use anyhow::{Context, Result};

use super::common::ad_hoc_collection;
use crate::cli::args::BuildArgs;
use crate::config::{CatalogConfig, Collection};
use crate::index;
use crate::log;
use crate::utils::plural_count;

/// Execute build command
pub fn run_build(args: &BuildArgs, config: &CatalogConfig) -> Result<()> {
    let collections: Vec<Collection> = match &args.source.source {
        Some(source) => vec![ad_hoc_collection(
            &args.source,
            source,
            args.output.as_deref(),
        )?],
        None => config.select(&args.names)?.into_iter().cloned().collect(),
    };

    for collection in &collections {
        build_collection(collection, config)?;
    }

    Ok(())
}

fn build_collection(collection: &Collection, config: &CatalogConfig) -> Result<()> {
    let report = index::run(collection)
        .with_context(|| format!("failed to build collection `{}`", collection.name))?;

    log!(
        "build";
        "{}: indexed {} → {}",
        collection.name,
        plural_count(report.entries, "item"),
        config.root_relative(&report.output).display()
    );
    Ok(())
}
