//! Common utilities shared across CLI commands.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::cli::args::SourceArgs;
use crate::config::{Collection, ConfigDiagnostics, ConfigError};
use crate::utils::normalize_path;

/// Build a one-off collection from `--source` arguments.
///
/// Paths resolve against the working directory. Without `output`, the
/// catalog lands next to the source directory as `<source>.json`.
pub fn ad_hoc_collection(
    args: &SourceArgs,
    source: &Path,
    output: Option<&Path>,
) -> Result<Collection> {
    let source = normalize_path(source);
    let output = match output {
        Some(path) => normalize_path(path),
        None => default_output(&source),
    };
    let name = source
        .file_name()
        .map_or_else(|| "source".to_string(), |n| n.to_string_lossy().into_owned());

    let mut collection = Collection::new(name, source, output);
    collection.extension = args.extension.clone();
    collection.require_front_matter = !args.lenient;

    let mut diag = ConfigDiagnostics::new();
    collection.validate(0, &mut diag);
    diag.print_warnings();
    diag.into_result().map_err(ConfigError::Diagnostics)?;

    Ok(collection)
}

fn default_output(source: &Path) -> PathBuf {
    let mut file_name = source.file_name().unwrap_or_default().to_os_string();
    file_name.push(".json");
    source.with_file_name(file_name)
}
