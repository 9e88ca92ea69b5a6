//! Catalog configuration management for `marquee.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── collection     # [[collection]] tables
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── util           # Config file discovery
//! └── mod.rs         # CatalogConfig (this file)
//! ```
//!
//! The config file is optional. It is searched upward from the working
//! directory, and its parent directory becomes the project root that every
//! relative collection path is resolved against. Without a config file the
//! built-in `movies` collection is used, rooted at the working directory.

mod collection;
pub mod types;
mod util;

pub use collection::{Collection, DEFAULT_EXTENSION};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use util::find_config_file;

use crate::{debug, log};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file searched for when `--config` is not given.
pub const DEFAULT_CONFIG_NAME: &str = "marquee.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing marquee.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path of the loaded config file, if any (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root directory (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Collections, in build order
    #[serde(rename = "collection", default = "Collection::defaults")]
    pub collections: Vec<Collection>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            root: PathBuf::new(),
            collections: Collection::defaults(),
        }
    }
}

impl CatalogConfig {
    /// Load configuration for the current working directory.
    ///
    /// An explicit `config` path must exist; otherwise `marquee.toml` is
    /// searched upward and its absence falls back to the defaults.
    pub fn load(config: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let config_path = match config {
            Some(path) => Some(cwd.join(path)),
            None => find_config_file(Path::new(DEFAULT_CONFIG_NAME), &cwd),
        };

        let mut config = match &config_path {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                Self::from_path(path)?
            }
            None => {
                debug!("config"; "no {} found, using built-in collections", DEFAULT_CONFIG_NAME);
                Self::default()
            }
        };

        let root = config_path
            .as_deref()
            .and_then(Path::parent)
            .map_or(cwd, Path::to_path_buf);

        config.config_path = config_path;
        config.finalize(&root);
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::from)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Set the root and resolve collection paths against it.
    pub fn finalize(&mut self, root: &Path) {
        self.root = root.to_path_buf();
        for collection in &mut self.collections {
            collection.resolve_paths(root);
        }
    }

    /// Validate every collection.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        if self.collections.is_empty() {
            diag.error_with_hint(
                FieldPath::new("collection"),
                "no collections configured",
                "add a [[collection]] table with name, source and output",
            );
        }

        for (index, collection) in self.collections.iter().enumerate() {
            collection.validate(index, &mut diag);

            let duplicate = self.collections[..index]
                .iter()
                .any(|earlier| earlier.name == collection.name);
            if duplicate {
                diag.error(
                    FieldPath::collection(index, "name"),
                    format!("duplicate collection name `{}`", collection.name),
                );
            }
        }

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Pick collections by name, or all of them when `names` is empty.
    pub fn select(&self, names: &[String]) -> Result<Vec<&Collection>> {
        if names.is_empty() {
            return Ok(self.collections.iter().collect());
        }

        names
            .iter()
            .map(|name| match self.collection(name) {
                Some(collection) => Ok(collection),
                None => bail!(
                    "unknown collection `{}` (available: {})",
                    name,
                    self.collection_names().join(", ")
                ),
            })
            .collect()
    }

    pub fn collection(&self, name: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.name == name)
    }

    pub fn collection_names(&self) -> Vec<&str> {
        self.collections.iter().map(|c| c.name.as_str()).collect()
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Get path relative to the project root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(self.get_root())
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config content.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> CatalogConfig {
    let (parsed, ignored) = CatalogConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
