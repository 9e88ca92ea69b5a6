//! `[[collection]]` tables.
//!
//! # Example
//!
//! ```toml
//! [[collection]]
//! name = "movies"                 # Unique name, used by `marquee build movies`
//! source = "public/movies"        # Directory scanned (non-recursive)
//! output = "public/movies.json"   # Generated catalog
//! extension = "md"                # Indexed file extension (default: "md")
//! require_front_matter = true     # Fail on files without front-matter (default: true)
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{ConfigDiagnostics, FieldPath};

/// Default indexed file extension.
pub const DEFAULT_EXTENSION: &str = "md";

/// One source directory and the catalog generated from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub name: String,
    pub source: PathBuf,
    pub output: PathBuf,
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default = "default_true")]
    pub require_front_matter: bool,
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn default_true() -> bool {
    true
}

impl Collection {
    pub fn new(
        name: impl Into<String>,
        source: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            output: output.into(),
            extension: default_extension(),
            require_front_matter: true,
        }
    }

    /// Collections used when no config file is found.
    pub fn defaults() -> Vec<Self> {
        vec![Self::new("movies", "public/movies", "public/movies.json")]
    }

    /// Resolve relative paths against `root`.
    pub fn resolve_paths(&mut self, root: &Path) {
        self.source = root.join(&self.source);
        self.output = root.join(&self.output);
    }

    /// Validate this collection's own fields.
    pub fn validate(&self, index: usize, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error(FieldPath::collection(index, "name"), "must not be empty");
        }

        if self.extension.is_empty() {
            diag.error(FieldPath::collection(index, "extension"), "must not be empty");
        } else if self.extension.starts_with('.') {
            diag.error_with_hint(
                FieldPath::collection(index, "extension"),
                format!("`{}` must not start with a dot", self.extension),
                format!("use `{}`", self.extension.trim_start_matches('.')),
            );
        }

        if self.source.as_os_str().is_empty() {
            diag.error(FieldPath::collection(index, "source"), "must not be empty");
        }

        if self.output.as_os_str().is_empty() {
            diag.error(FieldPath::collection(index, "output"), "must not be empty");
        } else if self.output == self.source {
            diag.error(
                FieldPath::collection(index, "output"),
                "must not be the same path as `source`",
            );
        } else if self.output.extension().is_none_or(|ext| ext != "json") {
            diag.warn(
                FieldPath::collection(index, "output"),
                format!("`{}` does not end in .json", self.output.display()),
            );
        }
    }
}
