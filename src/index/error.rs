//! Indexing error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::frontmatter::FrontMatterError;

/// Any failure that aborts an indexing run.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("cannot read source directory `{0}`")]
    ReadDir(PathBuf, #[source] io::Error),

    #[error("cannot read `{0}`")]
    ReadFile(PathBuf, #[source] io::Error),

    #[error("invalid front-matter in `{path}`")]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: FrontMatterError,
    },

    #[error("cannot serialize catalog")]
    Serialize(#[from] serde_json::Error),

    #[error("cannot write `{0}`")]
    Write(PathBuf, #[source] io::Error),
}
