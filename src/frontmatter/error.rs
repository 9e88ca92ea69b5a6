//! Front-matter error types.

use thiserror::Error;

/// Failure to extract metadata from a document's front-matter block.
///
/// Line numbers are 1-based and count from the top of the file.
#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("no front-matter block (expected a leading `---` line)")]
    Missing,

    #[error("front-matter opened with `{0}` is never closed")]
    Unterminated(&'static str),

    #[error("line {line}: expected `key: value`, found `{text}`")]
    MalformedLine { line: usize, text: String },

    #[error("line {line}: list item `{text}` does not belong to a key")]
    OrphanListItem { line: usize, text: String },

    #[error("line {line}: empty key")]
    EmptyKey { line: usize },

    #[error("line {line}: nested value `{text}` is not supported")]
    UnsupportedNesting { line: usize, text: String },

    #[error("line {line}: block scalar for `{key}` is not supported, quote the value instead")]
    BlockScalar { line: usize, key: String },

    #[error("line {line}: duplicate key `{key}`")]
    DuplicateKey { line: usize, key: String },

    #[error("invalid TOML front-matter")]
    Toml(#[from] toml::de::Error),
}
