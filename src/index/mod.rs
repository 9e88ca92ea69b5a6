//! Catalog indexing pipeline.
//!
//! One run turns a directory of Markdown files into a JSON catalog:
//!
//! ```text
//! enumerate → filter → read front-matter → build entry → sort → serialize → persist
//! ```
//!
//! Every step is fatal on error and nothing is written until the whole
//! catalog has been built and serialized.

mod entry;
mod error;
mod sort;

#[cfg(test)]
mod tests;

pub use entry::{CatalogEntry, ID_KEY};
pub use error::IndexError;
pub use sort::sort_entries;

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Collection;
use crate::debug;
use crate::frontmatter::{self, JsonMap};
use crate::utils::plural_count;

pub type Result<T> = std::result::Result<T, IndexError>;

/// A directory entry considered for indexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// File name, used as the entry `id`.
    pub name: String,
    pub path: PathBuf,
}

/// Outcome of a successful [`run`].
#[derive(Debug, Clone)]
pub struct IndexReport {
    pub entries: usize,
    pub output: PathBuf,
}

/// List the immediate contents of `dir`, sorted by file name.
pub fn enumerate(dir: &Path) -> Result<Vec<SourceFile>> {
    let read_dir = fs::read_dir(dir).map_err(|err| IndexError::ReadDir(dir.to_path_buf(), err))?;

    let mut files = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|err| IndexError::ReadDir(dir.to_path_buf(), err))?;
        files.push(SourceFile {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path(),
        });
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

/// Keep regular files whose extension is exactly `extension` (case-sensitive).
pub fn filter(files: Vec<SourceFile>, extension: &str) -> Vec<SourceFile> {
    files
        .into_iter()
        .filter(|file| {
            if !has_extension(&file.path, extension) {
                debug!("index"; "skip {}", file.name);
                return false;
            }
            if !file.path.is_file() {
                debug!("index"; "skip {} (not a file)", file.name);
                return false;
            }
            true
        })
        .collect()
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext == extension)
}

/// Read a source file and extract its front-matter.
///
/// Without `require_front_matter`, a file with no front-matter block yields
/// an empty mapping. Malformed front-matter is always an error.
pub fn read_metadata(file: &SourceFile, require_front_matter: bool) -> Result<JsonMap> {
    let content = fs::read_to_string(&file.path)
        .map_err(|err| IndexError::ReadFile(file.path.clone(), err))?;

    let parsed = if require_front_matter {
        frontmatter::extract_required(&content).map(Some)
    } else {
        frontmatter::extract(&content)
    };

    match parsed {
        Ok(Some(meta)) => Ok(meta),
        Ok(None) => {
            debug!("index"; "{} has no front-matter", file.name);
            Ok(JsonMap::new())
        }
        Err(source) => Err(IndexError::FrontMatter {
            path: file.path.clone(),
            source,
        }),
    }
}

/// Build the catalog entry for `file` from its metadata.
pub fn build_entry(file: &SourceFile, metadata: JsonMap) -> CatalogEntry {
    if let Some(id) = metadata.get(ID_KEY) {
        debug!("index"; "{} overrides its id with {}", file.name, id);
    }
    CatalogEntry::new(&file.name, metadata)
}

/// Build the sorted catalog of a collection without writing it.
pub fn collect(collection: &Collection) -> Result<Vec<CatalogEntry>> {
    let files = filter(enumerate(&collection.source)?, &collection.extension);
    debug!(
        "index";
        "{}: {} in {}",
        collection.name,
        plural_count(files.len(), "source file"),
        collection.source.display()
    );

    let mut entries = files
        .iter()
        .map(|file| {
            read_metadata(file, collection.require_front_matter)
                .map(|meta| build_entry(file, meta))
        })
        .collect::<Result<Vec<_>>>()?;

    sort_entries(&mut entries);
    Ok(entries)
}

/// Pretty-printed JSON array, two-space indent, no trailing newline.
pub fn serialize(entries: &[CatalogEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// Overwrite `path` with `text`, creating parent directories.
pub fn persist(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|err| IndexError::Write(path.to_path_buf(), err))?;
    }
    fs::write(path, text).map_err(|err| IndexError::Write(path.to_path_buf(), err))
}

/// Index a collection and write its artifact.
pub fn run(collection: &Collection) -> Result<IndexReport> {
    let entries = collect(collection)?;
    let text = serialize(&entries)?;
    persist(&collection.output, &text)?;

    Ok(IndexReport {
        entries: entries.len(),
        output: collection.output.clone(),
    })
}
