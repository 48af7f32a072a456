//! Source loading: the file reader and the world directory aggregator.
//!
//! Both operations treat file contents as opaque text: nothing is trimmed,
//! re-encoded, or interpreted. Any I/O failure aborts the whole load.

use crate::error::SourceError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Order in which matching world files are aggregated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryOrder {
    /// Sort entries by file name for reproducible output.
    #[default]
    Sorted,
    /// Whatever order the platform's directory listing yields.
    Listing,
}

/// Read the entire file at `path` as text.
pub fn read_text(path: &Path) -> Result<String, SourceError> {
    let content = std::fs::read_to_string(path).map_err(|e| SourceError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(file = %path.display(), bytes = content.len(), "Loaded source file");
    Ok(content)
}

/// List the regular files in `dir` whose name ends with `suffix`.
///
/// Subdirectories and non-matching names are skipped. Symlinks are followed,
/// so a link to a matching file counts as a file.
pub fn matching_entries(
    dir: &Path,
    suffix: &str,
    order: EntryOrder,
) -> Result<Vec<PathBuf>, SourceError> {
    let list_err = |e: std::io::Error| SourceError::List {
        path: dir.to_path_buf(),
        source: e,
    };

    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        let name = entry.file_name();
        if !name.to_string_lossy().ends_with(suffix) {
            continue;
        }

        let path = entry.path();
        let metadata = std::fs::metadata(&path).map_err(|e| SourceError::List {
            path: path.clone(),
            source: e,
        })?;
        if !metadata.is_file() {
            debug!(entry = %path.display(), "Skipping non-file entry");
            continue;
        }
        entries.push(path);
    }

    if order == EntryOrder::Sorted {
        entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }

    Ok(entries)
}

/// Concatenate every matching file in `dir`, each followed by a newline.
///
/// Returns an empty string when no entry matches.
pub fn aggregate_directory(
    dir: &Path,
    suffix: &str,
    order: EntryOrder,
) -> Result<String, SourceError> {
    let entries = matching_entries(dir, suffix, order)?;

    let mut contents = String::new();
    for path in &entries {
        contents.push_str(&read_text(path)?);
        contents.push('\n');
    }

    debug!(
        dir = %dir.display(),
        files = entries.len(),
        bytes = contents.len(),
        "Aggregated world directory"
    );
    Ok(contents)
}
