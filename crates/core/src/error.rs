//! Error types for lorebrief.
//!
//! Uses `thiserror` for ergonomic error definitions. Every failure here is
//! fatal for a run: nothing is retried and nothing is substituted.

use std::path::PathBuf;
use thiserror::Error;

/// The top-level error type for all lorebrief operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Source loading ---
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    // --- Report emission ---
    #[error("Failed to write report: {0}")]
    Output(#[source] std::io::Error),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures while loading the interface, inventory or world sources.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list directory {path}: {source}")]
    List {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    /// The path the failing operation was working on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            SourceError::Read { path, .. } | SourceError::List { path, .. } => path,
        }
    }
}
