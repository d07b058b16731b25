// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a flatten run.
///
/// Per-file problems (unreadable or non-text files) are not represented
/// here; they are skipped and reported as notices instead.
#[derive(Error, Debug)]
pub enum FlattenError {
    #[error("either a pattern or an extension filter is required")]
    EmptyFilter,

    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to traverse {path}: {source}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("no files matched pattern '{pattern}'")]
    NoMatch { pattern: String },
}
