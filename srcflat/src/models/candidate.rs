// src/models/candidate.rs
use std::path::PathBuf;

/// A file discovered by the walker: its full path and its path relative
/// to the search root. Transient, produced per traversal.
#[derive(Debug, Clone)]
pub struct FileCandidate {
    pub path: PathBuf,
    pub relative: PathBuf,
}
