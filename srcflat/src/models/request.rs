// src/models/request.rs
use std::path::PathBuf;

use crate::error::FlattenError;

/// Token budget applied when the caller does not supply one.
pub const DEFAULT_MAX_INPUT_TOKENS: usize = 200_000;

/// Traversal depth ceiling applied when the caller does not supply one.
pub const DEFAULT_DEPTH_LIMIT: usize = 10;

/// Immutable configuration for one flatten run.
///
/// Constructed once from caller input and never mutated afterwards; the
/// running counters live in [`crate::models::RunState`] instead. The core
/// expects `base_path` to be fully resolved by the caller.
#[derive(Debug, Clone)]
pub struct FlattenRequest {
    /// Regular expression tested against the full path of each file.
    /// An empty pattern matches every path.
    pub pattern: String,
    /// Wildcard spec tested against the file base name only (e.g. `*.go`).
    pub extension: Option<String>,
    /// Ceiling on the estimated token total of the artifact.
    pub max_tokens: usize,
    /// Directories deeper than this below `base_path` are never entered.
    pub depth_limit: usize,
    /// Directory the traversal starts from.
    pub base_path: PathBuf,
    /// Emit skip notices and a run summary on the diagnostic channel.
    pub debug: bool,
}

impl FlattenRequest {
    /// Checks that the request can match anything at all.
    ///
    /// # Errors
    ///
    /// Returns [`FlattenError::EmptyFilter`] when both the pattern and the
    /// extension filter are empty.
    pub fn validate(&self) -> Result<(), FlattenError> {
        if self.pattern.is_empty() && self.extension.as_deref().is_none_or(str::is_empty) {
            return Err(FlattenError::EmptyFilter);
        }
        Ok(())
    }
}
