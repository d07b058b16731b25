// src/models/run_state.rs

/// Mutable counters for a single flatten run, owned by the aggregation
/// loop and returned to the caller once the run ends.
#[derive(Debug, Default)]
pub struct RunState {
    /// Running sum of accepted token estimates.
    pub current_tokens: usize,
    /// Count of files accepted into the artifact.
    pub included_files: usize,
}

impl RunState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current_tokens: 0,
            included_files: 0,
        }
    }
}
