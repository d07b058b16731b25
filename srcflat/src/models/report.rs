// src/models/report.rs
use crate::models::{Artifact, RunState};

/// Everything a flatten run produced: the artifact itself, the final
/// counters, and any skip or prune notices raised along the way. Notices
/// are only text; printing them is the caller's decision.
#[derive(Debug)]
pub struct FlattenReport {
    pub artifact: Artifact,
    pub state: RunState,
    pub notices: Vec<String>,
}
