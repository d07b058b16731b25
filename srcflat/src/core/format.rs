// src/core/format.rs
use crate::models::{Artifact, FlattenRequest, RunState};

/// Renders the artifact as fenced blocks headed by the relative path,
/// concatenated in acceptance order and separated by blank lines. This is
/// the run's primary output.
#[must_use]
pub fn render(artifact: &Artifact) -> String {
    let mut out = String::new();
    for entry in &artifact.entries {
        out.push_str(&format!(
            "### {}\n```\n{}\n```\n\n",
            entry.relative_path.display(),
            entry.content
        ));
    }
    out
}

/// Renders the diagnostic summary for the secondary channel. Emitted only
/// when the run was started in debug mode, and never on stdout.
#[must_use]
pub fn render_debug_summary(request: &FlattenRequest, state: &RunState) -> String {
    let mut out = String::new();
    out.push_str("Run summary:\n");
    out.push_str(&format!("- Files included: {}\n", state.included_files));
    out.push_str(&format!(
        "- Estimated tokens used: {} / {}\n",
        state.current_tokens, request.max_tokens
    ));
    out.push_str(&format!("- Depth limit: {}\n", request.depth_limit));
    out.push_str(&format!("- Search root: {}\n", request.base_path.display()));
    if !request.pattern.is_empty() {
        out.push_str(&format!("- Pattern: {}\n", request.pattern));
    }
    if let Some(extension) = &request.extension {
        out.push_str(&format!("- Extension filter: {extension}\n"));
    }
    out
}
