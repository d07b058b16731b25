// src/core/flatten.rs
use std::fs;

use crate::core::matcher::Matcher;
use crate::core::tokens::{HeuristicEstimator, TokenEstimator};
use crate::core::walker::collect_files;
use crate::error::FlattenError;
use crate::models::{Artifact, FlattenReport, FlattenRequest, RunState};

/// Line appended when a file's content is cut short to fit the budget.
pub const TRUNCATION_MARKER: &str = "... (truncated)";

/// Runs a flatten with the default heuristic cost model.
///
/// # Errors
///
/// Returns [`FlattenError::EmptyFilter`] or [`FlattenError::InvalidPattern`]
/// for a bad configuration, [`FlattenError::Traversal`] if the tree cannot
/// be walked, and [`FlattenError::NoMatch`] if no file passed the filters.
pub fn flatten(request: &FlattenRequest) -> Result<FlattenReport, FlattenError> {
    flatten_with_estimator(request, &HeuristicEstimator)
}

/// Runs a flatten with a caller-supplied cost model.
///
/// Candidates are consumed in traversal order. Each one is read and
/// checked for well-formed UTF-8 (failures skip the file with a notice),
/// then weighed against the remaining budget: accepted whole if it fits,
/// truncated line by line if it is the first accepted file and alone
/// exceeds the budget, and otherwise the run stops — a file arriving
/// after the budget is partly consumed is never partially included.
///
/// # Errors
///
/// See [`flatten`].
pub fn flatten_with_estimator(
    request: &FlattenRequest,
    estimator: &dyn TokenEstimator,
) -> Result<FlattenReport, FlattenError> {
    request.validate()?;
    let matcher = Matcher::new(&request.pattern, request.extension.as_deref())?;

    let mut notices = Vec::new();
    let files = collect_files(&request.base_path, request.depth_limit, &mut notices)?;
    let candidates: Vec<_> = files
        .into_iter()
        .filter(|candidate| matcher.matches(&candidate.path))
        .collect();

    if candidates.is_empty() {
        return Err(FlattenError::NoMatch {
            pattern: request.pattern.clone(),
        });
    }

    let mut artifact = Artifact::new();
    let mut state = RunState::new();

    for candidate in candidates {
        let bytes = match fs::read(&candidate.path) {
            Ok(bytes) => bytes,
            Err(err) => {
                notices.push(format!(
                    "Skipped unreadable file {}: {err}",
                    candidate.relative.display()
                ));
                continue;
            }
        };
        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(_) => {
                notices.push(format!(
                    "Skipped non-UTF-8 file: {}",
                    candidate.relative.display()
                ));
                continue;
            }
        };

        let file_tokens = estimator.estimate(&content);

        if state.current_tokens.saturating_add(file_tokens) > request.max_tokens {
            if state.included_files > 0 {
                notices.push(format!(
                    "Token budget ({}) reached; {} file(s) included",
                    request.max_tokens, state.included_files
                ));
                break;
            }

            // Nothing accepted yet, so keep as much of this file as fits.
            notices.push(format!(
                "First file {} exceeds the budget (estimated {file_tokens} tokens); truncating",
                candidate.relative.display()
            ));
            let truncated = truncate_content(&content, request.max_tokens, estimator);
            artifact.push(candidate.relative, truncated);
            state.current_tokens = request.max_tokens;
            state.included_files = 1;
            break;
        }

        artifact.push(candidate.relative, content);
        state.current_tokens = state.current_tokens.saturating_add(file_tokens);
        state.included_files = state.included_files.saturating_add(1);

        if state.current_tokens >= request.max_tokens {
            break;
        }
    }

    Ok(FlattenReport {
        artifact,
        state,
        notices,
    })
}

/// Keeps whole leading lines while their running estimate stays within
/// `max_tokens`, then appends the truncation marker. Lines are re-costed
/// with the same estimator used for whole files.
fn truncate_content(content: &str, max_tokens: usize, estimator: &dyn TokenEstimator) -> String {
    let mut truncated = String::new();
    let mut current_tokens = 0_usize;

    for line in content.lines() {
        let line_tokens = estimator.estimate(line);
        if current_tokens.saturating_add(line_tokens) > max_tokens {
            truncated.push_str(TRUNCATION_MARKER);
            truncated.push('\n');
            break;
        }
        truncated.push_str(line);
        truncated.push('\n');
        current_tokens = current_tokens.saturating_add(line_tokens);
    }

    truncated
}
