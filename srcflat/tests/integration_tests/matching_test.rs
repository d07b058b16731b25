// tests/integration_tests/matching_test.rs
use super::common::{request_for, setup_source_tree};
use anyhow::Result;
use srcflat::{FlattenError, flatten, render};

#[test]
fn test_extension_wildcard_selects_exact_suffix() -> Result<()> {
    let temp_dir = setup_source_tree()?;

    let request = request_for(temp_dir.path(), ".*", Some("*.go"));
    let report = flatten(&request)?;

    let names: Vec<String> = report
        .artifact
        .entries
        .iter()
        .map(|e| e.relative_path.display().to_string())
        .collect();
    assert_eq!(
        names,
        ["main.go", "pkg/util.go"],
        "*.go must take main.go and pkg/util.go but reject main.go.bak and main.txt"
    );
    Ok(())
}

#[test]
fn test_pattern_narrows_by_full_path() -> Result<()> {
    let temp_dir = setup_source_tree()?;

    let request = request_for(temp_dir.path(), "pkg/", Some("*.go"));
    let report = flatten(&request)?;

    assert_eq!(report.state.included_files, 1);
    assert!(report.artifact.entries[0].relative_path.ends_with("util.go"));
    Ok(())
}

#[test]
fn test_unmatched_pattern_is_an_error() -> Result<()> {
    let temp_dir = setup_source_tree()?;

    let request = request_for(temp_dir.path(), "no-file-is-called-this", None);
    let err = flatten(&request).unwrap_err();

    match err {
        FlattenError::NoMatch { pattern } => {
            assert_eq!(pattern, "no-file-is-called-this");
        }
        other => panic!("expected NoMatch, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_artifact_blocks_are_fenced_and_headed() -> Result<()> {
    let temp_dir = setup_source_tree()?;

    let request = request_for(temp_dir.path(), "", Some("*.go"));
    let report = flatten(&request)?;
    let out = render(&report.artifact);

    assert!(out.starts_with("### main.go\n```\n"));
    assert!(out.contains("\n```\n\n### pkg/util.go\n```\n"));
    assert!(out.ends_with("```\n\n"));
    Ok(())
}

#[test]
fn test_both_filters_empty_is_a_configuration_error() -> Result<()> {
    let temp_dir = setup_source_tree()?;

    let request = request_for(temp_dir.path(), "", None);
    let err = flatten(&request).unwrap_err();
    assert!(matches!(err, FlattenError::EmptyFilter));
    Ok(())
}
