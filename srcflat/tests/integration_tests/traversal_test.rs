// tests/integration_tests/traversal_test.rs
use super::common::{create_test_file, request_for, setup_source_tree};
use anyhow::Result;
use srcflat::{FlattenError, flatten, render};
use tempfile::TempDir;

#[test]
fn test_hidden_subtree_never_reaches_the_artifact() -> Result<()> {
    let temp_dir = setup_source_tree()?;

    let request = request_for(temp_dir.path(), ".*", Some("*.go"));
    let report = flatten(&request)?;

    assert!(
        report
            .artifact
            .entries
            .iter()
            .all(|e| !e.relative_path.starts_with(".cache")),
        ".cache/generated.go matches *.go but must stay excluded"
    );
    let out = render(&report.artifact);
    assert!(!out.contains("generated"));
    Ok(())
}

#[test]
fn test_files_below_depth_limit_are_never_included() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "top.go", "package top\n")?;
    create_test_file(temp_dir.path(), "one/mid.go", "package mid\n")?;
    create_test_file(temp_dir.path(), "one/two/low.go", "package low\n")?;
    create_test_file(temp_dir.path(), "one/two/three/deep.go", "package deep\n")?;

    let mut request = request_for(temp_dir.path(), ".*", Some("*.go"));
    request.depth_limit = 1;
    let report = flatten(&request)?;

    let names: Vec<String> = report
        .artifact
        .entries
        .iter()
        .map(|e| e.relative_path.display().to_string())
        .collect();
    // `one` sits at the limit and is entered; `one/two` exceeds it, so
    // low.go and deep.go are pruned along with the directory.
    assert_eq!(names, ["one/mid.go", "top.go"]);
    assert!(
        report.notices.iter().any(|n| n.contains("one/two")),
        "the pruned directory should be named in a notice"
    );
    Ok(())
}

#[test]
fn test_unreadable_base_path_aborts_the_run() -> Result<()> {
    let request = request_for(std::path::Path::new("/no/such/base"), ".*", None);
    let err = flatten(&request).unwrap_err();
    assert!(matches!(err, FlattenError::Traversal { .. }));
    Ok(())
}

#[test]
fn test_repeat_runs_produce_identical_artifacts() -> Result<()> {
    let temp_dir = setup_source_tree()?;

    let request = request_for(temp_dir.path(), ".*", Some("*.go"));
    let first = render(&flatten(&request)?.artifact);
    let second = render(&flatten(&request)?.artifact);

    assert_eq!(first, second, "an unchanged tree must flatten identically");
    Ok(())
}
