// src/core/test_utils.rs
use anyhow::Result;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(content.as_bytes())?;
    Ok(file_path)
}

pub fn setup_test_directory() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_test_file(&dir, "a.go", "package main\n\nfunc a() int {\n\treturn 1\n}\n")?;
    create_test_file(&dir, "b.go", "package main\n\nfunc b() int {\n\treturn 2\n}\n")?;
    create_test_file(&dir, "notes.txt", "plain text notes\n")?;
    create_test_file(&dir, "pkg/util.go", "package pkg\n\nfunc Util() {}\n")?;
    create_test_file(&dir, ".cache/generated.go", "package cache\n")?;

    Ok(dir)
}
