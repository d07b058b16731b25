// src/utils.rs
use std::env;
use std::io;
use std::path::{Path, PathBuf};

/// True when the entry's own name starts with `.`, excluding the `.`/`..`
/// self references. The walk root is exempted separately by depth.
pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.') && name != "." && name != "..")
}

/// Resolves a possibly relative path against the current working directory.
///
/// # Errors
///
/// Returns an error if the current working directory cannot be determined.
pub fn absolutize(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}
