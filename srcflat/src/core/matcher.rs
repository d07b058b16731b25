// src/core/matcher.rs
use regex::Regex;
use std::path::Path;

use crate::error::FlattenError;

/// Inclusion predicate over file paths: a free-form pattern tested against
/// the full path, combined with an optional wildcard filter tested against
/// the base name only.
#[derive(Debug)]
pub struct Matcher {
    pattern: Regex,
    extension: ExtensionFilter,
}

#[derive(Debug)]
enum ExtensionFilter {
    /// No spec supplied; every base name passes.
    Off,
    On(Regex),
    /// The wildcard failed to compile; no base name passes.
    Broken,
}

impl Matcher {
    /// Compiles the pattern and the optional wildcard extension spec.
    ///
    /// An empty pattern matches every path. A malformed extension spec is
    /// not fatal: it degrades to a filter that matches nothing, with a
    /// warning on stderr.
    ///
    /// # Errors
    ///
    /// Returns [`FlattenError::InvalidPattern`] if `pattern` is not a
    /// valid regular expression.
    pub fn new(pattern: &str, extension: Option<&str>) -> Result<Self, FlattenError> {
        let compiled = Regex::new(pattern).map_err(|source| FlattenError::InvalidPattern {
            pattern: pattern.to_owned(),
            source,
        })?;

        let extension = match extension {
            None => ExtensionFilter::Off,
            Some(spec) if spec.is_empty() => ExtensionFilter::Off,
            Some(spec) => match Regex::new(&wildcard_to_regex(spec)) {
                Ok(re) => ExtensionFilter::On(re),
                Err(err) => {
                    eprintln!("Warning: invalid extension filter '{spec}': {err}");
                    ExtensionFilter::Broken
                }
            },
        };

        Ok(Self {
            pattern: compiled,
            extension,
        })
    }

    /// True when the path satisfies both the pattern and the extension
    /// filter.
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        if !self.pattern.is_match(&path.to_string_lossy()) {
            return false;
        }

        match &self.extension {
            ExtensionFilter::Off => true,
            ExtensionFilter::On(re) => path
                .file_name()
                .is_some_and(|name| re.is_match(&name.to_string_lossy())),
            ExtensionFilter::Broken => false,
        }
    }
}

/// Converts a wildcard spec such as `*.go` into an anchored regular
/// expression: `*` matches any sequence, `?` exactly one character,
/// everything else literally. Anchored so the whole base name must match.
fn wildcard_to_regex(spec: &str) -> String {
    let escaped = regex::escape(spec);
    let translated = escaped.replace("\\*", ".*").replace("\\?", ".");
    format!("^{translated}$")
}
