// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::core::flatten::flatten;
use crate::core::format::{render, render_debug_summary};
use crate::models::{DEFAULT_DEPTH_LIMIT, DEFAULT_MAX_INPUT_TOKENS, FlattenRequest};
use crate::utils::absolutize;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Regular expression tested against the full path of each file
    #[arg(long)]
    pub pattern: Option<String>,

    /// Wildcard filter on file base names (e.g. "*.go"; ? matches one character)
    #[arg(long)]
    pub extension: Option<String>,

    /// Ceiling on the estimated token total of the output
    #[arg(long, default_value_t = DEFAULT_MAX_INPUT_TOKENS)]
    pub max_input_tokens: usize,

    /// How many directory levels below the search root to descend
    #[arg(long, default_value_t = DEFAULT_DEPTH_LIMIT)]
    pub depth_limit: usize,

    /// Directory to search (defaults to current directory)
    #[arg(short = 'p', long, default_value = ".")]
    pub path: PathBuf,

    /// Print skip notices and a run summary to stderr
    #[arg(short = 'd', long)]
    pub debug: bool,
}

/// Resolves the search root, runs the flatten, and prints the artifact to
/// stdout. Diagnostics go to stderr, and only in debug mode.
///
/// # Errors
///
/// Returns an error for a bad configuration, a failed traversal, or a run
/// that matched no files.
pub fn run(args: Args) -> Result<()> {
    let base_path = absolutize(&args.path)
        .with_context(|| format!("Failed to resolve search root: {}", args.path.display()))?;

    let request = FlattenRequest {
        pattern: args.pattern.unwrap_or_default(),
        extension: args.extension.filter(|spec| !spec.is_empty()),
        max_tokens: args.max_input_tokens,
        depth_limit: args.depth_limit,
        base_path,
        debug: args.debug,
    };

    let report = flatten(&request).with_context(|| {
        format!(
            "Failed to flatten files under: {}",
            request.base_path.display()
        )
    })?;

    println!("{}", render(&report.artifact));

    if request.debug {
        for notice in &report.notices {
            eprintln!("{notice}");
        }
        eprint!("{}", render_debug_summary(&request, &report.state));
    }

    Ok(())
}
