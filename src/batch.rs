//! Batch driver — directory discovery and per-file dispatch.
//!
//! Failure policy: a file that fails to load, transform, or write is logged
//! with its path and counted; the batch always runs to completion and
//! reports aggregate counts. User-facing status goes to stdout, diagnostics
//! to the tracing subscriber on stderr.

use crate::filename::{validate_filename, FilenameStatus};
use crate::normalizer;
use crate::patcher::{self, PatchOutcome};
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::error;

/// Extensions the normalizer batch considers.
pub const SUBMISSION_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// Extensions the code-URL patcher considers. The patcher only speaks YAML.
pub const PATCHER_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Aggregate result of a normalizer batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Aggregate result of a patcher batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PatchSummary {
    pub fixed: usize,
    pub total: usize,
}

/// List submission files directly inside `dir` (no recursion), sorted by
/// path so batch runs are deterministic.
pub fn discover_submissions(dir: &Path, extensions: &[&str]) -> anyhow::Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("failed to read an entry of {}", dir.display()))?
            .path();
        if !path.is_file() {
            continue;
        }
        let matched = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| extensions.contains(&ext));
        if matched {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Normalize every submission file in `input`. With an `output` directory,
/// fixed files land there (created if needed); otherwise files are rewritten
/// in place. Invalid filenames are written under their sanitized name.
pub fn normalize_dir(input: &Path, output: Option<&Path>) -> anyhow::Result<BatchSummary> {
    if let Some(out) = output {
        std::fs::create_dir_all(out)
            .with_context(|| format!("failed to create output directory {}", out.display()))?;
    }

    let files = discover_submissions(input, SUBMISSION_EXTENSIONS)?;
    if files.is_empty() {
        println!("No submission files found in {}", input.display());
        return Ok(BatchSummary::default());
    }

    let mut summary = BatchSummary::default();
    for file in &files {
        let target = output_path_for(file, output);
        match normalizer::normalize_file(file, &target) {
            Ok(()) => {
                println!("Successfully fixed {}", file.display());
                summary.succeeded += 1;
            }
            Err(err) => {
                error!(file = %file.display(), "failed to fix submission: {err:#}");
                summary.failed += 1;
            }
        }
    }

    println!();
    println!("Batch processing complete:");
    println!("  processed: {}", summary.succeeded);
    println!("  failed:    {}", summary.failed);
    Ok(summary)
}

/// Where the fixed record for `file` should be written.
///
/// The original file is left on disk when an in-place run sanitizes a bad
/// filename; only the fixed copy moves to the new name.
fn output_path_for(file: &Path, output: Option<&Path>) -> PathBuf {
    let base = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    match (validate_filename(&base), output) {
        (FilenameStatus::Valid, Some(out)) => out.join(base),
        (FilenameStatus::Invalid { suggested }, Some(out)) => {
            println!("Renaming {base} to {suggested}");
            out.join(suggested)
        }
        (FilenameStatus::Valid, None) => file.to_path_buf(),
        (FilenameStatus::Invalid { suggested }, None) => {
            println!("Will rename {base} to {suggested}");
            file.with_file_name(suggested)
        }
    }
}

/// Patch `code_url` in every YAML file in `dir`. Per-file errors are logged
/// and counted as not fixed.
pub fn patch_dir(dir: &Path, fallback_url: &str) -> anyhow::Result<PatchSummary> {
    let files = discover_submissions(dir, PATCHER_EXTENSIONS)?;
    if files.is_empty() {
        println!("No YAML files found in {}", dir.display());
        return Ok(PatchSummary::default());
    }

    let mut summary = PatchSummary {
        fixed: 0,
        total: files.len(),
    };
    for file in &files {
        match patcher::patch_code_url(file, fallback_url) {
            Ok(PatchOutcome::Fixed) => {
                println!("Fixed code_url in {}", file.display());
                summary.fixed += 1;
            }
            Ok(PatchOutcome::AlreadyValid) => {
                println!("code_url already valid in {}", file.display());
            }
            Err(err) => {
                error!(file = %file.display(), "failed to patch code_url: {err:#}");
            }
        }
    }

    println!();
    println!("Fixed {} out of {} files", summary.fixed, summary.total);
    Ok(summary)
}
