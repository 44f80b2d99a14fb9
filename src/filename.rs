//! Filename validation for submission files.
//!
//! CI consumes submission paths in shell contexts, so base names are
//! restricted to `[a-zA-Z0-9_.-]`. Validation is pure; the batch driver
//! decides whether to act on the suggestion.

use regex::Regex;
use std::sync::LazyLock;

static ALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_.-]+$").expect("filename pattern must compile"));

/// Result of checking a base name against the allowed character set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilenameStatus {
    Valid,
    /// The name contains disallowed characters; `suggested` has each one
    /// replaced with `_`.
    Invalid { suggested: String },
}

/// Check a file's base name (no directory components).
pub fn validate_filename(base_name: &str) -> FilenameStatus {
    if ALLOWED.is_match(base_name) {
        return FilenameStatus::Valid;
    }
    let suggested = base_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    FilenameStatus::Invalid { suggested }
}
