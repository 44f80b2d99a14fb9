//! Code-URL patcher — rewrites a missing or placeholder `code_url` in place.
//!
//! Works on the raw YAML mapping rather than the canonical record so that
//! fields the schema does not know about survive untouched, in their
//! original key order. Only YAML is accepted here; the broad normalizer owns
//! the JSON fallback.

use anyhow::{bail, Context};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;
use subfix_core::NOT_SPECIFIED;

/// What [`patch_code_url`] did to the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// `code_url` was missing or a placeholder and has been rewritten.
    Fixed,
    /// `code_url` already holds a real value; the file was not touched.
    AlreadyValid,
}

/// Patch one file. `code_url` missing, `null`, empty, whitespace-only, or
/// equal to the sentinel is replaced with `fallback_url` and the file is
/// rewritten; any other string leaves the file untouched. A non-string
/// `code_url` is an error.
pub fn patch_code_url(path: &Path, fallback_url: &str) -> anyhow::Result<PatchOutcome> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mut doc: Mapping = serde_yaml::from_str(&text)
        .with_context(|| format!("{} is not a YAML mapping", path.display()))?;

    let key = Value::String("code_url".to_string());
    let needs_fix = match doc.get(&key) {
        None | Some(Value::Null) => true,
        Some(Value::String(url)) => url.trim().is_empty() || url == NOT_SPECIFIED,
        Some(other) => bail!(
            "code_url in {} is not a string: {:?}",
            path.display(),
            other
        ),
    };

    if !needs_fix {
        return Ok(PatchOutcome::AlreadyValid);
    }

    doc.insert(key, Value::String(fallback_url.to_string()));
    let yaml = serde_yaml::to_string(&doc)
        .with_context(|| format!("failed to serialize {}", path.display()))?;
    fs::write(path, yaml).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(PatchOutcome::Fixed)
}
