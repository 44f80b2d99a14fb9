//! Normalizer — reshapes loosely structured submission input into the
//! canonical [`SubmissionRecord`].
//!
//! Input is accepted through the lenient [`RawSubmission`] shape: every field
//! optional, explicit `null` treated as absent, unknown keys ignored, and
//! `instruction` given as either a bare string or a sequence. [`normalize`]
//! is a pure function from that shape to the canonical record; file I/O and
//! warning emission live in [`normalize_file`].

use crate::loader;
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::sync::LazyLock;
use subfix_core::{Claim, SubmissionRecord, CLAIM_TYPE_CUSTOM_CODE, NOT_SPECIFIED};
use tracing::warn;

/// Leading instruction numbering: digits, a period, optional whitespace.
static NUMBERING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.\s*").expect("numbering pattern must compile"));

// ---------------------------------------------------------------------------
// Raw input shapes
// ---------------------------------------------------------------------------

/// A submission record as found on disk, before normalization.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawSubmission {
    pub username: Option<String>,
    pub paper_title: Option<String>,
    pub paper_pdf: Option<String>,
    pub identifier: Option<String>,
    pub code_url: Option<String>,
    pub data_url: Option<String>,
    pub claims: Option<Vec<RawClaim>>,
    pub non_reproducible_claims: Option<Vec<serde_yaml::Value>>,
}

/// A claim as found on disk. `instruction` may be a single string instead of
/// a sequence; a sequence may hold non-string entries.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawClaim {
    pub claim: Option<String>,
    pub instruction: Option<RawInstruction>,
}

/// The two accepted spellings of an instruction list. Any other shape (a
/// bare number, a mapping) is a parse error and fails the whole file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawInstruction {
    Text(String),
    List(Vec<serde_yaml::Value>),
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Produce the canonical record: defaults for missing fields, `claim_type`
/// unconditionally forced, claim instructions cleaned.
pub fn normalize(raw: RawSubmission) -> SubmissionRecord {
    SubmissionRecord {
        username: raw.username.unwrap_or_default(),
        paper_title: raw.paper_title.unwrap_or_default(),
        paper_pdf: raw.paper_pdf.unwrap_or_default(),
        identifier: raw.identifier.unwrap_or_default(),
        claim_type: CLAIM_TYPE_CUSTOM_CODE.to_string(),
        code_url: raw.code_url.unwrap_or_else(|| NOT_SPECIFIED.to_string()),
        data_url: raw.data_url.unwrap_or_else(|| NOT_SPECIFIED.to_string()),
        claims: raw
            .claims
            .unwrap_or_default()
            .into_iter()
            .map(normalize_claim)
            .collect(),
        non_reproducible_claims: raw.non_reproducible_claims.unwrap_or_default(),
    }
}

fn normalize_claim(raw: RawClaim) -> Claim {
    let entries = match raw.instruction {
        None => Vec::new(),
        // A bare string is promoted to a one-element sequence.
        Some(RawInstruction::Text(text)) => vec![serde_yaml::Value::String(text)],
        Some(RawInstruction::List(entries)) => entries,
    };
    Claim {
        claim: raw.claim.unwrap_or_default(),
        instruction: entries.into_iter().filter_map(clean_instruction).collect(),
    }
}

/// Clean one instruction entry. String entries lose their numbering prefix
/// and trailing periods and are dropped when nothing remains; non-string
/// entries are kept as their plain string rendering, uncleaned.
fn clean_instruction(entry: serde_yaml::Value) -> Option<String> {
    match entry {
        serde_yaml::Value::String(text) => {
            let cleaned = NUMBERING.replace(text.trim(), "");
            let cleaned = cleaned.trim_end_matches('.');
            if cleaned.is_empty() {
                None
            } else {
                Some(cleaned.to_string())
            }
        }
        other => Some(render_scalar(&other)),
    }
}

fn render_scalar(value: &serde_yaml::Value) -> String {
    serde_yaml::to_string(value)
        .map(|text| text.trim_end().to_string())
        .unwrap_or_default()
}

/// The subset of `{paper_pdf, code_url, data_url}` holding a value that is
/// non-empty, not the sentinel, and not an absolute `http(s)://` URL.
pub fn suspect_url_fields(record: &SubmissionRecord) -> Vec<&'static str> {
    record
        .url_fields()
        .into_iter()
        .filter(|(_, url)| {
            !url.is_empty()
                && *url != NOT_SPECIFIED
                && !url.starts_with("http://")
                && !url.starts_with("https://")
        })
        .map(|(name, _)| name)
        .collect()
}

// ---------------------------------------------------------------------------
// File pipeline
// ---------------------------------------------------------------------------

/// Load `input` (YAML, falling back to JSON), normalize it, warn about
/// malformed URLs, and write the result to `output` as YAML. Warnings never
/// block the write.
pub fn normalize_file(input: &Path, output: &Path) -> anyhow::Result<()> {
    let raw: RawSubmission = loader::load(input)?;
    let record = normalize(raw);
    for field in suspect_url_fields(&record) {
        warn!(
            field,
            file = %input.display(),
            "URL does not start with http:// or https://"
        );
    }
    loader::save(output, &record)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
