//! Core types for subfix-core — the canonical submission schema.
//!
//! This module defines the shape every repaired submission file conforms to:
//! the [`SubmissionRecord`] with its nested [`Claim`] list, plus the sentinel
//! and claim-type constants the normalizer enforces.

use serde::{Deserialize, Serialize};

/// Sentinel written in place of null/absent URL fields, meaning
/// "intentionally not provided".
pub const NOT_SPECIFIED: &str = "NOT_SPECIFIED";

/// The only claim type the tracker accepts. The normalizer forces this value
/// onto every record regardless of what the input carried.
pub const CLAIM_TYPE_CUSTOM_CODE: &str = "custom_code";

/// A canonical submission record.
///
/// Field order matters: serialization emits keys in declaration order, which
/// is the order the tracker's reviewers expect to read. Every field has a
/// serde default so a partially filled file still deserializes; producing a
/// fully defaulted record is the normalizer's job, not the caller's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    /// Submitter's tracker username.
    #[serde(default)]
    pub username: String,
    /// Title of the paper the submission reproduces.
    #[serde(default)]
    pub paper_title: String,
    /// Absolute URL of the paper PDF (`http://` or `https://`).
    #[serde(default)]
    pub paper_pdf: String,
    /// Tracker-assigned submission identifier.
    #[serde(default)]
    pub identifier: String,
    /// Always [`CLAIM_TYPE_CUSTOM_CODE`] after normalization.
    #[serde(default = "default_claim_type")]
    pub claim_type: String,
    /// URL of the code used for reproduction, or [`NOT_SPECIFIED`].
    #[serde(default = "default_not_specified")]
    pub code_url: String,
    /// URL of the data used for reproduction, or [`NOT_SPECIFIED`].
    #[serde(default = "default_not_specified")]
    pub data_url: String,
    /// Reproducibility claims with their cleaned instruction lists.
    #[serde(default)]
    pub claims: Vec<Claim>,
    /// Entries the submitter marked non-reproducible. Opaque to subfix;
    /// passed through unchanged.
    #[serde(default)]
    pub non_reproducible_claims: Vec<serde_yaml::Value>,
}

fn default_claim_type() -> String {
    CLAIM_TYPE_CUSTOM_CODE.to_string()
}

fn default_not_specified() -> String {
    NOT_SPECIFIED.to_string()
}

impl Default for SubmissionRecord {
    fn default() -> Self {
        Self {
            username: String::new(),
            paper_title: String::new(),
            paper_pdf: String::new(),
            identifier: String::new(),
            claim_type: default_claim_type(),
            code_url: default_not_specified(),
            data_url: default_not_specified(),
            claims: Vec::new(),
            non_reproducible_claims: Vec::new(),
        }
    }
}

impl SubmissionRecord {
    /// The three fields expected to hold URLs, paired with their key names.
    /// Used by the non-fatal URL shape check.
    pub fn url_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("paper_pdf", self.paper_pdf.as_str()),
            ("code_url", self.code_url.as_str()),
            ("data_url", self.data_url.as_str()),
        ]
    }
}

/// A reproducibility claim owned by its parent [`SubmissionRecord`].
///
/// After normalization no instruction entry carries a leading `"N. "`
/// numbering prefix or a trailing period, and no entry is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Free-text statement of what the paper claims.
    #[serde(default)]
    pub claim: String,
    /// Ordered reproduction steps.
    #[serde(default)]
    pub instruction: Vec<String>,
}
