//! Builders and filesystem helpers for the harnesses.

use std::path::{Path, PathBuf};
use subfix::normalizer::{self, RawClaim, RawInstruction, RawSubmission};
use subfix_core::SubmissionRecord;

/// Write `content` as `name` inside `dir` and return the full path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("fixture write must succeed");
    path
}

/// Read a written-back submission file as the canonical record.
pub fn read_record(path: &Path) -> SubmissionRecord {
    let text = std::fs::read_to_string(path).expect("output file must exist");
    serde_yaml::from_str(&text).expect("output must be canonical YAML")
}

/// A raw submission holding a single claim with the given instruction shape.
pub fn submission_with_instruction(instruction: RawInstruction) -> RawSubmission {
    RawSubmission {
        claims: Some(vec![RawClaim {
            claim: Some("the result reproduces".to_string()),
            instruction: Some(instruction),
        }]),
        ..RawSubmission::default()
    }
}

/// Run a canonical record back through the normalizer, the way a second
/// batch run over already-fixed files would.
pub fn renormalize(record: &SubmissionRecord) -> SubmissionRecord {
    let yaml = serde_yaml::to_string(record).expect("record must serialize");
    let raw: RawSubmission =
        subfix::loader::parse_document(&yaml).expect("canonical output must re-parse");
    normalizer::normalize(raw)
}
