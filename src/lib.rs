//! subfix — submission-record fixer for the paper reproducibility tracker.
//!
//! Submission metadata files are written by hand and arrive malformed:
//! missing fields, placeholder URLs, instruction lists typed as numbered
//! prose, filenames that break the CI shell. This crate repairs them with
//! two independent passes over the same data shape:
//!
//! ```text
//! fix-urls:   read YAML ──► patch code_url ──────────────────► write back
//! normalize:  read YAML/JSON ──► canonical record ──► URL check ──► write YAML
//! ```
//!
//! Processing is sequential, synchronous, and per-file. A file that fails to
//! load, transform, or write is logged and counted; the batch driver never
//! aborts on a single file.

pub mod batch;
pub mod filename;
pub mod loader;
pub mod normalizer;
pub mod patcher;
pub mod workflow;
