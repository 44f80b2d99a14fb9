//! Static submission corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of representative documents in
//! the shapes the tracker actually receives: tidy records, records with bare
//! string instructions, numbered prose, missing fields, and wrong
//! `claim_type` values.

/// YAML submission documents in various states of disrepair.
pub const CORPUS_YAML: &[&str] = &[
    // Tidy record, already close to canonical.
    r#"username: alice
paper_title: Attention Is All You Need
paper_pdf: https://arxiv.org/pdf/1706.03762
identifier: sub-0001
claim_type: custom_code
code_url: https://github.com/alice/transformer-repro
data_url: NOT_SPECIFIED
claims:
- claim: Table 1 BLEU reproduces within 0.5 points
  instruction:
  - Install the requirements
  - Run train.sh on WMT14
"#,
    // Numbered prose instructions with trailing periods.
    r#"username: bob
paper_title: Scaling Laws for Neural Language Models
paper_pdf: https://arxiv.org/pdf/2001.08361
identifier: sub-0002
code_url: https://github.com/bob/scaling-repro
claims:
- claim: Figure 1 loss curve matches
  instruction:
  - "1. Download the corpus."
  - "2. Run preprocess.py."
  - "3. Train for 100k steps."
"#,
    // Bare string instruction, wrong claim_type, missing URLs.
    r#"username: carol
paper_title: A Study of Sparse Attention
identifier: sub-0003
claim_type: replication
claims:
- claim: Section 4 speedup holds on CPU
  instruction: 1. Run benchmark.sh and compare table 2.
"#,
    // Almost empty record.
    r#"username: dave
"#,
    // Non-reproducible claims are passed through.
    r#"username: erin
paper_title: Lottery Tickets Revisited
identifier: sub-0005
code_url: NOT_SPECIFIED
claims: []
non_reproducible_claims:
- claim: Requires a 2048-GPU cluster
  reason: hardware
"#,
];

/// JSON submission documents (the loader's fallback format).
pub const CORPUS_JSON: &[&str] = &[
    r#"{"username": "frank", "paper_title": "Deep Residual Learning", "paper_pdf": "https://arxiv.org/pdf/1512.03385", "identifier": "sub-0006", "code_url": "https://github.com/frank/resnet-repro", "claims": [{"claim": "Top-1 error within 0.3", "instruction": ["1. Fetch ImageNet.", "2. Run main.py."]}]}"#,
    r#"{"username": "grace", "identifier": "sub-0007", "claims": [{"claim": "X", "instruction": "1. Do thing."}]}"#,
    r#"{"username": "heidi", "paper_title": "Adam: A Method for Stochastic Optimization", "code_url": "", "claims": []}"#,
];

/// The worked end-to-end example: bare string instruction, numbered, with a
/// trailing period; everything else missing.
pub const MINIMAL_MESSY_JSON: &str =
    r#"{"claims": [{"claim": "X", "instruction": "1. Do thing."}]}"#;

/// A document neither parser accepts.
pub const GARBAGE_DOCUMENT: &str = "{unterminated: [";
