//! subfix-core — canonical submission schema and tool configuration.
//!
//! This crate holds the types shared between the subfix binary, its
//! integration harnesses, and anything else that needs to read or write
//! canonical submission records: the [`SubmissionRecord`] schema with its
//! sentinel conventions, and the [`config::Config`] the CLI loads at startup.

pub mod config;
pub mod types;

pub use types::{Claim, SubmissionRecord, CLAIM_TYPE_CUSTOM_CODE, NOT_SPECIFIED};
