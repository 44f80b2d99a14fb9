//! Submission file loading and persistence.
//!
//! Loading attempts YAML first and re-parses as JSON when YAML fails; the
//! corpus contains both, with YAML as the primary format. Output is always
//! YAML: block style, keys in struct-declaration order, never sorted.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Both parsers rejected the document.
#[derive(Debug, Error)]
#[error("not valid YAML ({yaml}) and not valid JSON ({json})")]
pub struct ParseError {
    pub yaml: serde_yaml::Error,
    pub json: serde_json::Error,
}

/// Per-file I/O and serialization failures, tagged with the offending path.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
    #[error("failed to serialize record for {}", .path.display())]
    Emit {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parse a submission document, trying YAML first and JSON second.
pub fn parse_document<T: DeserializeOwned>(text: &str) -> Result<T, ParseError> {
    match serde_yaml::from_str(text) {
        Ok(value) => {
            debug!("document accepted by the YAML parser");
            Ok(value)
        }
        Err(yaml) => match serde_json::from_str(text) {
            Ok(value) => {
                debug!("document accepted by the JSON parser after YAML rejected it");
                Ok(value)
            }
            Err(json) => Err(ParseError { yaml, json }),
        },
    }
}

/// Read and parse one submission file.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T, FileError> {
    let text = std::fs::read_to_string(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&text).map_err(|source| FileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize `value` as block-style YAML and write it to `path`.
pub fn save<T: Serialize>(path: &Path, value: &T) -> Result<(), FileError> {
    let yaml = serde_yaml::to_string(value).map_err(|source| FileError::Emit {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, yaml).map_err(|source| FileError::Write {
        path: path.to_path_buf(),
        source,
    })
}
