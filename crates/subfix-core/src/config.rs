//! Configuration types for subfix.
//!
//! [`Config::load`] reads `~/.config/subfix/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[paths]
submissions_dir = "submissions"

[patcher]
fallback_code_url = "http://www.quantum-espresso.org/download"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level tool configuration, loaded from `~/.config/subfix/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub patcher: PatcherConfig,
}

/// `[paths]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_submissions_dir")]
    pub submissions_dir: PathBuf,
}

fn default_submissions_dir() -> PathBuf {
    PathBuf::from("submissions")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            submissions_dir: default_submissions_dir(),
        }
    }
}

/// `[patcher]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PatcherConfig {
    /// URL written into records whose `code_url` is missing or a placeholder.
    #[serde(default = "default_fallback_code_url")]
    pub fallback_code_url: String,
}

fn default_fallback_code_url() -> String {
    "http://www.quantum-espresso.org/download".to_string()
}

impl Default for PatcherConfig {
    fn default() -> Self {
        Self {
            fallback_code_url: default_fallback_code_url(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/subfix/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("subfix")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
