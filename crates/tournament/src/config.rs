//! Runner configuration loaded from TOML

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "cup.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Tournament configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// JSON file holding every championship
    pub data_file: PathBuf,
    /// Fixed RNG seed; unset draws from entropy
    pub seed: Option<u64>,
    /// Tracing filter used when RUST_LOG is not set
    pub log_filter: String,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("championships.json"),
            seed: None,
            log_filter: "info".to_string(),
        }
    }
}

impl TournamentConfig {
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load `path` if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
