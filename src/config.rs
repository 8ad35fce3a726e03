//! # Configuration
//!
//! [`Config`] is read from an optional TOML file and then overridden by command
//! line flags or their environment variables (see `main.rs`).
//!
//! ```toml
//! api_base_url = "https://portfolio.example.com"
//! log_filter = "info,resource_client=debug"
//! channel_capacity = 32
//! current_path = "/projects"
//! ```

use crate::interaction::PROJECTS_ROOT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Projects page configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Origin serving `/api/projects`.
    pub api_base_url: String,

    /// Fallback `tracing` filter when `RUST_LOG` is unset.
    pub log_filter: String,

    /// Mailbox size of the list controller.
    pub channel_capacity: usize,

    /// Route the page starts on.
    pub current_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            log_filter: "info".to_string(),
            channel_capacity: 32,
            current_path: PROJECTS_ROOT.to_string(),
        }
    }
}

impl Config {
    /// Loads `path` when given, otherwise the defaults. The result is validated.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::from_toml(&text)?
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "api_base_url must start with http:// or https://, got {:?}",
                self.api_base_url
            )));
        }
        if self.channel_capacity == 0 {
            return Err(ConfigError::Invalid(
                "channel_capacity must be greater than 0".to_string(),
            ));
        }
        if !self.current_path.starts_with('/') {
            return Err(ConfigError::Invalid(format!(
                "current_path must be absolute, got {:?}",
                self.current_path
            )));
        }
        Ok(())
    }
}
