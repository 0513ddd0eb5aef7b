//! Configuration loading for github-pr-mcp
//!
//! Configuration is loaded from:
//! 1. Environment variable GITHUB_PR_MCP_CONFIG (path to a TOML file)
//! 2. ~/.binks/github-pr.toml
//! 3. Default values
//!
//! Environment overrides are applied last:
//! - GITHUB_PR_MCP_GH_BINARY
//! - GITHUB_PR_MCP_WORKDIR
//! - GITHUB_PR_MCP_TIMEOUT_SECS

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_PATH_ENV: &str = "GITHUB_PR_MCP_CONFIG";
pub const GH_BINARY_ENV: &str = "GITHUB_PR_MCP_GH_BINARY";
pub const WORKDIR_ENV: &str = "GITHUB_PR_MCP_WORKDIR";
pub const TIMEOUT_ENV: &str = "GITHUB_PR_MCP_TIMEOUT_SECS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid value for {var}: {value:?} is not a whole number of seconds")]
    InvalidTimeout { var: &'static str, value: String },
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// gh CLI invocation settings
    #[serde(default)]
    pub gh: GhConfig,
}

/// gh CLI invocation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GhConfig {
    /// gh binary name or path
    #[serde(default = "default_binary")]
    pub binary: String,
    /// Directory gh runs in (defaults to the server's cwd)
    #[serde(default)]
    pub working_dir: Option<PathBuf>,
    /// Kill gh after this many seconds (no limit when unset)
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

fn default_binary() -> String {
    "gh".to_string()
}

impl Default for GhConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            working_dir: None,
            timeout_seconds: None,
        }
    }
}

impl Config {
    /// Load configuration from file (if any) plus process environment
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::find_config_path();
        let mut config = match path {
            Some(ref path) if path.exists() => {
                tracing::info!("Loading config from: {}", path.display());
                Self::from_file(path)?
            }
            _ => {
                tracing::info!("Config file not found, using defaults");
                Self::default()
            }
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply environment overrides; blank values are ignored
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(binary) = lookup(GH_BINARY_ENV) {
            self.gh.binary = binary;
        }
        if let Some(dir) = lookup(WORKDIR_ENV) {
            self.gh.working_dir = Some(PathBuf::from(dir));
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let seconds = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout {
                    var: TIMEOUT_ENV,
                    value: raw.clone(),
                })?;
            self.gh.timeout_seconds = Some(seconds);
        }
        Ok(())
    }

    fn find_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        dirs::home_dir().map(|home| home.join(".binks").join("github-pr.toml"))
    }
}
