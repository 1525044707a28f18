//! Optional TOML config file, merged under command-line flags.
//!
//! ```toml
//! org = "acme"
//! api_url = "https://api.github.com"
//! repos = ["django-admin-tool", "Rust", "grafana-dash"]
//!
//! [pacing]
//! file_min_ms = 500
//! file_max_ms = 1200
//! repo_min_ms = 3000
//! repo_max_ms = 6000
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::populate::Pacing;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("pacing range {name} has min {min}ms above max {max}ms")]
    InvalidPacing { name: &'static str, min: u64, max: u64 },
    #[error("no {0} given (pass it as a flag or set it in the config file)")]
    Missing(&'static str),
}

#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub org: Option<String>,
    pub api_url: Option<String>,
    #[serde(default)]
    pub repos: Vec<String>,
    pub pacing: Option<PacingConfig>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PacingConfig {
    pub file_min_ms: u64,
    pub file_max_ms: u64,
    pub repo_min_ms: u64,
    pub repo_max_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            file_min_ms: 500,
            file_max_ms: 1200,
            repo_min_ms: 3000,
            repo_max_ms: 6000,
        }
    }
}

impl PacingConfig {
    pub fn to_pacing(self) -> Result<Pacing, ConfigError> {
        let range = |name, min: u64, max: u64| {
            if min > max {
                Err(ConfigError::InvalidPacing { name, min, max })
            } else {
                Ok((Duration::from_millis(min), Duration::from_millis(max)))
            }
        };
        Ok(Pacing {
            between_files: range("file", self.file_min_ms, self.file_max_ms)?,
            between_repos: range("repo", self.repo_min_ms, self.repo_max_ms)?,
        })
    }
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` if given, otherwise an empty config.
    pub fn load_optional(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map(Self::load).transpose().map(Option::unwrap_or_default)
    }

    /// Flag values win; an empty flag list falls back to the file's list.
    pub fn repos_or(&self, from_flags: &[String]) -> Vec<String> {
        if from_flags.is_empty() {
            self.repos.clone()
        } else {
            from_flags.to_vec()
        }
    }

    pub fn pacing(&self) -> Result<Pacing, ConfigError> {
        self.pacing.unwrap_or_default().to_pacing()
    }
}

/// Take the flag value, else the file value, else fail naming `what`.
pub fn require(
    flag: Option<String>,
    file: Option<&String>,
    what: &'static str,
) -> Result<String, ConfigError> {
    flag.or_else(|| file.cloned())
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(what))
}
