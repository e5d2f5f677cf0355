//! Service and client configuration.

use crate::submit::client::DEFAULT_ENDPOINT;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the scoring service binds, `host:port`.
    pub listen: String,
    /// CSV score log path.
    pub score_log: PathBuf,
    /// Scoring endpoint used by embedded submitters.
    pub endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: "127.0.0.1:8000".to_string(),
            score_log: PathBuf::from("scores.csv"),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl Config {
    /// Load from a TOML file. Missing keys fall back to defaults.
    pub fn load(path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path))?;
        let config =
            toml::from_str(&raw).with_context(|| format!("invalid config file {}", path))?;
        Ok(config)
    }

    /// Apply CLI overrides on top of the loaded file.
    pub fn with_overrides(mut self, listen: Option<String>, score_log: Option<PathBuf>) -> Self {
        if let Some(listen) = listen {
            self.listen = listen;
        }
        if let Some(score_log) = score_log {
            self.score_log = score_log;
        }
        self
    }
}
