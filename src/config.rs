//! Configuration loading from TOML with environment variable overrides.
//!
//! Reads `config.toml` and deserializes into strongly-typed structs.
//! The rounds file location can be overridden by an environment variable
//! whose name is given in the config.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;

use crate::stats::StatsConfig;
use crate::types::TrackerError;

/// Environment variable overriding the config file path.
pub const CONFIG_PATH_ENV: &str = "FAIRWAY_CONFIG";

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub stats: StatsSection,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TrackerConfig {
    pub player_name: String,
    pub rounds_file: String,
    /// Name of an env var that, when set, replaces `rounds_file`.
    #[serde(default)]
    pub rounds_file_env: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StatsSection {
    pub target_score: u32,
}

impl Default for StatsSection {
    fn default() -> Self {
        Self {
            target_score: StatsConfig::default().target_score,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        Self::parse(&contents).with_context(|| format!("Failed to parse config file: {path}"))
    }

    /// Parse and check configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> std::result::Result<(), TrackerError> {
        if self.tracker.rounds_file.trim().is_empty() {
            return Err(TrackerError::Config("tracker.rounds_file is empty".into()));
        }
        if self.stats.target_score == 0 {
            return Err(TrackerError::Config("stats.target_score must be positive".into()));
        }
        Ok(())
    }

    /// Rounds file path, honouring the override variable when it is set.
    pub fn rounds_file(&self) -> String {
        self.tracker
            .rounds_file_env
            .as_deref()
            .and_then(|env| Self::resolve_env(env).ok())
            .unwrap_or_else(|| self.tracker.rounds_file.clone())
    }

    pub fn stats_config(&self) -> StatsConfig {
        StatsConfig {
            target_score: self.stats.target_score,
        }
    }

    /// Resolve an environment variable name to its value.
    pub fn resolve_env(env_name: &str) -> Result<String> {
        std::env::var(env_name)
            .with_context(|| format!("Environment variable not set: {env_name}"))
    }
}
