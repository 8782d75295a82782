//! Configuration types for seqalign

use crate::system::default_config_path;
use crate::types::OutputFormat;
use crate::SeqAlignError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub edit_cost: EditCostConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Scores used by similarity and by global/local alignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(rename = "match", default = "default_match")]
    pub match_score: i32,
    #[serde(default = "default_mismatch")]
    pub mismatch: i32,
    #[serde(default = "default_gap")]
    pub gap: i32,
    /// Surcharge paid once when a gap run opens (enables the gap-open recurrence)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap_open: Option<i32>,
    /// Path to a pairwise score table, or the name of a built-in table ("blosum62")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
}

/// Costs used by edit distance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditCostConfig {
    #[serde(rename = "match", default = "default_cost_match")]
    pub match_cost: i32,
    #[serde(default = "default_cost_mismatch")]
    pub mismatch: i32,
    #[serde(default = "default_cost_gap")]
    pub gap: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

// Default value functions
fn default_match() -> i32 { 1 }
fn default_mismatch() -> i32 { -1 }
fn default_gap() -> i32 { -1 }
fn default_cost_match() -> i32 { 0 }
fn default_cost_mismatch() -> i32 { 1 }
fn default_cost_gap() -> i32 { 1 }

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            match_score: default_match(),
            mismatch: default_mismatch(),
            gap: default_gap(),
            gap_open: None,
            table: None,
        }
    }
}

impl Default for EditCostConfig {
    fn default() -> Self {
        Self {
            match_cost: default_cost_match(),
            mismatch: default_cost_mismatch(),
            gap: default_cost_gap(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
        }
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, SeqAlignError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| SeqAlignError::Configuration(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

/// Load `$SEQALIGN_HOME/config.toml` if present, otherwise the built-in defaults
pub fn load_default_config() -> Result<Config, SeqAlignError> {
    let path = default_config_path();
    if path.exists() {
        debug!("Loading config from {}", path.display());
        load_config(&path)
    } else {
        debug!("No config at {}, using defaults", path.display());
        Ok(Config::default())
    }
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), SeqAlignError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| SeqAlignError::Configuration(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}
