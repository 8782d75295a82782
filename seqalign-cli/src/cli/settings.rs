//! Effective settings for a run: command-line flags over the config file over
//! built-in defaults

use anyhow::{Context, Result};
use clap::Args;
use seqalign_bio::{ScoreTable, ScoringSystem};
use seqalign_core::config::{EditCostConfig, ScoringConfig};
use seqalign_core::system::describe_paths;
use seqalign_core::{load_config, load_default_config, Config};
use std::path::Path;
use tracing::debug;

/// Scoring flags; each one overrides the matching `[scoring]` config key
#[derive(Args, Debug, Clone, Default)]
pub struct ScoringOverrides {
    /// Score for identical symbols
    #[arg(long = "match", value_name = "N", allow_negative_numbers = true)]
    pub match_score: Option<i32>,

    /// Score for differing symbols
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub mismatch: Option<i32>,

    /// Score for a symbol against a gap
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub gap: Option<i32>,

    /// Extra score paid once per gap run (switches global alignment to the gap-open recurrence)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub gap_open: Option<i32>,

    /// Pairwise score table file, or a built-in table name (blosum62)
    #[arg(long, value_name = "FILE|NAME")]
    pub table: Option<String>,
}

/// Load `--config` if given, else the default config file, else defaults
pub fn load(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            debug!("Loading config from {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load config {}", path.display()))
        }
        None => {
            debug!("{}", describe_paths());
            Ok(load_default_config()?)
        }
    }
}

pub fn similarity_scoring(
    config: &ScoringConfig,
    overrides: &ScoringOverrides,
) -> Result<ScoringSystem> {
    let mut scoring = ScoringSystem::new(
        overrides.match_score.unwrap_or(config.match_score),
        overrides.mismatch.unwrap_or(config.mismatch),
        overrides.gap.unwrap_or(config.gap),
    );

    if let Some(gap_open) = overrides.gap_open.or(config.gap_open) {
        scoring = scoring.with_gap_open(gap_open);
    }

    if let Some(table) = overrides.table.as_deref().or(config.table.as_deref()) {
        let table_scores = ScoreTable::resolve(table)
            .with_context(|| format!("Failed to load score table {}", table))?;
        scoring = scoring.with_table(table_scores);
    }

    debug!(
        "Similarity scoring: match={} mismatch={} gap={} gap_open={:?} table={}",
        scoring.match_score(),
        scoring.mismatch_score(),
        scoring.gap_score(),
        scoring.gap_open_penalty(),
        scoring.table().is_some()
    );
    Ok(scoring)
}

pub fn cost_scoring(config: &EditCostConfig) -> ScoringSystem {
    ScoringSystem::new(config.match_cost, config.mismatch, config.gap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use seqalign_core::SeqAlignError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_overrides() {
        let scoring =
            similarity_scoring(&ScoringConfig::default(), &ScoringOverrides::default()).unwrap();
        assert_eq!(scoring, ScoringSystem::similarity());

        let cost = cost_scoring(&EditCostConfig::default());
        assert_eq!(cost, ScoringSystem::edit_cost());
    }

    #[test]
    fn test_flags_override_config() {
        let config = ScoringConfig {
            match_score: 2,
            mismatch: -3,
            gap: -4,
            gap_open: Some(-10),
            table: None,
        };
        let overrides = ScoringOverrides {
            mismatch: Some(-1),
            gap_open: Some(-5),
            ..Default::default()
        };

        let scoring = similarity_scoring(&config, &overrides).unwrap();
        assert_eq!(scoring.match_score(), 2);
        assert_eq!(scoring.mismatch_score(), -1);
        assert_eq!(scoring.gap_score(), -4);
        assert_eq!(scoring.gap_open_penalty(), Some(-5));
    }

    #[test]
    fn test_table_from_config_and_builtin() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "  A C\nA 9 0\nC 0 9\n").unwrap();

        let config = ScoringConfig {
            table: Some(file.path().display().to_string()),
            ..Default::default()
        };
        let scoring = similarity_scoring(&config, &ScoringOverrides::default()).unwrap();
        assert_eq!(scoring.score(b'A', b'A'), 9);

        let overrides = ScoringOverrides {
            table: Some("blosum62".to_string()),
            ..Default::default()
        };
        let scoring = similarity_scoring(&config, &overrides).unwrap();
        assert_eq!(scoring.score(b'W', b'W'), 11);
    }

    #[test]
    fn test_missing_table_keeps_error_kind() {
        let overrides = ScoringOverrides {
            table: Some("/nonexistent/table.txt".to_string()),
            ..Default::default()
        };
        let err = similarity_scoring(&ScoringConfig::default(), &overrides).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/table.txt"));
        assert!(matches!(
            err.downcast_ref::<SeqAlignError>(),
            Some(SeqAlignError::Io(_))
        ));
    }

    #[test]
    fn test_load_explicit_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[scoring]\nmatch = 3\n\n[output]\nformat = \"json\"\n").unwrap();

        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.scoring.match_score, 3);
        assert_eq!(config.scoring.gap, -1);
        assert!(config.output.format.is_machine_readable());
    }
}
