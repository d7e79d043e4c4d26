use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Dugout configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct DugoutConfig {
    /// I/O settings.
    #[serde(default)]
    pub io: IoToml,

    /// Aggregation settings.
    #[serde(default)]
    pub aggregate: AggregateToml,

    /// Ranking settings.
    #[serde(default)]
    pub rank: RankToml,

    /// Nearest-search settings.
    #[serde(default)]
    pub nearest: NearestToml,
}

/// Loads and parses the TOML configuration file. A missing file falls
/// back to defaults so the binary works out of the box next to a
/// `data/` directory.
pub fn load(path: &Path) -> Result<DugoutConfig> {
    if !path.exists() {
        return Ok(DugoutConfig::default());
    }
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    /// Directory holding the per-month CSV subdirectories.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AggregateToml {
    /// WAR threshold for the players-over-WAR head count.
    #[serde(default = "default_war_min")]
    pub war_min: f64,
}

impl Default for AggregateToml {
    fn default() -> Self {
        Self {
            war_min: default_war_min(),
        }
    }
}

fn default_war_min() -> f64 {
    3.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RankToml {
    /// Number of days a ranking lists.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for RankToml {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
        }
    }
}

fn default_top_n() -> usize {
    5
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NearestToml {
    /// Number of matches the nearest search returns.
    #[serde(default = "default_min_count")]
    pub min_count: usize,
}

impl Default for NearestToml {
    fn default() -> Self {
        Self {
            min_count: default_min_count(),
        }
    }
}

fn default_min_count() -> usize {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let config: DugoutConfig = toml::from_str("").unwrap();
        assert_eq!(config.io.data_dir, PathBuf::from("data"));
        assert_eq!(config.rank.top_n, 5);
        assert_eq!(config.nearest.min_count, 5);
        assert_eq!(config.aggregate.war_min, 3.0);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: DugoutConfig = toml::from_str("[rank]\ntop_n = 10\n").unwrap();
        assert_eq!(config.rank.top_n, 10);
        assert_eq!(config.nearest.min_count, 5);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let result = toml::from_str::<DugoutConfig>("[rank]\ntop_m = 10\n");
        assert!(result.is_err());
    }
}
