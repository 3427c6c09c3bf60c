//! Ranking configuration
//!
//! Optional YAML file; every field has a default so an empty document is valid.
//!
//! ```yaml
//! iterations: 10
//! rounding: rounded
//! parallel: true
//! ```

use crate::algo::PageRankConfig;
use crate::format::RankFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Ranking options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RankConfig {
    /// Propagation rounds; when unset the edge list header decides
    pub iterations: Option<usize>,
    /// Two-decimal rendering mode
    pub rounding: RankFormat,
    /// Accumulate rounds on the rayon thread pool
    pub parallel: bool,
}

impl RankConfig {
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        // serde_yaml rejects an empty document as a struct
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&yaml)?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Algorithm settings, using `default_iterations` when none is configured
    pub fn page_rank_config(&self, default_iterations: usize) -> PageRankConfig {
        PageRankConfig {
            iterations: self.iterations.unwrap_or(default_iterations),
            parallel: self.parallel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = RankConfig::from_yaml_str("").unwrap();
        assert_eq!(config, RankConfig::default());
        assert_eq!(config.rounding, RankFormat::Truncated);
        assert_eq!(config.page_rank_config(7).iterations, 7);
    }

    #[test]
    fn test_parse_all_fields() {
        let config = RankConfig::from_yaml_str("iterations: 10\nrounding: round\nparallel: true\n").unwrap();

        assert_eq!(config.iterations, Some(10));
        assert_eq!(config.rounding, RankFormat::Rounded);

        let algo = config.page_rank_config(3);
        assert_eq!(algo.iterations, 10);
        assert!(algo.parallel);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = RankConfig::from_yaml_str("damping: 0.85\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rounding: rounded").unwrap();

        let config = RankConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.rounding, RankFormat::Rounded);
        assert_eq!(config.iterations, None);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = RankConfig::from_yaml_file(dir.path().join("absent.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
