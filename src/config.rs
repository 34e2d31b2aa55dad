//! Ranking configuration loaded from TOML.

use crate::error::ConfigError;
use crate::search::{Ranker, ScoreWeights};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for ranking a catalog.
///
/// Every key is optional:
///
/// ```toml
/// limit = 25
///
/// [weights]
/// title_substring = 10
/// title_prefix = 5
/// description_substring = 5
/// title_fuzzy = 3
/// description_fuzzy = 2
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RankConfig {
    /// Maximum number of results to print. `None` prints all of them.
    pub limit: Option<usize>,
    pub weights: ScoreWeights,
}

impl RankConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("Loaded ranking config from {}", path.display());
        Ok(config)
    }

    pub const fn ranker(&self) -> Ranker {
        Ranker::new(self.weights)
    }
}
