//! Configuration for similarity queries.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// How the discrete Fréchet distance is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FrechetStrategy {
    /// Dynamic programming restricted to the diagonal band. An upper bound
    /// on the exact distance, evaluating far fewer point pairs.
    #[default]
    Banded,
    /// Full O(n·m) dynamic programming.
    Exact,
}

/// Similarity engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimilarityConfig {
    #[serde(default)]
    pub frechet_strategy: FrechetStrategy,

    /// Fixed seed for the Hausdorff traversal order. `None` seeds every
    /// call from OS entropy.
    #[serde(default)]
    pub hausdorff_seed: Option<u64>,

    /// Reject NaN and infinite coordinates.
    #[serde(default = "SimilarityConfig::default_require_finite")]
    pub require_finite: bool,
}

impl SimilarityConfig {
    const fn default_require_finite() -> bool {
        true
    }

    pub fn with_frechet_strategy(mut self, strategy: FrechetStrategy) -> Self {
        self.frechet_strategy = strategy;
        self
    }

    pub fn with_hausdorff_seed(mut self, seed: u64) -> Self {
        self.hausdorff_seed = Some(seed);
        self
    }

    pub fn with_require_finite(mut self, require_finite: bool) -> Self {
        if !require_finite {
            log::warn!(
                "Non-finite coordinates will be accepted. \
                Distances involving NaN or infinite points are meaningless."
            );
        }

        self.require_finite = require_finite;
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            frechet_strategy: FrechetStrategy::default(),
            hausdorff_seed: None,
            require_finite: Self::default_require_finite(),
        }
    }
}
