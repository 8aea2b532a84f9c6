use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How per-indicator productivity gains combine into a project figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductivityGainMode {
    /// Average weighted by each indicator's baseline hours.
    #[default]
    Weighted,
    /// Plain sum of the percentages.
    Summed,
}

fn default_parallel_threshold() -> usize {
    64
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregationConfig {
    #[serde(default)]
    pub productivity_gain: ProductivityGainMode,

    /// Projects with at least this many indicators are folded with rayon.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            productivity_gain: ProductivityGainMode::default(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

impl AggregationConfig {
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
            ..Self::default()
        }
    }

    pub fn with_mode(mode: ProductivityGainMode) -> Self {
        Self {
            productivity_gain: mode,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.parallel_threshold == 0 {
            return Err("parallel_threshold must be at least 1".to_string());
        }
        Ok(())
    }
}
