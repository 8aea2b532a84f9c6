use serde::{Deserialize, Serialize};

fn default_min_sample_size() -> usize {
    3
}

fn default_baseline_post_threshold() -> f64 {
    0.7
}

fn default_pair_threshold() -> f64 {
    0.5
}

/// Thresholds the correlation analyzer uses to decide when a relationship
/// is worth an insight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CorrelationConfig {
    /// Pairings with fewer usable indicators than this are skipped.
    #[serde(default = "default_min_sample_size")]
    pub min_sample_size: usize,

    #[serde(default = "default_baseline_post_threshold")]
    pub baseline_post_threshold: f64,

    #[serde(default = "default_pair_threshold")]
    pub cost_saving_threshold: f64,

    #[serde(default = "default_pair_threshold")]
    pub team_size_threshold: f64,

    #[serde(default = "default_pair_threshold")]
    pub time_investment_threshold: f64,
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            min_sample_size: default_min_sample_size(),
            baseline_post_threshold: default_baseline_post_threshold(),
            cost_saving_threshold: default_pair_threshold(),
            team_size_threshold: default_pair_threshold(),
            time_investment_threshold: default_pair_threshold(),
        }
    }
}

impl CorrelationConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.min_sample_size < 2 {
            return Err(format!(
                "min_sample_size must be at least 2, got {}",
                self.min_sample_size
            ));
        }

        let thresholds = [
            ("baseline_post_threshold", self.baseline_post_threshold),
            ("cost_saving_threshold", self.cost_saving_threshold),
            ("team_size_threshold", self.team_size_threshold),
            ("time_investment_threshold", self.time_investment_threshold),
        ];
        match thresholds
            .iter()
            .find(|(_, value)| !(0.0..=1.0).contains(value))
        {
            Some((name, value)) => Err(format!("{} must be between 0.0 and 1.0, got {}", name, value)),
            None => Ok(()),
        }
    }
}
