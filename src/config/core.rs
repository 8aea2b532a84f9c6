use serde::{Deserialize, Serialize};

use super::aggregation::AggregationConfig;
use super::correlation::CorrelationConfig;
use super::output::OutputConfig;

/// Root configuration structure for roitrack
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RoiConfig {
    /// Correlation analyzer thresholds
    #[serde(default)]
    pub correlation: Option<CorrelationConfig>,

    /// Project aggregation settings
    #[serde(default)]
    pub aggregation: Option<AggregationConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl RoiConfig {
    pub fn correlation(&self) -> CorrelationConfig {
        self.correlation.clone().unwrap_or_default()
    }

    pub fn aggregation(&self) -> AggregationConfig {
        self.aggregation.clone().unwrap_or_default()
    }

    pub fn output(&self) -> OutputConfig {
        self.output.clone().unwrap_or_default()
    }
}

/// Contents written by `roitrack init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# roitrack configuration

[correlation]
min_sample_size = 3
baseline_post_threshold = 0.7
cost_saving_threshold = 0.5
team_size_threshold = 0.5
time_investment_threshold = 0.5

[aggregation]
# "weighted" (by baseline hours) or "summed"
productivity_gain = "weighted"
parallel_threshold = 64

[output]
default_format = "terminal"
currency = "EUR"
"#;
