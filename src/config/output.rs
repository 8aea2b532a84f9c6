use serde::{Deserialize, Serialize};

fn default_currency() -> String {
    "EUR".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    pub default_format: Option<String>,

    /// Currency code printed next to amounts.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: None,
            currency: default_currency(),
            use_color: None,
        }
    }
}
