//! Configuration loaded from `.roitrack.toml`.

mod aggregation;
mod core;
mod correlation;
mod loader;
mod output;

pub use aggregation::{AggregationConfig, ProductivityGainMode};
pub use self::core::{RoiConfig, DEFAULT_CONFIG_TOML};
pub use correlation::CorrelationConfig;
pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use output::OutputConfig;
