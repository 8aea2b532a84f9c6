use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::aggregation::AggregationConfig;
use super::core::RoiConfig;
use super::correlation::CorrelationConfig;
use crate::errors::{Result, RoiError};

pub const CONFIG_FILE_NAME: &str = ".roitrack.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a TOML config, replacing invalid sections with their defaults.
pub fn parse_and_validate_config(contents: &str) -> Result<RoiConfig> {
    let mut config = toml::from_str::<RoiConfig>(contents)?;

    if let Some(correlation) = &config.correlation {
        if let Err(e) = correlation.validate() {
            warn!("Invalid correlation settings: {}. Using defaults.", e);
            config.correlation = Some(CorrelationConfig::default());
        }
    }

    if let Some(aggregation) = &config.aggregation {
        if let Err(e) = aggregation.validate() {
            warn!("Invalid aggregation settings: {}. Using defaults.", e);
            config.aggregation = Some(AggregationConfig::default());
        }
    }

    Ok(config)
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<RoiConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            warn!("Failed to parse {}: {}. Using defaults.", config_path.display(), e);
            None
        }
    }
}

/// Only real failures are worth a warning; a missing file is the common case.
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find `.roitrack.toml` in `start` or one of its ancestors.
pub fn load_config_from(start: PathBuf) -> RoiConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            RoiConfig::default()
        })
}

pub fn load_config() -> RoiConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            RoiConfig::default()
        }
    }
}

/// Load an explicitly requested config file. Unlike discovery, a missing or
/// malformed file is an error here.
pub fn load_config_from_path(path: &Path) -> Result<RoiConfig> {
    let contents = read_config_file(path).map_err(|e| RoiError::io_with_path(e, path))?;
    parse_and_validate_config(&contents)
        .map_err(|e| RoiError::config(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProductivityGainMode;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn parses_full_config() {
        let config = parse_and_validate_config(indoc! {r#"
            [correlation]
            min_sample_size = 4
            cost_saving_threshold = 0.6

            [aggregation]
            productivity_gain = "summed"

            [output]
            currency = "BRL"
        "#})
        .unwrap();

        let correlation = config.correlation();
        assert_eq!(correlation.min_sample_size, 4);
        assert_eq!(correlation.cost_saving_threshold, 0.6);
        assert_eq!(correlation.baseline_post_threshold, 0.7);
        assert_eq!(config.aggregation().productivity_gain, ProductivityGainMode::Summed);
        assert_eq!(config.aggregation().parallel_threshold, 64);
        assert_eq!(config.output().currency, "BRL");
    }

    #[test]
    fn invalid_section_falls_back_to_defaults() {
        let config = parse_and_validate_config(indoc! {r#"
            [correlation]
            min_sample_size = 0
        "#})
        .unwrap();
        assert_eq!(config.correlation(), CorrelationConfig::default());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(parse_and_validate_config("[correlation\nmin_sample_size = 3").is_err());
    }

    #[test]
    fn ancestors_are_bounded() {
        let start = PathBuf::from("/a/b/c/d");
        let dirs: Vec<PathBuf> = directory_ancestors(start, 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }

    #[test]
    fn discovers_config_in_parent_directory() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("reports").join("2026");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[aggregation]\nproductivity_gain = \"summed\"\n",
        )
        .unwrap();

        let config = load_config_from(nested);
        assert_eq!(config.aggregation().productivity_gain, ProductivityGainMode::Summed);
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let root = TempDir::new().unwrap();
        let err = load_config_from_path(&root.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, RoiError::Io { .. }));
    }
}
