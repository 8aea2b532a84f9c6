use crate::config::{self, ProductivityGainMode, RoiConfig};
use crate::correlation;
use crate::io::{self, create_writer, OutputFormat, ProjectReport};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{info, info_span};

pub struct AnalyzeConfig {
    pub project_file: PathBuf,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub productivity_gain: Option<ProductivityGainMode>,
    pub no_correlation: bool,
}

pub fn load_settings(explicit: Option<&std::path::Path>) -> Result<RoiConfig> {
    match explicit {
        Some(path) => config::load_config_from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(config::load_config()),
    }
}

/// Build the report for `cfg` without writing it anywhere.
pub fn build_report(cfg: &AnalyzeConfig, settings: &RoiConfig) -> Result<ProjectReport> {
    let project = io::load_project(&cfg.project_file)
        .with_context(|| format!("Failed to load project {}", cfg.project_file.display()))?;

    let mut aggregation = settings.aggregation();
    if let Some(mode) = cfg.productivity_gain {
        aggregation.productivity_gain = mode;
    }

    let mut report = ProjectReport::new(&project, &aggregation, &settings.output().currency);
    if !cfg.no_correlation {
        let correlations = correlation::analyze(&report.indicators, &settings.correlation());
        info!(
            results = correlations.results.len(),
            insights = correlations.insights.len(),
            skipped = correlations.skipped.len(),
            "Correlation analysis finished"
        );
        report = report.with_correlation(correlations);
    }
    Ok(report)
}

pub fn analyze_project(cfg: AnalyzeConfig) -> Result<()> {
    let _span = info_span!("analyze", project = %cfg.project_file.display()).entered();

    let settings = load_settings(cfg.config.as_deref())?;
    let output_settings = settings.output();
    let format = cfg
        .format
        .or_else(|| {
            output_settings
                .default_format
                .as_deref()
                .and_then(OutputFormat::from_name)
        })
        .unwrap_or_default();

    if cfg.output.is_some() || output_settings.use_color == Some(false) {
        colored::control::set_override(false);
    }

    let report = build_report(&cfg, &settings)?;
    let mut writer = create_writer(format, cfg.output.as_deref())?;
    writer.write_report(&report)?;
    Ok(())
}
