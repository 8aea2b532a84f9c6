use crate::config::AggregationConfig;
use crate::correlation::{CorrelationReport, CorrelationValue};
use crate::project::{IndicatorOutcome, Project, ProjectAggregate};
use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    #[default]
    Terminal,
}

impl OutputFormat {
    /// Parse a format name from config; unknown names give `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }
}

/// Everything `analyze` reports about one project.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectReport {
    pub project_id: String,
    pub project_name: String,
    pub department: String,
    pub generated_at: DateTime<Utc>,
    pub currency: String,
    pub aggregate: ProjectAggregate,
    pub indicators: Vec<IndicatorOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation: Option<CorrelationReport>,
}

impl ProjectReport {
    pub fn new(project: &Project, aggregation: &AggregationConfig, currency: &str) -> Self {
        Self {
            project_id: project.id.clone(),
            project_name: project.name.clone(),
            department: project.department.clone(),
            generated_at: Utc::now(),
            currency: currency.to_string(),
            aggregate: project.aggregate(aggregation),
            indicators: project.outcomes(aggregation),
            correlation: None,
        }
    }

    pub fn with_correlation(mut self, report: CorrelationReport) -> Self {
        self.correlation = Some(report);
        self
    }

    fn money(&self, amount: f64) -> String {
        format!("{} {}", format_amount(amount), self.currency)
    }
}

pub trait ReportWriter {
    fn write_report(&mut self, report: &ProjectReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &ProjectReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &ProjectReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_summary(report)?;
        self.write_indicators(report)?;
        self.write_correlations(report)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &ProjectReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# ROI Report: {}", report.project_name)?;
        writeln!(self.writer)?;
        if !report.department.is_empty() {
            writeln!(self.writer, "Department: {}", report.department)?;
        }
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &ProjectReport) -> anyhow::Result<()> {
        let a = &report.aggregate;
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        self.write_row(
            "Indicators",
            &format!("{} ({} computable)", a.total_indicators, a.computable_indicators),
        )?;
        self.write_row("Monthly saving", &report.money(a.total_monthly_saving))?;
        self.write_row("Annual saving", &report.money(a.total_annual_saving))?;
        self.write_row("Recurring cost per year", &report.money(a.costs.total_annual))?;
        self.write_row("Investment", &report.money(a.total_investment))?;
        self.write_row("Hours saved per month", &format!("{:.1}", a.total_hours_saved_monthly))?;
        self.write_row(
            "Productivity gain",
            &format!("{:.1}%", a.aggregate_productivity_gain),
        )?;
        self.write_row("Project ROI", &format!("{:.1}%", a.project_roi))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_row(&mut self, metric: &str, value: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "| {metric} | {value} |")?;
        Ok(())
    }

    fn write_indicators(&mut self, report: &ProjectReport) -> anyhow::Result<()> {
        if report.indicators.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Indicators")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Indicator | Type | Annual saving | Investment | ROI |")?;
        writeln!(self.writer, "|-----------|------|---------------|------------|-----|")?;
        for outcome in &report.indicators {
            let roi = if outcome.computable {
                format!("{:.1}%", outcome.roi)
            } else {
                "n/a".to_string()
            };
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} |",
                outcome.name,
                outcome.indicator_type.label(),
                report.money(outcome.annual_saving),
                report.money(outcome.investment),
                roi
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_correlations(&mut self, report: &ProjectReport) -> anyhow::Result<()> {
        let Some(correlation) = &report.correlation else {
            return Ok(());
        };

        writeln!(self.writer, "## Correlations")?;
        writeln!(self.writer)?;
        for result in &correlation.results {
            writeln!(
                self.writer,
                "- **{}**: {} ({}, n = {})",
                result.label,
                describe_value(&result.value),
                result.strength,
                result.sample_size
            )?;
        }
        for skipped in &correlation.skipped {
            writeln!(
                self.writer,
                "- **{}**: skipped ({} of {} indicators needed)",
                skipped.pairing.label(),
                skipped.sample_size,
                skipped.required
            )?;
        }
        if !correlation.insights.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "### Insights")?;
            writeln!(self.writer)?;
            for insight in &correlation.insights {
                writeln!(self.writer, "- {}", insight.message)?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

/// Colored tables for an interactive terminal.
pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &ProjectReport) -> anyhow::Result<()> {
        self.print_header(report)?;
        self.print_summary(report)?;
        self.print_indicators(report)?;
        self.print_correlations(report)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn print_header(&mut self, report: &ProjectReport) -> anyhow::Result<()> {
        let title = format!("ROI Report: {}", report.project_name);
        writeln!(self.writer, "{}", title.bold().blue())?;
        writeln!(self.writer, "{}", "=".repeat(title.len()).blue())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_summary(&mut self, report: &ProjectReport) -> anyhow::Result<()> {
        let a = &report.aggregate;
        writeln!(self.writer, "{}", "Summary:".bold())?;
        writeln!(
            self.writer,
            "  Indicators: {} ({} computable)",
            a.total_indicators, a.computable_indicators
        )?;
        writeln!(
            self.writer,
            "  Annual saving: {}",
            report.money(a.total_annual_saving).green()
        )?;
        writeln!(
            self.writer,
            "  Costs: {} per year, {} invested",
            report.money(a.costs.total_annual),
            report.money(a.total_investment)
        )?;
        writeln!(
            self.writer,
            "  Hours saved per month: {:.1}",
            a.total_hours_saved_monthly
        )?;
        writeln!(
            self.writer,
            "  Productivity gain: {:.1}%",
            a.aggregate_productivity_gain
        )?;
        writeln!(self.writer, "  Project ROI: {}", colored_roi(a.project_roi))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_indicators(&mut self, report: &ProjectReport) -> anyhow::Result<()> {
        if report.indicators.is_empty() {
            return Ok(());
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Indicator", "Type", "Annual saving", "Investment", "ROI"]);

        for outcome in &report.indicators {
            let roi = if outcome.computable {
                format!("{:.1}%", outcome.roi)
            } else {
                "n/a".to_string()
            };
            table.add_row(vec![
                Cell::new(&outcome.name),
                Cell::new(outcome.indicator_type.label()),
                Cell::new(report.money(outcome.annual_saving)).set_alignment(CellAlignment::Right),
                Cell::new(report.money(outcome.investment)).set_alignment(CellAlignment::Right),
                Cell::new(roi).set_alignment(CellAlignment::Right),
            ]);
        }

        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_correlations(&mut self, report: &ProjectReport) -> anyhow::Result<()> {
        let Some(correlation) = &report.correlation else {
            return Ok(());
        };

        writeln!(self.writer, "{}", "Correlations:".bold())?;
        for result in &correlation.results {
            writeln!(
                self.writer,
                "  {}: {} ({})",
                result.label,
                describe_value(&result.value),
                result.strength.to_string().cyan()
            )?;
        }
        for skipped in &correlation.skipped {
            writeln!(
                self.writer,
                "  {}: {}",
                skipped.pairing.label(),
                format!(
                    "skipped, {} of {} indicators",
                    skipped.sample_size, skipped.required
                )
                .dimmed()
            )?;
        }
        if !correlation.insights.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", "Insights:".bold())?;
            for insight in &correlation.insights {
                writeln!(self.writer, "  - {}", insight.message)?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

fn colored_roi(roi: f64) -> ColoredString {
    let text = format!("{:.1}%", roi);
    match roi {
        r if r > 0.0 => text.green(),
        r if r < 0.0 => text.red(),
        _ => text.yellow(),
    }
}

fn describe_value(value: &CorrelationValue) -> String {
    match value {
        CorrelationValue::Coefficient { r } => format!("r = {:.2}", r),
        CorrelationValue::Breakdown { eta, categories } => {
            let parts: Vec<String> = categories
                .iter()
                .map(|c| format!("{} {:.1}%", c.indicator_type.label(), c.average_roi))
                .collect();
            format!("eta = {:.2}; {}", eta, parts.join(", "))
        }
    }
}

/// Two decimals with thousands separators, e.g. `15,000.00`.
fn format_amount(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (whole, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    let digits: Vec<char> = whole.chars().collect();
    let grouped: Vec<String> = digits
        .rchunks(3)
        .rev()
        .map(|chunk| chunk.iter().collect())
        .collect();
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped.join(","), fraction)
}

/// Writer for `format`, targeting `output` or stdout.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn ReportWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout()),
    };

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink)),
    })
}
