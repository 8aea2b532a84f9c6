// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod correlation;
pub mod costs;
pub mod errors;
pub mod indicator;
pub mod inheritance;
pub mod io;
pub mod metrics;
pub mod project;
pub mod schema;

// Re-export commonly used types
pub use crate::core::{Frequency, FrequencyPeriod, IndicatorType, Volume, VolumePeriod};

pub use crate::schema::{BaselineRecord, Person, PostIaRecord, PostIaTool, QualitativeEntry, Tool};

pub use crate::metrics::{recompute, summarize, MetricSummary};

pub use crate::inheritance::{inherit_post_ia, merge_by_id};

pub use crate::costs::{CostEntry, CostSummary, Recurrence};

pub use crate::indicator::{Indicator, TypeChange};

pub use crate::project::{IndicatorOutcome, Project, ProjectAggregate, TypeBreakdown};

pub use crate::correlation::{
    pearson, CorrelationReport, CorrelationResult, CorrelationStrength, CorrelationValue, Pairing,
};

pub use crate::config::{
    AggregationConfig, CorrelationConfig, ProductivityGainMode, RoiConfig,
};

pub use crate::errors::RoiError;

pub use crate::io::output::{create_writer, OutputFormat, ReportWriter};
