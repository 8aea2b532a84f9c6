//! Project aggregation.
//!
//! Folds per-indicator outcomes into project totals. Indicators that cannot
//! be computed still count towards `total_indicators` and their costs, but
//! add nothing to savings.

use super::outcome::{roi, IndicatorOutcome};
use crate::config::{AggregationConfig, ProductivityGainMode};
use crate::core::numeric::ratio;
use crate::core::IndicatorType;
use crate::costs::CostSummary;
use crate::indicator::Indicator;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, info_span};

/// Totals for one indicator type within a project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeBreakdown {
    pub indicator_type: IndicatorType,
    pub count: usize,
    pub annual_saving: f64,
    pub average_roi: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ProjectAggregate {
    pub total_indicators: usize,
    pub computable_indicators: usize,
    pub total_annual_saving: f64,
    pub total_monthly_saving: f64,
    pub costs: CostSummary,
    /// One-off costs plus implementation costs across all indicators.
    pub total_investment: f64,
    pub total_hours_saved_monthly: f64,
    pub productivity_gain_mode: ProductivityGainMode,
    pub aggregate_productivity_gain: f64,
    pub project_roi: f64,
    pub by_type: Vec<TypeBreakdown>,
}

impl ProjectAggregate {
    /// First-year project cost: recurring annual costs plus the investment.
    pub fn total_cost(&self) -> f64 {
        self.costs.total_annual + self.total_investment
    }
}

/// Outcomes for `indicators`, in input order.
pub fn outcomes(indicators: &[Indicator], config: &AggregationConfig) -> Vec<IndicatorOutcome> {
    if indicators.len() >= config.parallel_threshold {
        debug!(count = indicators.len(), "Computing indicator outcomes in parallel");
        indicators
            .par_iter()
            .map(IndicatorOutcome::from_indicator)
            .collect()
    } else {
        indicators
            .iter()
            .map(IndicatorOutcome::from_indicator)
            .collect()
    }
}

pub fn aggregate(indicators: &[Indicator], config: &AggregationConfig) -> ProjectAggregate {
    let _span = info_span!("aggregate_project", indicators = indicators.len()).entered();

    let outcomes = outcomes(indicators, config);
    let costs: CostSummary = indicators.iter().map(Indicator::cost_summary).sum();
    let result = fold_outcomes(&outcomes, costs, config.productivity_gain);

    info!(
        total = result.total_indicators,
        computable = result.computable_indicators,
        annual_saving = result.total_annual_saving,
        roi = result.project_roi,
        "Project aggregated"
    );
    result
}

/// Combine already computed outcomes with the project's cost totals.
pub fn fold_outcomes(
    outcomes: &[IndicatorOutcome],
    costs: CostSummary,
    mode: ProductivityGainMode,
) -> ProjectAggregate {
    let computable: Vec<&IndicatorOutcome> = outcomes.iter().filter(|o| o.computable).collect();

    for skipped in outcomes.iter().filter(|o| !o.computable) {
        debug!(indicator = %skipped.indicator_id, "Indicator has no inputs, contributing 0");
    }

    let total_annual_saving: f64 = computable.iter().map(|o| o.annual_saving).sum();
    let total_investment: f64 = outcomes.iter().map(|o| o.investment).sum();

    let mut aggregate = ProjectAggregate {
        total_indicators: outcomes.len(),
        computable_indicators: computable.len(),
        total_annual_saving,
        total_monthly_saving: computable.iter().map(|o| o.monthly_saving).sum(),
        costs,
        total_investment,
        total_hours_saved_monthly: computable.iter().map(|o| o.hours_saved_monthly).sum(),
        productivity_gain_mode: mode,
        aggregate_productivity_gain: productivity_gain(&computable, mode),
        by_type: breakdown(outcomes),
        ..Default::default()
    };
    aggregate.project_roi = roi(total_annual_saving, aggregate.total_cost());
    aggregate
}

fn productivity_gain(outcomes: &[&IndicatorOutcome], mode: ProductivityGainMode) -> f64 {
    match mode {
        ProductivityGainMode::Summed => outcomes.iter().map(|o| o.productivity_gain_pct).sum(),
        ProductivityGainMode::Weighted => {
            let (weighted, hours) = outcomes
                .iter()
                .filter(|o| o.baseline_hours > 0.0)
                .fold((0.0, 0.0), |(weighted, hours), o| {
                    (
                        weighted + o.productivity_gain_pct * o.baseline_hours,
                        hours + o.baseline_hours,
                    )
                });
            ratio(weighted, hours)
        }
    }
}

fn breakdown(outcomes: &[IndicatorOutcome]) -> Vec<TypeBreakdown> {
    IndicatorType::ALL
        .iter()
        .filter_map(|&t| {
            let of_type: Vec<&IndicatorOutcome> =
                outcomes.iter().filter(|o| o.indicator_type == t).collect();
            if of_type.is_empty() {
                return None;
            }
            let computable: Vec<&&IndicatorOutcome> =
                of_type.iter().filter(|o| o.computable).collect();
            let average_roi = if computable.is_empty() {
                0.0
            } else {
                computable.iter().map(|o| o.roi).sum::<f64>() / computable.len() as f64
            };
            Some(TypeBreakdown {
                indicator_type: t,
                count: of_type.len(),
                annual_saving: computable.iter().map(|o| o.annual_saving).sum(),
                average_roi,
            })
        })
        .collect()
}
