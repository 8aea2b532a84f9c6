//! Metric calculator.
//!
//! One pure formula module per indicator type. [`recompute`] is the only
//! way metrics reach a Post-IA record: it is called after every mutation,
//! so a record's metrics always reflect its current inputs.
//!
//! A missing Baseline, or one of a different variant, zeroes every
//! comparative output. Post-IA-only figures (e.g. the Post-IA monthly cost)
//! are still filled in.

pub mod analytical;
pub mod decision;
pub mod margin;
pub mod other;
pub mod productivity;
pub mod related_costs;
pub mod revenue;
pub mod risk;
pub mod satisfaction;
pub mod speed;

pub use analytical::AnalyticalMetrics;
pub use decision::DecisionQualityMetrics;
pub use margin::MarginMetrics;
pub use other::OtherMetrics;
pub use productivity::{PersonSaving, ProductivityMetrics};
pub use related_costs::RelatedCostsMetrics;
pub use revenue::RevenueMetrics;
pub use risk::RiskMetrics;
pub use satisfaction::SatisfactionMetrics;
pub use speed::SpeedMetrics;

use crate::core::numeric::{non_negative, ratio};
use crate::schema::{BaselineRecord, PostIaRecord};
use serde::Serialize;

/// Rewrite `post`'s metrics from its inputs and the paired Baseline.
pub fn recompute(baseline: Option<&BaselineRecord>, post: &mut PostIaRecord) {
    use BaselineRecord as B;
    use PostIaRecord as P;

    match (baseline, post) {
        (Some(B::Productivity(b)), P::Productivity(p)) => p.metrics = productivity::compute(Some(b), p),
        (_, P::Productivity(p)) => p.metrics = productivity::compute(None, p),
        (Some(B::AnalyticalCapacity(b)), P::AnalyticalCapacity(p)) => p.metrics = analytical::compute(Some(b), p),
        (_, P::AnalyticalCapacity(p)) => p.metrics = analytical::compute(None, p),
        (Some(B::RevenueIncrease(b)), P::RevenueIncrease(p)) => p.metrics = revenue::compute(Some(b), p),
        (_, P::RevenueIncrease(p)) => p.metrics = revenue::compute(None, p),
        (Some(B::MarginImprovement(b)), P::MarginImprovement(p)) => p.metrics = margin::compute(Some(b), p),
        (_, P::MarginImprovement(p)) => p.metrics = margin::compute(None, p),
        (Some(B::RiskReduction(b)), P::RiskReduction(p)) => p.metrics = risk::compute(Some(b), p),
        (_, P::RiskReduction(p)) => p.metrics = risk::compute(None, p),
        (Some(B::DecisionQuality(b)), P::DecisionQuality(p)) => p.metrics = decision::compute(Some(b), p),
        (_, P::DecisionQuality(p)) => p.metrics = decision::compute(None, p),
        (Some(B::Speed(b)), P::Speed(p)) => p.metrics = speed::compute(Some(b), p),
        (_, P::Speed(p)) => p.metrics = speed::compute(None, p),
        (Some(B::Satisfaction(b)), P::Satisfaction(p)) => p.metrics = satisfaction::compute(Some(b), p),
        (_, P::Satisfaction(p)) => p.metrics = satisfaction::compute(None, p),
        (Some(B::RelatedCosts(b)), P::RelatedCosts(p)) => p.metrics = related_costs::compute(Some(b), p),
        (_, P::RelatedCosts(p)) => p.metrics = related_costs::compute(None, p),
        (Some(B::Other(b)), P::Other(p)) => p.metrics = other::compute(Some(b), p),
        (_, P::Other(p)) => p.metrics = other::compute(None, p),
    }
}

/// Variant-independent view of a Post-IA record's metrics.
///
/// This is what the project aggregator and the correlation analyzer work
/// from, so every indicator type can be folded the same way.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MetricSummary {
    pub monthly_saving: f64,
    pub annual_saving: f64,
    /// One-off cost declared inside the record itself.
    pub implementation_cost: f64,
    pub hours_saved_monthly: f64,
    pub baseline_hours: f64,
    pub team_size: f64,
    pub productivity_gain_pct: f64,
    /// Monthly value of the process before automation.
    pub baseline_magnitude: f64,
    /// Monthly value of the process after automation.
    pub post_ia_magnitude: f64,
}

/// Summarize `post`'s (already recomputed) metrics.
pub fn summarize(baseline: Option<&BaselineRecord>, post: &PostIaRecord) -> MetricSummary {
    use BaselineRecord as B;
    use PostIaRecord as P;

    match post {
        P::Productivity(p) => {
            let m = p.metrics();
            let team_size = match baseline {
                Some(B::Productivity(b)) => b.people.len() as f64,
                _ => p.people.len() as f64,
            };
            MetricSummary {
                monthly_saving: m.delta_productivity,
                annual_saving: m.delta_productivity * 12.0,
                hours_saved_monthly: m.delta_hours,
                baseline_hours: m.baseline_hours,
                team_size,
                productivity_gain_pct: m.productivity_gain_pct,
                baseline_magnitude: m.baseline_monthly_cost,
                post_ia_magnitude: m.post_ia_monthly_cost,
                ..Default::default()
            }
        }
        P::AnalyticalCapacity(p) => {
            let m = p.metrics();
            MetricSummary {
                monthly_saving: m.time_value,
                annual_saving: m.time_value * 12.0,
                hours_saved_monthly: m.hours_saved,
                baseline_hours: m.hours_before,
                team_size: non_negative(p.inputs.analysts),
                productivity_gain_pct: m.capacity_increase_pct,
                baseline_magnitude: m.labor_cost_before,
                post_ia_magnitude: m.labor_cost_after,
                ..Default::default()
            }
        }
        P::RevenueIncrease(p) => {
            let m = p.metrics();
            let before = match baseline {
                Some(B::RevenueIncrease(b)) => non_negative(b.revenue_before),
                _ => 0.0,
            };
            MetricSummary {
                monthly_saving: m.delta_revenue,
                annual_saving: m.delta_revenue * 12.0,
                baseline_magnitude: before,
                post_ia_magnitude: non_negative(p.revenue_after),
                ..Default::default()
            }
        }
        P::MarginImprovement(p) => {
            let m = p.metrics();
            MetricSummary {
                monthly_saving: m.monthly_saving,
                annual_saving: m.annual_saving,
                baseline_magnitude: m.cash_margin_current,
                post_ia_magnitude: m.cash_margin_estimated,
                ..Default::default()
            }
        }
        P::RiskReduction(p) => {
            let m = p.metrics();
            MetricSummary {
                monthly_saving: m.annual_benefit / 12.0,
                annual_saving: m.annual_benefit,
                implementation_cost: non_negative(p.implementation_cost),
                baseline_magnitude: m.exposure_before,
                post_ia_magnitude: m.exposure_after,
                ..Default::default()
            }
        }
        P::DecisionQuality(p) => {
            let m = p.metrics();
            let rate = non_negative(p.inputs.avg_hourly_rate);
            MetricSummary {
                monthly_saving: m.total_monthly_benefit,
                annual_saving: m.total_monthly_benefit * 12.0,
                hours_saved_monthly: m.time_saving_hours,
                baseline_hours: m.decision_hours_before,
                team_size: non_negative(p.inputs.people_involved),
                productivity_gain_pct: ratio(m.time_saving_hours, m.decision_hours_before) * 100.0,
                baseline_magnitude: m.error_cost_before + m.decision_hours_before * rate,
                post_ia_magnitude: m.error_cost_after + m.decision_hours_after * rate,
                ..Default::default()
            }
        }
        P::Speed(p) => {
            let m = p.metrics();
            let rate = non_negative(p.inputs.hourly_rate);
            MetricSummary {
                monthly_saving: m.total_monthly_benefit,
                annual_saving: m.total_monthly_benefit * 12.0,
                hours_saved_monthly: m.labor_hours_before - m.labor_hours_after,
                baseline_hours: m.labor_hours_before,
                team_size: non_negative(p.inputs.people_per_delivery),
                productivity_gain_pct: m.productivity_gain_pct,
                baseline_magnitude: m.labor_hours_before * rate,
                post_ia_magnitude: m.labor_hours_after * rate,
                ..Default::default()
            }
        }
        P::Satisfaction(p) => {
            let m = p.metrics();
            MetricSummary {
                monthly_saving: m.retention_value / 12.0,
                annual_saving: m.retention_value,
                baseline_magnitude: m.ltv_before,
                post_ia_magnitude: m.ltv_after,
                ..Default::default()
            }
        }
        P::RelatedCosts(p) => {
            let m = p.metrics();
            MetricSummary {
                monthly_saving: m.monthly_saving,
                annual_saving: m.annual_saving,
                implementation_cost: m.total_implementation_cost,
                baseline_magnitude: m.monthly_cost_before,
                post_ia_magnitude: m.monthly_cost_after,
                ..Default::default()
            }
        }
        P::Other(p) => {
            let m = p.metrics();
            let before = match baseline {
                Some(B::Other(b)) => b.value_before,
                _ => 0.0,
            };
            let monthly_saving = if p.monetary { m.delta } else { 0.0 };
            MetricSummary {
                monthly_saving,
                annual_saving: monthly_saving * 12.0,
                baseline_magnitude: before,
                post_ia_magnitude: p.value_after,
                ..Default::default()
            }
        }
    }
}
