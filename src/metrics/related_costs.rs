use crate::core::numeric::{non_negative, ratio};
use crate::schema::{PostIaTool, RelatedCostsBaseline, RelatedCostsPostIa, Tool};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RelatedCostsMetrics {
    pub monthly_cost_before: f64,
    pub monthly_cost_after: f64,
    pub monthly_saving: f64,
    pub annual_saving: f64,
    pub total_implementation_cost: f64,
    pub roi: f64,
    /// Months of savings needed to recover the implementation cost.
    pub payback_months: f64,
}

pub fn compute(baseline: Option<&RelatedCostsBaseline>, post: &RelatedCostsPostIa) -> RelatedCostsMetrics {
    let monthly_cost_after: f64 = post.tools.iter().map(PostIaTool::monthly_total).sum();
    let total_implementation_cost: f64 = post
        .tools
        .iter()
        .map(|t| non_negative(t.implementation_cost))
        .sum();

    let Some(baseline) = baseline else {
        return RelatedCostsMetrics {
            monthly_cost_after,
            total_implementation_cost,
            ..Default::default()
        };
    };

    let monthly_cost_before: f64 = baseline.tools.iter().map(Tool::monthly_total).sum();
    let monthly_saving = monthly_cost_before - monthly_cost_after;
    let annual_saving = monthly_saving * 12.0;
    let roi = if total_implementation_cost > 0.0 {
        (annual_saving - total_implementation_cost) / total_implementation_cost * 100.0
    } else {
        0.0
    };

    RelatedCostsMetrics {
        monthly_cost_before,
        monthly_cost_after,
        monthly_saving,
        annual_saving,
        total_implementation_cost,
        roi,
        payback_months: ratio(total_implementation_cost, monthly_saving),
    }
}
