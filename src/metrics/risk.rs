use crate::core::numeric::{non_negative, percentage};
use crate::schema::{RiskBaseline, RiskPostIa};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RiskMetrics {
    pub exposure_before: f64,
    pub exposure_after: f64,
    pub risk_value_avoided: f64,
    /// Monthly mitigation spend no longer needed.
    pub mitigation_saving: f64,
    pub annual_benefit: f64,
    pub roi: f64,
}

/// Expected loss: `probability / 100 * impact`.
pub fn exposure(probability: f64, impact: f64) -> f64 {
    percentage(probability) / 100.0 * non_negative(impact)
}

pub fn compute(baseline: Option<&RiskBaseline>, post: &RiskPostIa) -> RiskMetrics {
    let exposure_after = exposure(post.probability_with_ia, post.impact_with_ia);

    let Some(baseline) = baseline else {
        return RiskMetrics {
            exposure_after,
            ..Default::default()
        };
    };

    let exposure_before = exposure(baseline.current_probability, baseline.impact);
    let risk_value_avoided = exposure_before - exposure_after;
    let mitigation_saving =
        non_negative(baseline.mitigation_cost) - non_negative(post.mitigation_cost_with_ia);
    let annual_benefit = mitigation_saving * 12.0 + risk_value_avoided;

    let implementation_cost = non_negative(post.implementation_cost);
    let roi = if implementation_cost > 0.0 {
        (annual_benefit - implementation_cost) / implementation_cost * 100.0
    } else {
        0.0
    };

    RiskMetrics {
        exposure_before,
        exposure_after,
        risk_value_avoided,
        mitigation_saving,
        annual_benefit,
        roi,
    }
}
