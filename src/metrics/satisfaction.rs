use crate::core::numeric::{finite, non_negative, percentage, ratio};
use crate::schema::{SatisfactionBaseline, SatisfactionPostIa};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SatisfactionMetrics {
    pub delta_score: f64,
    /// Percentage points of monthly churn removed.
    pub churn_reduction: f64,
    pub retained_customers: f64,
    /// Annual value of the retained customers.
    pub retention_value: f64,
    pub ltv_before: f64,
    pub ltv_after: f64,
    pub ltv_delta: f64,
}

/// Customer lifetime value: monthly value over monthly churn. Zero churn
/// has no finite lifetime, so it reports 0.
pub fn lifetime_value(monthly_value: f64, churn_rate: f64) -> f64 {
    ratio(non_negative(monthly_value), percentage(churn_rate) / 100.0)
}

pub fn compute(baseline: Option<&SatisfactionBaseline>, post: &SatisfactionPostIa) -> SatisfactionMetrics {
    let ltv_after = lifetime_value(post.avg_value_per_customer, post.churn_rate);

    let Some(baseline) = baseline else {
        return SatisfactionMetrics {
            ltv_after,
            ..Default::default()
        };
    };

    let churn_reduction = percentage(baseline.churn_rate) - percentage(post.churn_rate);
    let retained_customers = non_negative(baseline.customer_count) * churn_reduction / 100.0;
    let ltv_before = lifetime_value(baseline.avg_value_per_customer, baseline.churn_rate);

    SatisfactionMetrics {
        delta_score: finite(post.score) - finite(baseline.score),
        churn_reduction,
        retained_customers,
        retention_value: retained_customers * non_negative(post.avg_value_per_customer) * 12.0,
        ltv_before,
        ltv_after,
        ltv_delta: ltv_after - ltv_before,
    }
}
