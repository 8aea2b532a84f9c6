use crate::core::numeric::{non_negative, ratio};
use crate::schema::{RevenueBaseline, RevenuePostIa};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RevenueMetrics {
    /// Monthly revenue gained.
    pub delta_revenue: f64,
    pub delta_revenue_pct: f64,
}

pub fn compute(baseline: Option<&RevenueBaseline>, post: &RevenuePostIa) -> RevenueMetrics {
    let Some(baseline) = baseline else {
        return RevenueMetrics::default();
    };

    let before = non_negative(baseline.revenue_before);
    let delta_revenue = non_negative(post.revenue_after) - before;

    RevenueMetrics {
        delta_revenue,
        delta_revenue_pct: ratio(delta_revenue, before) * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revenue_delta_is_after_minus_before() {
        let baseline = RevenueBaseline {
            revenue_before: 10_000.0,
        };
        let post = RevenuePostIa {
            revenue_after: 12_500.0,
            ..Default::default()
        };

        let m = compute(Some(&baseline), &post);
        assert_eq!(m.delta_revenue, 2_500.0);
        assert_eq!(m.delta_revenue_pct, 25.0);
    }

    #[test]
    fn revenue_can_drop() {
        let baseline = RevenueBaseline {
            revenue_before: 1_000.0,
        };
        let post = RevenuePostIa {
            revenue_after: 800.0,
            ..Default::default()
        };
        assert_eq!(compute(Some(&baseline), &post).delta_revenue, -200.0);
    }

    #[test]
    fn no_baseline_no_delta() {
        let post = RevenuePostIa {
            revenue_after: 800.0,
            ..Default::default()
        };
        assert_eq!(compute(None, &post), RevenueMetrics::default());
    }
}
