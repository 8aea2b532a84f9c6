use crate::core::numeric::{finite, non_negative};
use crate::schema::{MarginBaseline, MarginPostIa};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MarginMetrics {
    /// Percentage points gained.
    pub delta_margin_pct: f64,
    pub cash_margin_current: f64,
    pub cash_margin_estimated: f64,
    pub delta_margin_cash: f64,
    pub monthly_saving: f64,
    pub annual_saving: f64,
}

pub fn compute(baseline: Option<&MarginBaseline>, post: &MarginPostIa) -> MarginMetrics {
    let cash_margin_estimated = non_negative(post.revenue_estimated) - non_negative(post.cost_estimated);

    let Some(baseline) = baseline else {
        return MarginMetrics {
            cash_margin_estimated,
            ..Default::default()
        };
    };

    let cash_margin_current = non_negative(baseline.revenue_current) - non_negative(baseline.cost_current);
    let delta_margin_cash = cash_margin_estimated - cash_margin_current;

    MarginMetrics {
        // Margins may legitimately be negative, so only non-finite values are dropped.
        delta_margin_pct: finite(post.margin_estimated) - finite(baseline.margin_current),
        cash_margin_current,
        cash_margin_estimated,
        delta_margin_cash,
        monthly_saving: delta_margin_cash,
        annual_saving: delta_margin_cash * 12.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_improvement() {
        let baseline = MarginBaseline {
            revenue_current: 50_000.0,
            cost_current: 40_000.0,
            margin_current: 20.0,
        };
        let post = MarginPostIa {
            revenue_estimated: 52_000.0,
            cost_estimated: 38_000.0,
            margin_estimated: 26.9,
            ..Default::default()
        };

        let m = compute(Some(&baseline), &post);

        assert!((m.delta_margin_pct - 6.9).abs() < 1e-9);
        assert_eq!(m.delta_margin_cash, 4_000.0);
        assert_eq!(m.monthly_saving, 4_000.0);
        assert_eq!(m.annual_saving, 48_000.0);
    }

    #[test]
    fn negative_margin_percentages_are_kept() {
        let baseline = MarginBaseline {
            margin_current: -5.0,
            ..Default::default()
        };
        let post = MarginPostIa {
            margin_estimated: 3.0,
            ..Default::default()
        };
        assert_eq!(compute(Some(&baseline), &post).delta_margin_pct, 8.0);
    }
}
