use crate::core::numeric::{finite, ratio};
use crate::core::IndicatorType;
use crate::indicator::Indicator;
use serde::Serialize;

/// What one indicator contributes to its project.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct IndicatorOutcome {
    pub indicator_id: String,
    pub name: String,
    pub indicator_type: IndicatorType,
    /// False when neither record holds inputs yet; savings are then zero.
    pub computable: bool,
    pub monthly_saving: f64,
    pub annual_saving: f64,
    /// Recurring costs per year.
    pub annual_cost: f64,
    /// One-off costs plus implementation costs declared in the Post-IA record.
    pub investment: f64,
    pub roi: f64,
    pub hours_saved_monthly: f64,
    pub team_size: f64,
    pub productivity_gain_pct: f64,
    pub baseline_hours: f64,
    pub baseline_magnitude: f64,
    pub post_ia_magnitude: f64,
}

impl IndicatorOutcome {
    pub fn from_indicator(indicator: &Indicator) -> Self {
        let costs = indicator.cost_summary();
        // A zero Baseline is a real starting point once the Post-IA side has inputs.
        let computable = !indicator.baseline().is_empty() || !indicator.post_ia().is_empty();
        let summary = indicator.summary();
        let investment = costs.one_off_total + finite(summary.implementation_cost);

        let mut outcome = Self {
            indicator_id: indicator.id().to_string(),
            name: indicator.name().to_string(),
            indicator_type: indicator.indicator_type(),
            computable,
            annual_cost: costs.total_annual,
            investment,
            ..Default::default()
        };
        if !computable {
            return outcome;
        }

        outcome.monthly_saving = finite(summary.monthly_saving);
        outcome.annual_saving = finite(summary.annual_saving);
        outcome.hours_saved_monthly = finite(summary.hours_saved_monthly);
        outcome.team_size = finite(summary.team_size);
        outcome.productivity_gain_pct = finite(summary.productivity_gain_pct);
        outcome.baseline_hours = finite(summary.baseline_hours);
        outcome.baseline_magnitude = finite(summary.baseline_magnitude);
        outcome.post_ia_magnitude = finite(summary.post_ia_magnitude);
        outcome.roi = roi(outcome.annual_saving, outcome.total_cost());
        outcome
    }

    /// First-year cost: recurring costs plus the investment.
    pub fn total_cost(&self) -> f64 {
        self.annual_cost + self.investment
    }
}

/// `(saving - cost) / cost` as a percentage; zero when nothing was spent.
pub fn roi(annual_saving: f64, total_cost: f64) -> f64 {
    if total_cost <= 0.0 {
        return 0.0;
    }
    ratio(annual_saving - total_cost, total_cost) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::costs::{CostEntry, Recurrence};
    use crate::schema::{BaselineRecord, PostIaRecord, RevenueBaseline, RevenuePostIa};

    fn revenue_indicator(before: f64, after: f64) -> Indicator {
        Indicator::with_records(
            "rev",
            "p",
            "Upsell",
            BaselineRecord::RevenueIncrease(RevenueBaseline {
                revenue_before: before,
            }),
            Some(PostIaRecord::RevenueIncrease(RevenuePostIa {
                revenue_after: after,
                ..Default::default()
            })),
        )
    }

    #[test]
    fn roi_accounts_for_recurring_and_one_off_costs() {
        let mut indicator = revenue_indicator(10_000.0, 11_000.0);
        indicator.set_costs(vec![
            CostEntry::new("License", 100.0, Recurrence::Monthly),
            CostEntry::new("Setup", 4_800.0, Recurrence::OneOff),
        ]);

        let outcome = IndicatorOutcome::from_indicator(&indicator);

        assert_eq!(outcome.annual_saving, 12_000.0);
        assert_eq!(outcome.annual_cost, 1_200.0);
        assert_eq!(outcome.investment, 4_800.0);
        assert!((outcome.roi - 100.0).abs() < 1e-9);
    }

    #[test]
    fn empty_indicator_is_not_computable() {
        let indicator = Indicator::new("x", "p", "Draft", IndicatorType::Speed);
        let outcome = IndicatorOutcome::from_indicator(&indicator);
        assert!(!outcome.computable);
        assert_eq!(outcome.annual_saving, 0.0);
        assert_eq!(outcome.roi, 0.0);
    }

    #[test]
    fn zero_baseline_with_post_ia_inputs_is_computable() {
        let outcome = IndicatorOutcome::from_indicator(&revenue_indicator(0.0, 5_000.0));
        assert!(outcome.computable);
        assert_eq!(outcome.monthly_saving, 5_000.0);
        assert_eq!(outcome.annual_saving, 60_000.0);
    }

    #[test]
    fn roi_without_costs_is_zero() {
        assert_eq!(roi(5_000.0, 0.0), 0.0);
        assert_eq!(roi(1_500.0, 1_000.0), 50.0);
    }
}
