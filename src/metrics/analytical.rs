use crate::core::numeric::{non_negative, ratio};
use crate::schema::{AnalyticalInputs, AnalyticalPostIa};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AnalyticalMetrics {
    pub monthly_analyses_before: f64,
    pub monthly_analyses_after: f64,
    pub capacity_increase: f64,
    pub capacity_increase_pct: f64,
    pub hours_before: f64,
    pub hours_after: f64,
    /// Hours saved producing the baseline volume with the new process.
    pub hours_saved: f64,
    pub time_value: f64,
    pub labor_cost_before: f64,
    pub labor_cost_after: f64,
}

fn monthly_hours(inputs: &AnalyticalInputs) -> f64 {
    inputs.volume.monthly() * non_negative(inputs.hours_per_analysis)
}

pub fn compute(baseline: Option<&AnalyticalInputs>, post: &AnalyticalPostIa) -> AnalyticalMetrics {
    let after = &post.inputs;
    let monthly_analyses_after = after.volume.monthly();
    let hours_after = monthly_hours(after);
    let labor_cost_after = hours_after * non_negative(after.hourly_rate);

    let Some(before) = baseline else {
        return AnalyticalMetrics {
            monthly_analyses_after,
            hours_after,
            labor_cost_after,
            ..Default::default()
        };
    };

    let monthly_analyses_before = before.volume.monthly();
    let capacity_increase = monthly_analyses_after - monthly_analyses_before;
    let hours_before = monthly_hours(before);
    let hours_saved = monthly_analyses_before
        * (non_negative(before.hours_per_analysis) - non_negative(after.hours_per_analysis));

    AnalyticalMetrics {
        monthly_analyses_before,
        monthly_analyses_after,
        capacity_increase,
        capacity_increase_pct: ratio(capacity_increase, monthly_analyses_before) * 100.0,
        hours_before,
        hours_after,
        hours_saved,
        time_value: hours_saved * non_negative(after.hourly_rate),
        labor_cost_before: hours_before * non_negative(before.hourly_rate),
        labor_cost_after,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Volume, VolumePeriod};

    fn inputs(per_week: f64, hours: f64, rate: f64) -> AnalyticalInputs {
        AnalyticalInputs {
            volume: Volume::new(per_week, VolumePeriod::Week),
            hours_per_analysis: hours,
            analysts: 3.0,
            hourly_rate: rate,
        }
    }

    #[test]
    fn faster_analyses_free_up_time_and_capacity() {
        let before = inputs(10.0, 4.0, 60.0);
        let post = AnalyticalPostIa {
            inputs: inputs(15.0, 1.5, 60.0),
            ..Default::default()
        };

        let m = compute(Some(&before), &post);

        assert_eq!(m.monthly_analyses_before, 40.0);
        assert_eq!(m.monthly_analyses_after, 60.0);
        assert_eq!(m.capacity_increase, 20.0);
        assert!((m.capacity_increase_pct - 50.0).abs() < 1e-9);
        assert!((m.hours_saved - 100.0).abs() < 1e-9);
        assert!((m.time_value - 6000.0).abs() < 1e-9);
    }

    #[test]
    fn zero_baseline_volume_has_no_percentage() {
        let before = inputs(0.0, 4.0, 60.0);
        let post = AnalyticalPostIa {
            inputs: inputs(5.0, 2.0, 60.0),
            ..Default::default()
        };
        let m = compute(Some(&before), &post);
        assert_eq!(m.capacity_increase_pct, 0.0);
        assert_eq!(m.hours_saved, 0.0);
    }
}
