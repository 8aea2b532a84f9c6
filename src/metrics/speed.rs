use crate::core::numeric::{non_negative, ratio};
use crate::schema::{SpeedInputs, SpeedPostIa};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SpeedMetrics {
    pub monthly_deliveries_before: f64,
    pub monthly_deliveries_after: f64,
    pub delivery_time_reduction_pct: f64,
    pub capacity_increase: f64,
    pub delay_cost_saving: f64,
    pub labor_hours_before: f64,
    pub labor_hours_after: f64,
    pub time_value_saved: f64,
    pub productivity_gain_pct: f64,
    pub total_monthly_benefit: f64,
}

fn labor_hours(inputs: &SpeedInputs) -> f64 {
    inputs.deliveries.monthly()
        * non_negative(inputs.hours_per_delivery)
        * non_negative(inputs.people_per_delivery)
}

pub fn compute(baseline: Option<&SpeedInputs>, post: &SpeedPostIa) -> SpeedMetrics {
    let after = &post.inputs;
    let monthly_deliveries_after = after.deliveries.monthly();
    let labor_hours_after = labor_hours(after);

    let Some(before) = baseline else {
        return SpeedMetrics {
            monthly_deliveries_after,
            labor_hours_after,
            ..Default::default()
        };
    };

    let monthly_deliveries_before = before.deliveries.monthly();
    let time_before = non_negative(before.hours_per_delivery);
    let time_after = non_negative(after.hours_per_delivery);
    let capacity_increase = monthly_deliveries_after - monthly_deliveries_before;
    let delay_cost_saving =
        (non_negative(before.delay_cost) - non_negative(after.delay_cost)) * monthly_deliveries_after;
    let labor_hours_before = labor_hours(before);
    let time_value_saved = (labor_hours_before - labor_hours_after) * non_negative(after.hourly_rate);

    SpeedMetrics {
        monthly_deliveries_before,
        monthly_deliveries_after,
        delivery_time_reduction_pct: ratio(time_before - time_after, time_before) * 100.0,
        capacity_increase,
        delay_cost_saving,
        labor_hours_before,
        labor_hours_after,
        time_value_saved,
        productivity_gain_pct: ratio(capacity_increase, monthly_deliveries_before) * 100.0,
        total_monthly_benefit: delay_cost_saving + time_value_saved,
    }
}
