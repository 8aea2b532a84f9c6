use crate::core::numeric::{non_negative, percentage};
use crate::schema::{DecisionInputs, DecisionQualityPostIa};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DecisionQualityMetrics {
    pub monthly_decisions_before: f64,
    pub monthly_decisions_after: f64,
    pub wrong_decisions_before: f64,
    pub wrong_decisions_after: f64,
    pub error_cost_before: f64,
    pub error_cost_after: f64,
    pub error_saving: f64,
    pub decision_hours_before: f64,
    pub decision_hours_after: f64,
    pub time_saving_hours: f64,
    pub time_value: f64,
    pub total_monthly_benefit: f64,
}

struct Scenario {
    monthly: f64,
    wrong: f64,
    error_cost: f64,
    hours: f64,
}

fn scenario(inputs: &DecisionInputs) -> Scenario {
    let monthly = inputs.decisions.monthly();
    let wrong = monthly * (1.0 - percentage(inputs.accuracy) / 100.0);
    Scenario {
        monthly,
        wrong,
        error_cost: wrong * non_negative(inputs.avg_error_cost),
        hours: monthly
            * non_negative(inputs.avg_minutes_per_decision)
            * non_negative(inputs.people_involved)
            / 60.0,
    }
}

pub fn compute(baseline: Option<&DecisionInputs>, post: &DecisionQualityPostIa) -> DecisionQualityMetrics {
    let after = scenario(&post.inputs);

    let Some(baseline) = baseline else {
        return DecisionQualityMetrics {
            monthly_decisions_after: after.monthly,
            wrong_decisions_after: after.wrong,
            error_cost_after: after.error_cost,
            decision_hours_after: after.hours,
            ..Default::default()
        };
    };

    let before = scenario(baseline);
    let error_saving = before.error_cost - after.error_cost;
    let time_saving_hours = before.hours - after.hours;
    let time_value = time_saving_hours * non_negative(post.inputs.avg_hourly_rate);

    DecisionQualityMetrics {
        monthly_decisions_before: before.monthly,
        monthly_decisions_after: after.monthly,
        wrong_decisions_before: before.wrong,
        wrong_decisions_after: after.wrong,
        error_cost_before: before.error_cost,
        error_cost_after: after.error_cost,
        error_saving,
        decision_hours_before: before.hours,
        decision_hours_after: after.hours,
        time_saving_hours,
        time_value,
        total_monthly_benefit: error_saving + time_value,
    }
}
