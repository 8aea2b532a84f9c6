//! Human-readable insight text for correlations that cross their threshold.

use super::CategoryValue;

pub fn baseline_vs_post_ia(r: f64) -> String {
    format!(
        "Processes that were expensive before automation remain the expensive ones after it (r = {:.2}). Savings scale with the size of the original process.",
        r
    )
}

pub fn cost_vs_saving(r: f64) -> String {
    if r >= 0.0 {
        format!(
            "Indicators with higher costs also deliver higher annual savings (r = {:.2}). Spending is going where the returns are.",
            r
        )
    } else {
        format!(
            "Indicators with higher costs deliver lower annual savings (r = {:.2}). Review the most expensive initiatives first.",
            r
        )
    }
}

pub fn best_type(best: &CategoryValue) -> String {
    format!(
        "{} indicators have the best average ROI ({:.1}% over {} indicator{}).",
        best.indicator_type.label(),
        best.average_roi,
        best.count,
        if best.count == 1 { "" } else { "s" }
    )
}

pub fn team_size_vs_gain(r: f64) -> String {
    if r >= 0.0 {
        format!(
            "Larger teams see larger productivity gains (r = {:.2}). Automation pays off most where many people repeat the task.",
            r
        )
    } else {
        format!(
            "Smaller teams see larger productivity gains (r = {:.2}). Focused tasks benefit most from automation.",
            r
        )
    }
}

pub fn time_saved_vs_investment(r: f64) -> String {
    if r >= 0.0 {
        format!(
            "Indicators that save more hours needed more investment (r = {:.2}).",
            r
        )
    } else {
        format!(
            "The indicators saving the most hours were among the cheapest to implement (r = {:.2}).",
            r
        )
    }
}
