//! Variant registry.
//!
//! One entry per [`IndicatorType`] listing the Baseline inputs, Post-IA
//! inputs and computed fields of that variant, plus the optional-field
//! visibility flags form builders use to decide what to ask for.
//!
//! The registry is total. Looking up an unknown tag returns the
//! Productivity entry.

use crate::core::IndicatorType;
use serde::Serialize;

/// Optional input that a form may show or hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisibilityFlag {
    pub name: &'static str,
    pub visible_by_default: bool,
}

const fn flag(name: &'static str, visible_by_default: bool) -> VisibilityFlag {
    VisibilityFlag {
        name,
        visible_by_default,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VariantSpec {
    pub indicator_type: IndicatorType,
    pub label: &'static str,
    pub baseline_fields: &'static [&'static str],
    pub post_ia_fields: &'static [&'static str],
    pub computed_fields: &'static [&'static str],
    pub visibility: &'static [VisibilityFlag],
}

impl VariantSpec {
    /// Default visibility of `flag`, or `None` if this variant lacks it.
    pub fn is_visible(&self, flag: &str) -> Option<bool> {
        self.visibility
            .iter()
            .find(|f| f.name == flag)
            .map(|f| f.visible_by_default)
    }
}

const DECISION_FIELDS: &[&str] = &[
    "decisions",
    "accuracy",
    "avg_error_cost",
    "avg_minutes_per_decision",
    "people_involved",
    "avg_hourly_rate",
];

const SPEED_FIELDS: &[&str] = &[
    "deliveries",
    "hours_per_delivery",
    "delay_cost",
    "people_per_delivery",
    "hourly_rate",
];

const ANALYTICAL_FIELDS: &[&str] = &["volume", "hours_per_analysis", "analysts", "hourly_rate"];

static REGISTRY: [VariantSpec; 10] = [
    VariantSpec {
        indicator_type: IndicatorType::Productivity,
        label: "Productivity",
        baseline_fields: &["people"],
        post_ia_fields: &["people"],
        computed_fields: &[
            "baseline_hours",
            "post_ia_hours",
            "baseline_monthly_cost",
            "post_ia_monthly_cost",
            "delta_hours",
            "delta_productivity",
            "productivity_gain_pct",
            "per_person",
        ],
        visibility: &[
            flag("show_execution_time", true),
            flag("show_real_frequency", true),
            flag("show_desired_frequency", false),
            flag("show_role", true),
        ],
    },
    VariantSpec {
        indicator_type: IndicatorType::AnalyticalCapacity,
        label: "Analytical Capacity",
        baseline_fields: ANALYTICAL_FIELDS,
        post_ia_fields: ANALYTICAL_FIELDS,
        computed_fields: &[
            "monthly_analyses_before",
            "monthly_analyses_after",
            "capacity_increase",
            "capacity_increase_pct",
            "hours_before",
            "hours_after",
            "hours_saved",
            "time_value",
            "labor_cost_before",
            "labor_cost_after",
        ],
        visibility: &[flag("show_hourly_rate", true), flag("show_analysts", true)],
    },
    VariantSpec {
        indicator_type: IndicatorType::RevenueIncrease,
        label: "Revenue Increase",
        baseline_fields: &["revenue_before"],
        post_ia_fields: &["revenue_after"],
        computed_fields: &["delta_revenue", "delta_revenue_pct"],
        visibility: &[flag("show_revenue_pct", true)],
    },
    VariantSpec {
        indicator_type: IndicatorType::MarginImprovement,
        label: "Margin Improvement",
        baseline_fields: &["revenue_current", "cost_current", "margin_current"],
        post_ia_fields: &["revenue_estimated", "cost_estimated", "margin_estimated"],
        computed_fields: &[
            "delta_margin_pct",
            "cash_margin_current",
            "cash_margin_estimated",
            "delta_margin_cash",
            "monthly_saving",
            "annual_saving",
        ],
        visibility: &[flag("show_margin_pct", true), flag("show_cash_margin", true)],
    },
    VariantSpec {
        indicator_type: IndicatorType::RiskReduction,
        label: "Risk Reduction",
        baseline_fields: &["current_probability", "impact", "mitigation_cost"],
        post_ia_fields: &[
            "probability_with_ia",
            "impact_with_ia",
            "mitigation_cost_with_ia",
            "implementation_cost",
        ],
        computed_fields: &[
            "exposure_before",
            "exposure_after",
            "risk_value_avoided",
            "mitigation_saving",
            "annual_benefit",
            "roi",
        ],
        visibility: &[
            flag("show_mitigation_cost", true),
            flag("show_implementation_cost", true),
        ],
    },
    VariantSpec {
        indicator_type: IndicatorType::DecisionQuality,
        label: "Decision Quality",
        baseline_fields: DECISION_FIELDS,
        post_ia_fields: DECISION_FIELDS,
        computed_fields: &[
            "monthly_decisions_before",
            "monthly_decisions_after",
            "wrong_decisions_before",
            "wrong_decisions_after",
            "error_cost_before",
            "error_cost_after",
            "error_saving",
            "decision_hours_before",
            "decision_hours_after",
            "time_saving_hours",
            "time_value",
            "total_monthly_benefit",
        ],
        visibility: &[flag("show_error_cost", true), flag("show_time_cost", true)],
    },
    VariantSpec {
        indicator_type: IndicatorType::Speed,
        label: "Speed",
        baseline_fields: SPEED_FIELDS,
        post_ia_fields: SPEED_FIELDS,
        computed_fields: &[
            "monthly_deliveries_before",
            "monthly_deliveries_after",
            "delivery_time_reduction_pct",
            "capacity_increase",
            "delay_cost_saving",
            "labor_hours_before",
            "labor_hours_after",
            "time_value_saved",
            "productivity_gain_pct",
            "total_monthly_benefit",
        ],
        visibility: &[flag("show_delay_cost", true), flag("show_labor_hours", false)],
    },
    VariantSpec {
        indicator_type: IndicatorType::Satisfaction,
        label: "Satisfaction",
        baseline_fields: &["score", "churn_rate", "customer_count", "avg_value_per_customer"],
        post_ia_fields: &["score", "churn_rate", "avg_value_per_customer"],
        computed_fields: &[
            "delta_score",
            "churn_reduction",
            "retained_customers",
            "retention_value",
            "ltv_before",
            "ltv_after",
            "ltv_delta",
        ],
        visibility: &[flag("show_ltv", true), flag("show_retention", true)],
    },
    VariantSpec {
        indicator_type: IndicatorType::RelatedCosts,
        label: "Related Costs",
        baseline_fields: &["tools"],
        post_ia_fields: &["tools"],
        computed_fields: &[
            "monthly_cost_before",
            "monthly_cost_after",
            "monthly_saving",
            "annual_saving",
            "total_implementation_cost",
            "roi",
            "payback_months",
        ],
        visibility: &[
            flag("show_other_costs", true),
            flag("show_implementation_cost", true),
        ],
    },
    VariantSpec {
        indicator_type: IndicatorType::Other,
        label: "Other",
        baseline_fields: &["label", "unit", "value_before", "qualitative"],
        post_ia_fields: &["value_after", "monetary", "qualitative"],
        computed_fields: &["delta", "delta_pct"],
        visibility: &[flag("show_unit", true), flag("show_qualitative", true)],
    },
];

pub fn all() -> &'static [VariantSpec] {
    &REGISTRY
}

pub fn spec_for(indicator_type: IndicatorType) -> &'static VariantSpec {
    REGISTRY
        .iter()
        .find(|spec| spec.indicator_type == indicator_type)
        .unwrap_or(&REGISTRY[0])
}

/// Look up a variant by tag or label; unknown tags get the Productivity entry.
pub fn lookup(tag: &str) -> &'static VariantSpec {
    spec_for(IndicatorType::from_tag(tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::recompute;
    use crate::schema::{BaselineRecord, PostIaRecord};
    use std::collections::BTreeSet;

    fn keys(value: serde_json::Value, skip: &[&str]) -> BTreeSet<String> {
        value
            .as_object()
            .map(|map| {
                map.keys()
                    .filter(|k| !skip.contains(&k.as_str()))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn listed(fields: &[&str]) -> BTreeSet<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn registry_is_total_and_ordered() {
        assert_eq!(all().len(), IndicatorType::ALL.len());
        for (spec, t) in all().iter().zip(IndicatorType::ALL) {
            assert_eq!(spec.indicator_type, t);
            assert_eq!(spec.label, t.label());
            assert_eq!(spec_for(t).indicator_type, t);
        }
    }

    #[test]
    fn unknown_lookup_falls_back_to_productivity() {
        assert_eq!(lookup("no_such_type").indicator_type, IndicatorType::Productivity);
        assert_eq!(lookup("Risk Reduction").indicator_type, IndicatorType::RiskReduction);
    }

    #[test]
    fn field_sets_match_record_shapes() {
        for t in IndicatorType::ALL {
            let spec = spec_for(t);

            let baseline = serde_json::to_value(BaselineRecord::default_for(t)).unwrap();
            assert_eq!(keys(baseline, &["type"]), listed(spec.baseline_fields), "{t} baseline");

            let mut post = PostIaRecord::default_for(t);
            recompute(None, &mut post);
            let post = serde_json::to_value(post).unwrap();
            let computed = post["metrics"].clone();
            assert_eq!(keys(post, &["type", "metrics"]), listed(spec.post_ia_fields), "{t} post");
            assert_eq!(keys(computed, &[]), listed(spec.computed_fields), "{t} metrics");
        }
    }

    #[test]
    fn visibility_flags_are_queryable() {
        let productivity = spec_for(IndicatorType::Productivity);
        assert_eq!(productivity.is_visible("show_execution_time"), Some(true));
        assert_eq!(productivity.is_visible("show_desired_frequency"), Some(false));
        assert_eq!(productivity.is_visible("show_ltv"), None);
    }
}
