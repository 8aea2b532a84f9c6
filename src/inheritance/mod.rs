//! Post-IA inheritance.
//!
//! A Post-IA record starts life as a copy of its Baseline's structure.
//! When the Baseline changes later, the Post-IA record is refreshed rather
//! than rebuilt: list entries are merged by id so values the user already
//! customized on the Post-IA side survive.

pub mod merge;

pub use merge::merge_by_id;

use crate::metrics::recompute;
use crate::schema::{
    AnalyticalPostIa, BaselineRecord, DecisionQualityPostIa, MarginPostIa, OtherPostIa,
    PostIaRecord, PostIaTool, ProductivityPostIa, RelatedCostsPostIa, RevenuePostIa, RiskPostIa,
    SatisfactionPostIa, SpeedPostIa,
};
use tracing::debug;

/// Derive the Post-IA record for `baseline`.
///
/// With an `existing` record of the same type, its scalar inputs are kept
/// and its lists are refreshed against the Baseline. Otherwise a fresh
/// record is seeded from the Baseline. The result is always recomputed.
pub fn inherit_post_ia(baseline: &BaselineRecord, existing: Option<&PostIaRecord>) -> PostIaRecord {
    let mut post = match existing {
        Some(post) if post.indicator_type() == baseline.indicator_type() => refresh(baseline, post),
        Some(post) => {
            debug!(
                from = %post.indicator_type(),
                to = %baseline.indicator_type(),
                "Post-IA type differs from Baseline, rebuilding"
            );
            seed(baseline)
        }
        None => seed(baseline),
    };
    recompute(Some(baseline), &mut post);
    post
}

/// Fresh Post-IA record mirroring `baseline`.
///
/// Scalars with a Post-IA counterpart start at the Baseline value, so a
/// new record shows no change until the user edits it. Inputs that exist
/// only after automation (implementation costs, the monetary flag) start
/// at their defaults.
pub fn seed(baseline: &BaselineRecord) -> PostIaRecord {
    match baseline {
        BaselineRecord::Productivity(b) => PostIaRecord::Productivity(ProductivityPostIa {
            people: b.people.clone(),
            ..Default::default()
        }),
        BaselineRecord::AnalyticalCapacity(b) => PostIaRecord::AnalyticalCapacity(AnalyticalPostIa {
            inputs: b.clone(),
            ..Default::default()
        }),
        BaselineRecord::RevenueIncrease(b) => PostIaRecord::RevenueIncrease(RevenuePostIa {
            revenue_after: b.revenue_before,
            ..Default::default()
        }),
        BaselineRecord::MarginImprovement(b) => PostIaRecord::MarginImprovement(MarginPostIa {
            revenue_estimated: b.revenue_current,
            cost_estimated: b.cost_current,
            margin_estimated: b.margin_current,
            ..Default::default()
        }),
        BaselineRecord::RiskReduction(b) => PostIaRecord::RiskReduction(RiskPostIa {
            probability_with_ia: b.current_probability,
            impact_with_ia: b.impact,
            mitigation_cost_with_ia: b.mitigation_cost,
            ..Default::default()
        }),
        BaselineRecord::DecisionQuality(b) => PostIaRecord::DecisionQuality(DecisionQualityPostIa {
            inputs: b.clone(),
            ..Default::default()
        }),
        BaselineRecord::Speed(b) => PostIaRecord::Speed(SpeedPostIa {
            inputs: b.clone(),
            ..Default::default()
        }),
        BaselineRecord::Satisfaction(b) => PostIaRecord::Satisfaction(SatisfactionPostIa {
            score: b.score,
            churn_rate: b.churn_rate,
            avg_value_per_customer: b.avg_value_per_customer,
            ..Default::default()
        }),
        BaselineRecord::RelatedCosts(b) => PostIaRecord::RelatedCosts(RelatedCostsPostIa {
            tools: b.tools.iter().map(PostIaTool::from).collect(),
            ..Default::default()
        }),
        BaselineRecord::Other(b) => PostIaRecord::Other(OtherPostIa {
            value_after: b.value_before,
            qualitative: b.qualitative.clone(),
            ..Default::default()
        }),
    }
}

fn refresh(baseline: &BaselineRecord, existing: &PostIaRecord) -> PostIaRecord {
    let mut post = existing.clone();
    match (baseline, &mut post) {
        (BaselineRecord::Productivity(b), PostIaRecord::Productivity(p)) => {
            p.people = merge_by_id(&b.people, &p.people, Clone::clone);
        }
        (BaselineRecord::RelatedCosts(b), PostIaRecord::RelatedCosts(p)) => {
            p.tools = merge_by_id(&b.tools, &p.tools, |t| PostIaTool::from(t));
        }
        (BaselineRecord::Other(b), PostIaRecord::Other(p)) => {
            p.qualitative = merge_by_id(&b.qualitative, &p.qualitative, Clone::clone);
        }
        // Scalar-only variants keep every Post-IA input as entered.
        _ => {}
    }
    post
}
