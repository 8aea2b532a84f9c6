//! Indicators: one measured process within a project.
//!
//! An indicator owns a Baseline record, a Post-IA record and a cost list.
//! Fields are private so every change goes through a method that keeps
//! two invariants:
//! - both records carry the indicator's current type;
//! - the Post-IA metrics match the current inputs.

use crate::core::IndicatorType;
use crate::costs::{self, CostEntry, CostSummary};
use crate::inheritance::inherit_post_ia;
use crate::metrics::{self, MetricSummary};
use crate::schema::{BaselineRecord, PostIaRecord};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawIndicator")]
pub struct Indicator {
    id: String,
    project_id: String,
    name: String,
    description: String,
    indicator_type: IndicatorType,
    baseline: BaselineRecord,
    post_ia: PostIaRecord,
    costs: Vec<CostEntry>,
}

/// Indicator as found in a file, before its invariants are restored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawIndicator {
    id: String,
    project_id: String,
    name: String,
    description: String,
    indicator_type: Option<IndicatorType>,
    baseline: Option<Value>,
    post_ia: Option<Value>,
    costs: Vec<CostEntry>,
}

/// Parses one record; an unreadable record is dropped so the rest of the
/// indicator still loads.
fn parse_record<T: DeserializeOwned>(
    indicator: &str,
    side: &str,
    raw: Option<Value>,
) -> Option<T> {
    let value = raw?;
    match serde_json::from_value(value) {
        Ok(record) => Some(record),
        Err(e) => {
            warn!(
                indicator = %indicator,
                record = side,
                error = %e,
                "Unreadable record. Using defaults."
            );
            None
        }
    }
}

impl From<RawIndicator> for Indicator {
    fn from(raw: RawIndicator) -> Self {
        let raw_baseline: Option<BaselineRecord> =
            parse_record(&raw.id, "baseline", raw.baseline);
        let raw_post_ia: Option<PostIaRecord> = parse_record(&raw.id, "post_ia", raw.post_ia);

        let indicator_type = raw
            .indicator_type
            .or_else(|| raw_baseline.as_ref().map(BaselineRecord::indicator_type))
            .unwrap_or_default();

        let baseline = match raw_baseline {
            Some(b) if b.indicator_type() == indicator_type => b,
            Some(b) => {
                warn!(
                    indicator = %raw.id,
                    declared = %indicator_type,
                    found = %b.indicator_type(),
                    "Baseline type does not match indicator type. Using defaults."
                );
                BaselineRecord::default_for(indicator_type)
            }
            None => BaselineRecord::default_for(indicator_type),
        };
        let post_ia = inherit_post_ia(&baseline, raw_post_ia.as_ref());

        Self {
            id: raw.id,
            project_id: raw.project_id,
            name: raw.name,
            description: raw.description,
            indicator_type,
            baseline,
            post_ia,
            costs: raw.costs,
        }
    }
}

/// What [`Indicator::change_type`] threw away.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeChange {
    pub from: IndicatorType,
    pub to: IndicatorType,
    /// True when the discarded records held user data.
    pub destructive: bool,
    pub discarded_baseline: Option<BaselineRecord>,
    pub discarded_post_ia: Option<PostIaRecord>,
}

impl Indicator {
    /// New indicator with default records for `indicator_type` and no costs.
    pub fn new(
        id: impl Into<String>,
        project_id: impl Into<String>,
        name: impl Into<String>,
        indicator_type: IndicatorType,
    ) -> Self {
        let baseline = BaselineRecord::default_for(indicator_type);
        let post_ia = inherit_post_ia(&baseline, None);
        Self {
            id: id.into(),
            project_id: project_id.into(),
            name: name.into(),
            description: String::new(),
            indicator_type,
            baseline,
            post_ia,
            costs: Vec::new(),
        }
    }

    /// Build an indicator from explicit records; the Post-IA side is
    /// inherited from `baseline` so a stale or mismatched record is repaired.
    pub fn with_records(
        id: impl Into<String>,
        project_id: impl Into<String>,
        name: impl Into<String>,
        baseline: BaselineRecord,
        post_ia: Option<PostIaRecord>,
    ) -> Self {
        let post_ia = inherit_post_ia(&baseline, post_ia.as_ref());
        Self {
            id: id.into(),
            project_id: project_id.into(),
            name: name.into(),
            description: String::new(),
            indicator_type: baseline.indicator_type(),
            baseline,
            post_ia,
            costs: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn indicator_type(&self) -> IndicatorType {
        self.indicator_type
    }

    pub fn baseline(&self) -> &BaselineRecord {
        &self.baseline
    }

    pub fn post_ia(&self) -> &PostIaRecord {
        &self.post_ia
    }

    pub fn costs(&self) -> &[CostEntry] {
        &self.costs
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub(crate) fn set_project_id(&mut self, project_id: &str) {
        self.project_id = project_id.to_string();
    }

    /// Edit the Baseline record in place, then refresh the Post-IA side.
    ///
    /// Swapping the record for another variant is not an edit; such a
    /// change is rolled back. Use [`Indicator::change_type`] instead.
    pub fn edit_baseline<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut BaselineRecord),
    {
        let previous = self.baseline.clone();
        edit(&mut self.baseline);
        if self.baseline.indicator_type() != self.indicator_type {
            warn!(
                indicator = %self.id,
                attempted = %self.baseline.indicator_type(),
                "Baseline edit changed the record type, ignoring it"
            );
            self.baseline = previous;
        }
        self.refresh();
    }

    /// Edit the Post-IA inputs in place, then recompute its metrics.
    pub fn edit_post_ia<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut PostIaRecord),
    {
        let previous = self.post_ia.clone();
        edit(&mut self.post_ia);
        if self.post_ia.indicator_type() != self.indicator_type {
            warn!(
                indicator = %self.id,
                attempted = %self.post_ia.indicator_type(),
                "Post-IA edit changed the record type, ignoring it"
            );
            self.post_ia = previous;
        }
        metrics::recompute(Some(&self.baseline), &mut self.post_ia);
    }

    /// Switch to `to`, replacing both records with fresh defaults.
    ///
    /// Costs and metadata are kept. Changing to the current type is a no-op.
    pub fn change_type(&mut self, to: IndicatorType) -> TypeChange {
        let from = self.indicator_type;
        if from == to {
            return TypeChange {
                from,
                to,
                destructive: false,
                discarded_baseline: None,
                discarded_post_ia: None,
            };
        }

        let baseline = BaselineRecord::default_for(to);
        let post_ia = inherit_post_ia(&baseline, None);
        let old_baseline = std::mem::replace(&mut self.baseline, baseline);
        let old_post_ia = std::mem::replace(&mut self.post_ia, post_ia);
        self.indicator_type = to;

        let destructive = !old_baseline.is_empty() || !old_post_ia.is_empty();
        debug!(indicator = %self.id, %from, %to, destructive, "Indicator type changed");

        TypeChange {
            from,
            to,
            destructive,
            discarded_baseline: Some(old_baseline),
            discarded_post_ia: Some(old_post_ia),
        }
    }

    /// Put back the records a [`TypeChange`] discarded.
    ///
    /// Returns false, leaving the indicator untouched, when the indicator
    /// is no longer of the type the change produced.
    pub fn undo_type_change(&mut self, change: TypeChange) -> bool {
        if change.to != self.indicator_type {
            return false;
        }
        let (Some(baseline), Some(post_ia)) = (change.discarded_baseline, change.discarded_post_ia)
        else {
            return change.from == change.to;
        };
        self.indicator_type = change.from;
        self.baseline = baseline;
        self.post_ia = inherit_post_ia(&self.baseline, Some(&post_ia));
        true
    }

    pub fn set_costs(&mut self, costs: Vec<CostEntry>) {
        self.costs = costs;
    }

    pub fn add_cost(&mut self, cost: CostEntry) {
        self.costs.push(cost);
    }

    pub fn remove_cost(&mut self, id: &str) -> Option<CostEntry> {
        let index = self.costs.iter().position(|c| c.id == id)?;
        Some(self.costs.remove(index))
    }

    pub fn cost_summary(&self) -> CostSummary {
        costs::summarize(&self.costs)
    }

    /// Variant-independent view of this indicator's metrics.
    pub fn summary(&self) -> MetricSummary {
        metrics::summarize(Some(&self.baseline), &self.post_ia)
    }

    /// Re-derive the Post-IA record from the current Baseline.
    pub fn refresh(&mut self) {
        self.post_ia = inherit_post_ia(&self.baseline, Some(&self.post_ia));
    }
}
