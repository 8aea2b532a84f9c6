//! Baseline records: how the process ran before automation.
//!
//! Amounts are monthly and percentages are on a 0-100 scale unless a field
//! says otherwise.

use super::entries::{Person, QualitativeEntry, Tool};
use crate::core::numeric::lenient;
use crate::core::{IndicatorType, Volume};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductivityBaseline {
    pub people: Vec<Person>,
}

/// Scenario inputs shared by the Baseline and Post-IA sides of an
/// Analytical Capacity indicator.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticalInputs {
    pub volume: Volume,
    #[serde(deserialize_with = "lenient")]
    pub hours_per_analysis: f64,
    #[serde(deserialize_with = "lenient")]
    pub analysts: f64,
    #[serde(deserialize_with = "lenient")]
    pub hourly_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RevenueBaseline {
    #[serde(deserialize_with = "lenient")]
    pub revenue_before: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarginBaseline {
    #[serde(deserialize_with = "lenient")]
    pub revenue_current: f64,
    #[serde(deserialize_with = "lenient")]
    pub cost_current: f64,
    /// Margin percentage as reported by the business.
    #[serde(deserialize_with = "lenient")]
    pub margin_current: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskBaseline {
    /// Probability of the adverse event, 0-100.
    #[serde(deserialize_with = "lenient")]
    pub current_probability: f64,
    /// Cost of the event if it happens.
    #[serde(deserialize_with = "lenient")]
    pub impact: f64,
    #[serde(deserialize_with = "lenient")]
    pub mitigation_cost: f64,
}

/// Scenario inputs shared by both sides of a Decision Quality indicator.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionInputs {
    pub decisions: Volume,
    /// Share of decisions that turn out right, 0-100.
    #[serde(deserialize_with = "lenient")]
    pub accuracy: f64,
    #[serde(deserialize_with = "lenient")]
    pub avg_error_cost: f64,
    #[serde(deserialize_with = "lenient")]
    pub avg_minutes_per_decision: f64,
    #[serde(deserialize_with = "lenient")]
    pub people_involved: f64,
    #[serde(deserialize_with = "lenient")]
    pub avg_hourly_rate: f64,
}

/// Scenario inputs shared by both sides of a Speed indicator.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedInputs {
    pub deliveries: Volume,
    #[serde(deserialize_with = "lenient")]
    pub hours_per_delivery: f64,
    /// Cost of delay attached to each delivery.
    #[serde(deserialize_with = "lenient")]
    pub delay_cost: f64,
    #[serde(deserialize_with = "lenient")]
    pub people_per_delivery: f64,
    #[serde(deserialize_with = "lenient")]
    pub hourly_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SatisfactionBaseline {
    #[serde(deserialize_with = "lenient")]
    pub score: f64,
    /// Monthly churn, 0-100.
    #[serde(deserialize_with = "lenient")]
    pub churn_rate: f64,
    #[serde(deserialize_with = "lenient")]
    pub customer_count: f64,
    #[serde(deserialize_with = "lenient")]
    pub avg_value_per_customer: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedCostsBaseline {
    pub tools: Vec<Tool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OtherBaseline {
    pub label: String,
    pub unit: String,
    #[serde(deserialize_with = "lenient")]
    pub value_before: f64,
    pub qualitative: Vec<QualitativeEntry>,
}

/// Baseline record, one variant per [`IndicatorType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BaselineRecord {
    Productivity(ProductivityBaseline),
    AnalyticalCapacity(AnalyticalInputs),
    RevenueIncrease(RevenueBaseline),
    MarginImprovement(MarginBaseline),
    RiskReduction(RiskBaseline),
    DecisionQuality(DecisionInputs),
    Speed(SpeedInputs),
    Satisfaction(SatisfactionBaseline),
    RelatedCosts(RelatedCostsBaseline),
    Other(OtherBaseline),
}

impl BaselineRecord {
    /// Fresh record for `indicator_type`: empty lists, zero scalars.
    pub fn default_for(indicator_type: IndicatorType) -> Self {
        match indicator_type {
            IndicatorType::Productivity => Self::Productivity(Default::default()),
            IndicatorType::AnalyticalCapacity => Self::AnalyticalCapacity(Default::default()),
            IndicatorType::RevenueIncrease => Self::RevenueIncrease(Default::default()),
            IndicatorType::MarginImprovement => Self::MarginImprovement(Default::default()),
            IndicatorType::RiskReduction => Self::RiskReduction(Default::default()),
            IndicatorType::DecisionQuality => Self::DecisionQuality(Default::default()),
            IndicatorType::Speed => Self::Speed(Default::default()),
            IndicatorType::Satisfaction => Self::Satisfaction(Default::default()),
            IndicatorType::RelatedCosts => Self::RelatedCosts(Default::default()),
            IndicatorType::Other => Self::Other(Default::default()),
        }
    }

    pub fn indicator_type(&self) -> IndicatorType {
        match self {
            Self::Productivity(_) => IndicatorType::Productivity,
            Self::AnalyticalCapacity(_) => IndicatorType::AnalyticalCapacity,
            Self::RevenueIncrease(_) => IndicatorType::RevenueIncrease,
            Self::MarginImprovement(_) => IndicatorType::MarginImprovement,
            Self::RiskReduction(_) => IndicatorType::RiskReduction,
            Self::DecisionQuality(_) => IndicatorType::DecisionQuality,
            Self::Speed(_) => IndicatorType::Speed,
            Self::Satisfaction(_) => IndicatorType::Satisfaction,
            Self::RelatedCosts(_) => IndicatorType::RelatedCosts,
            Self::Other(_) => IndicatorType::Other,
        }
    }

    /// True while the record still equals its type's default.
    pub fn is_empty(&self) -> bool {
        *self == Self::default_for(self.indicator_type())
    }
}

impl Default for BaselineRecord {
    fn default() -> Self {
        Self::default_for(IndicatorType::default())
    }
}
