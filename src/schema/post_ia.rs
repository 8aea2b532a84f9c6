//! Post-IA records: how the process runs once automation is in place.
//!
//! Each variant carries its own inputs plus a `metrics` block. The block is
//! derived data: it is never read from input and is rewritten by
//! [`crate::metrics::recompute`] whenever an input changes. Callers can read
//! it through `metrics()` but cannot set it.

use super::baseline::{AnalyticalInputs, DecisionInputs, SpeedInputs};
use super::entries::{Person, PostIaTool, QualitativeEntry};
use crate::core::numeric::lenient;
use crate::core::IndicatorType;
use crate::metrics::{
    AnalyticalMetrics, DecisionQualityMetrics, MarginMetrics, OtherMetrics, ProductivityMetrics,
    RelatedCostsMetrics, RevenueMetrics, RiskMetrics, SatisfactionMetrics, SpeedMetrics,
};
use serde::{Deserialize, Serialize};

macro_rules! metrics_accessor {
    ($($record:ty => $metrics:ty),+ $(,)?) => {
        $(
            impl $record {
                pub fn metrics(&self) -> &$metrics {
                    &self.metrics
                }
            }
        )+
    };
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductivityPostIa {
    pub people: Vec<Person>,
    #[serde(skip_deserializing)]
    pub(crate) metrics: ProductivityMetrics,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticalPostIa {
    #[serde(flatten)]
    pub inputs: AnalyticalInputs,
    #[serde(skip_deserializing)]
    pub(crate) metrics: AnalyticalMetrics,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RevenuePostIa {
    #[serde(deserialize_with = "lenient")]
    pub revenue_after: f64,
    #[serde(skip_deserializing)]
    pub(crate) metrics: RevenueMetrics,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarginPostIa {
    #[serde(deserialize_with = "lenient")]
    pub revenue_estimated: f64,
    #[serde(deserialize_with = "lenient")]
    pub cost_estimated: f64,
    #[serde(deserialize_with = "lenient")]
    pub margin_estimated: f64,
    #[serde(skip_deserializing)]
    pub(crate) metrics: MarginMetrics,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskPostIa {
    #[serde(deserialize_with = "lenient")]
    pub probability_with_ia: f64,
    #[serde(deserialize_with = "lenient")]
    pub impact_with_ia: f64,
    #[serde(deserialize_with = "lenient")]
    pub mitigation_cost_with_ia: f64,
    #[serde(deserialize_with = "lenient")]
    pub implementation_cost: f64,
    #[serde(skip_deserializing)]
    pub(crate) metrics: RiskMetrics,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionQualityPostIa {
    #[serde(flatten)]
    pub inputs: DecisionInputs,
    #[serde(skip_deserializing)]
    pub(crate) metrics: DecisionQualityMetrics,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedPostIa {
    #[serde(flatten)]
    pub inputs: SpeedInputs,
    #[serde(skip_deserializing)]
    pub(crate) metrics: SpeedMetrics,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SatisfactionPostIa {
    #[serde(deserialize_with = "lenient")]
    pub score: f64,
    #[serde(deserialize_with = "lenient")]
    pub churn_rate: f64,
    #[serde(deserialize_with = "lenient")]
    pub avg_value_per_customer: f64,
    #[serde(skip_deserializing)]
    pub(crate) metrics: SatisfactionMetrics,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedCostsPostIa {
    pub tools: Vec<PostIaTool>,
    #[serde(skip_deserializing)]
    pub(crate) metrics: RelatedCostsMetrics,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OtherPostIa {
    #[serde(deserialize_with = "lenient")]
    pub value_after: f64,
    /// Whether the value is money per month and should count as a saving.
    pub monetary: bool,
    pub qualitative: Vec<QualitativeEntry>,
    #[serde(skip_deserializing)]
    pub(crate) metrics: OtherMetrics,
}

metrics_accessor! {
    ProductivityPostIa => ProductivityMetrics,
    AnalyticalPostIa => AnalyticalMetrics,
    RevenuePostIa => RevenueMetrics,
    MarginPostIa => MarginMetrics,
    RiskPostIa => RiskMetrics,
    DecisionQualityPostIa => DecisionQualityMetrics,
    SpeedPostIa => SpeedMetrics,
    SatisfactionPostIa => SatisfactionMetrics,
    RelatedCostsPostIa => RelatedCostsMetrics,
    OtherPostIa => OtherMetrics,
}

/// Post-IA record, mirroring [`super::BaselineRecord`] variant for variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PostIaRecord {
    Productivity(ProductivityPostIa),
    AnalyticalCapacity(AnalyticalPostIa),
    RevenueIncrease(RevenuePostIa),
    MarginImprovement(MarginPostIa),
    RiskReduction(RiskPostIa),
    DecisionQuality(DecisionQualityPostIa),
    Speed(SpeedPostIa),
    Satisfaction(SatisfactionPostIa),
    RelatedCosts(RelatedCostsPostIa),
    Other(OtherPostIa),
}

impl PostIaRecord {
    /// Empty record for `indicator_type` with zeroed metrics.
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

    /// Same inputs as `other`, ignoring the derived metrics.
    pub fn same_inputs(&self, other: &PostIaRecord) -> bool {
        let mut left = self.clone();
        let mut right = other.clone();
        left.clear_metrics();
        right.clear_metrics();
        left == right
    }

    fn clear_metrics(&mut self) {
        match self {
            Self::Productivity(p) => p.metrics = Default::default(),
            Self::AnalyticalCapacity(p) => p.metrics = Default::default(),
            Self::RevenueIncrease(p) => p.metrics = Default::default(),
            Self::MarginImprovement(p) => p.metrics = Default::default(),
            Self::RiskReduction(p) => p.metrics = Default::default(),
            Self::DecisionQuality(p) => p.metrics = Default::default(),
            Self::Speed(p) => p.metrics = Default::default(),
            Self::Satisfaction(p) => p.metrics = Default::default(),
            Self::RelatedCosts(p) => p.metrics = Default::default(),
            Self::Other(p) => p.metrics = Default::default(),
        }
    }

    /// True while the inputs still equal the type's defaults.
    pub fn is_empty(&self) -> bool {
        self.same_inputs(&Self::default_for(self.indicator_type()))
    }
}
