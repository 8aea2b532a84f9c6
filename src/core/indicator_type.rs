use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// The closed set of indicator kinds.
///
/// Unknown tags deserialize (and parse) as [`IndicatorType::Productivity`],
/// which is also the variant registry's fallback entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorType {
    #[default]
    Productivity,
    AnalyticalCapacity,
    RevenueIncrease,
    MarginImprovement,
    RiskReduction,
    DecisionQuality,
    Speed,
    Satisfaction,
    RelatedCosts,
    Other,
}

impl IndicatorType {
    pub const ALL: [IndicatorType; 10] = [
        Self::Productivity,
        Self::AnalyticalCapacity,
        Self::RevenueIncrease,
        Self::MarginImprovement,
        Self::RiskReduction,
        Self::DecisionQuality,
        Self::Speed,
        Self::Satisfaction,
        Self::RelatedCosts,
        Self::Other,
    ];

    /// Stable snake_case tag used in records and configuration.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Productivity => "productivity",
            Self::AnalyticalCapacity => "analytical_capacity",
            Self::RevenueIncrease => "revenue_increase",
            Self::MarginImprovement => "margin_improvement",
            Self::RiskReduction => "risk_reduction",
            Self::DecisionQuality => "decision_quality",
            Self::Speed => "speed",
            Self::Satisfaction => "satisfaction",
            Self::RelatedCosts => "related_costs",
            Self::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Productivity => "Productivity",
            Self::AnalyticalCapacity => "Analytical Capacity",
            Self::RevenueIncrease => "Revenue Increase",
            Self::MarginImprovement => "Margin Improvement",
            Self::RiskReduction => "Risk Reduction",
            Self::DecisionQuality => "Decision Quality",
            Self::Speed => "Speed",
            Self::Satisfaction => "Satisfaction",
            Self::RelatedCosts => "Related Costs",
            Self::Other => "Other",
        }
    }

    /// Resolve a tag or display label, falling back to `Productivity`.
    ///
    /// Matching ignores case, spaces, hyphens and underscores, so
    /// `"Risk Reduction"`, `"risk-reduction"` and `"risk_reduction"` agree.
    pub fn from_tag(raw: &str) -> Self {
        let wanted = squash(raw);
        Self::ALL
            .into_iter()
            .find(|t| squash(t.tag()) == wanted)
            .unwrap_or_else(|| {
                tracing::debug!(tag = raw, "Unknown indicator type, using productivity");
                Self::Productivity
            })
    }
}

fn squash(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

impl<'de> Deserialize<'de> for IndicatorType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&raw))
    }
}

impl fmt::Display for IndicatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
