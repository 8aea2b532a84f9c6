//! Correlation analysis across a project's indicators.
//!
//! [`pearson`] is the only statistic. The analyzer applies it to a fixed
//! set of pairings and turns strong relationships into insights.

pub mod analyzer;
pub mod insights;

pub use analyzer::{analyze, analyze_project};

use crate::core::IndicatorType;
use serde::Serialize;

/// Pearson correlation coefficient of two series.
///
/// Returns 0 when the series are empty, differ in length or when either
/// has zero variance.
pub fn pearson(x_values: &[f64], y_values: &[f64]) -> f64 {
    if x_values.is_empty() || x_values.len() != y_values.len() {
        return 0.0;
    }
    let n = x_values.len() as f64;

    let mean_x = x_values.iter().sum::<f64>() / n;
    let mean_y = y_values.iter().sum::<f64>() / n;

    let (covariance, variance_x, variance_y) = x_values
        .iter()
        .zip(y_values.iter())
        .map(|(x, y)| {
            let diff_x = x - mean_x;
            let diff_y = y - mean_y;
            (diff_x * diff_y, diff_x * diff_x, diff_y * diff_y)
        })
        .fold((0.0, 0.0, 0.0), |acc, (cov, var_x, var_y)| {
            (acc.0 + cov, acc.1 + var_x, acc.2 + var_y)
        });

    let denominator = (variance_x * variance_y).sqrt();
    if denominator == 0.0 || !denominator.is_finite() {
        return 0.0;
    }

    (covariance / denominator).clamp(-1.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationStrength {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl CorrelationStrength {
    pub fn from_coefficient(r: f64) -> Self {
        match r.abs() {
            a if a >= 0.8 => Self::VeryStrong,
            a if a >= 0.6 => Self::Strong,
            a if a >= 0.4 => Self::Moderate,
            a if a >= 0.2 => Self::Weak,
            _ => Self::VeryWeak,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::VeryWeak => "very weak",
            Self::Weak => "weak",
            Self::Moderate => "moderate",
            Self::Strong => "strong",
            Self::VeryStrong => "very strong",
        }
    }
}

impl std::fmt::Display for CorrelationStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The fixed relationships the analyzer looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Pairing {
    BaselineVsPostIa,
    CostVsSaving,
    TypeVsRoi,
    TeamSizeVsGain,
    TimeSavedVsInvestment,
}

impl Pairing {
    pub const ALL: [Pairing; 5] = [
        Pairing::BaselineVsPostIa,
        Pairing::CostVsSaving,
        Pairing::TypeVsRoi,
        Pairing::TeamSizeVsGain,
        Pairing::TimeSavedVsInvestment,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::BaselineVsPostIa => "Baseline vs Post-IA",
            Self::CostVsSaving => "Total cost vs annual saving",
            Self::TypeVsRoi => "Indicator type vs ROI",
            Self::TeamSizeVsGain => "Team size vs productivity gain",
            Self::TimeSavedVsInvestment => "Time saved vs investment",
        }
    }
}

/// Average ROI of one indicator type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryValue {
    pub indicator_type: IndicatorType,
    pub count: usize,
    pub average_roi: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CorrelationValue {
    Coefficient { r: f64 },
    /// Per-type averages; `eta` is the correlation ratio between type and ROI.
    Breakdown { eta: f64, categories: Vec<CategoryValue> },
}

impl CorrelationValue {
    /// The number strength is judged on.
    pub fn magnitude(&self) -> f64 {
        match self {
            Self::Coefficient { r } => *r,
            Self::Breakdown { eta, .. } => *eta,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationResult {
    pub pairing: Pairing,
    pub label: String,
    pub value: CorrelationValue,
    pub strength: CorrelationStrength,
    pub sample_size: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub pairing: Pairing,
    pub message: String,
}

/// A pairing that had too few usable indicators to run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedPairing {
    pub pairing: Pairing,
    pub sample_size: usize,
    pub required: usize,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CorrelationReport {
    pub results: Vec<CorrelationResult>,
    pub insights: Vec<Insight>,
    pub skipped: Vec<SkippedPairing>,
}

impl CorrelationReport {
    pub fn result(&self, pairing: Pairing) -> Option<&CorrelationResult> {
        self.results.iter().find(|r| r.pairing == pairing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_correlates_perfectly_with_itself() {
        let x = [3.0, 7.5, 1.0, 12.0, 4.2];
        assert!((pearson(&x, &x) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn inverse_series_is_minus_one() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [8.0, 6.0, 4.0, 2.0];
        assert!((pearson(&x, &y) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn constant_series_has_no_correlation() {
        assert_eq!(pearson(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]), 0.0);
        assert_eq!(pearson(&[1.0, 2.0, 3.0], &[0.0, 0.0, 0.0]), 0.0);
    }

    #[test]
    fn degenerate_inputs_return_zero() {
        assert_eq!(pearson(&[], &[]), 0.0);
        assert_eq!(pearson(&[1.0, 2.0], &[1.0]), 0.0);
        assert_eq!(pearson(&[4.0], &[9.0]), 0.0);
    }

    #[test]
    fn strength_buckets() {
        assert_eq!(CorrelationStrength::from_coefficient(0.85), CorrelationStrength::VeryStrong);
        assert_eq!(CorrelationStrength::from_coefficient(-0.8), CorrelationStrength::VeryStrong);
        assert_eq!(CorrelationStrength::from_coefficient(0.6), CorrelationStrength::Strong);
        assert_eq!(CorrelationStrength::from_coefficient(-0.45), CorrelationStrength::Moderate);
        assert_eq!(CorrelationStrength::from_coefficient(0.2), CorrelationStrength::Weak);
        assert_eq!(CorrelationStrength::from_coefficient(0.19), CorrelationStrength::VeryWeak);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn coefficient_is_bounded(
                pairs in prop::collection::vec((-1e6..1e6f64, -1e6..1e6f64), 0..40)
            ) {
                let (x, y): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
                let r = pearson(&x, &y);
                prop_assert!((-1.0..=1.0).contains(&r));
            }

            #[test]
            fn coefficient_is_symmetric(
                pairs in prop::collection::vec((-1e3..1e3f64, -1e3..1e3f64), 2..20)
            ) {
                let (x, y): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
                prop_assert!((pearson(&x, &y) - pearson(&y, &x)).abs() < 1e-9);
            }
        }
    }
}
