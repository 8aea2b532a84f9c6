//! Period normalization.
//!
//! Every rate the engine compares is expressed per month. Two period
//! vocabularies exist because people and volumes were modelled separately:
//!
//! - [`FrequencyPeriod`] (how often a person performs a task): daily x30,
//!   weekly x4.33, monthly x1.
//! - [`VolumePeriod`] (how many analyses, decisions or deliveries happen):
//!   day x30, week x4, month x1, year x1/12.

use super::numeric::{lenient, non_negative};
use serde::{Deserialize, Serialize};

/// Anything that can be turned into a monthly multiplier.
pub trait Period: Copy {
    fn monthly_multiplier(self) -> f64;
}

/// Convert `quantity` per `period` into a monthly-equivalent quantity.
///
/// Negative or non-finite quantities count as zero.
pub fn to_monthly<P: Period>(quantity: f64, period: P) -> f64 {
    non_negative(quantity) * period.monthly_multiplier()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrequencyPeriod {
    #[serde(alias = "day", alias = "per_day")]
    Daily,
    #[serde(alias = "week", alias = "per_week")]
    Weekly,
    #[default]
    #[serde(alias = "month", alias = "per_month")]
    Monthly,
}

impl FrequencyPeriod {
    pub const DAYS_PER_MONTH: f64 = 30.0;
    pub const WEEKS_PER_MONTH: f64 = 4.33;

    pub fn label(self) -> &'static str {
        match self {
            Self::Daily => "per day",
            Self::Weekly => "per week",
            Self::Monthly => "per month",
        }
    }
}

impl Period for FrequencyPeriod {
    fn monthly_multiplier(self) -> f64 {
        match self {
            Self::Daily => Self::DAYS_PER_MONTH,
            Self::Weekly => Self::WEEKS_PER_MONTH,
            Self::Monthly => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumePeriod {
    #[serde(alias = "daily")]
    Day,
    #[serde(alias = "weekly")]
    Week,
    #[default]
    #[serde(alias = "monthly")]
    Month,
    #[serde(alias = "yearly", alias = "annual")]
    Year,
}

impl VolumePeriod {
    pub fn label(self) -> &'static str {
        match self {
            Self::Day => "per day",
            Self::Week => "per week",
            Self::Month => "per month",
            Self::Year => "per year",
        }
    }
}

impl Period for VolumePeriod {
    fn monthly_multiplier(self) -> f64 {
        match self {
            Self::Day => 30.0,
            Self::Week => 4.0,
            Self::Month => 1.0,
            Self::Year => 1.0 / 12.0,
        }
    }
}

/// How often a person performs a task.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Frequency {
    #[serde(deserialize_with = "lenient")]
    pub quantity: f64,
    pub period: FrequencyPeriod,
}

impl Frequency {
    pub fn new(quantity: f64, period: FrequencyPeriod) -> Self {
        Self { quantity, period }
    }

    pub fn monthly(&self) -> f64 {
        to_monthly(self.quantity, self.period)
    }
}

/// A throughput figure such as "40 decisions per week".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Volume {
    #[serde(deserialize_with = "lenient")]
    pub quantity: f64,
    pub period: VolumePeriod,
}

impl Volume {
    pub fn new(quantity: f64, period: VolumePeriod) -> Self {
        Self { quantity, period }
    }

    pub fn monthly(&self) -> f64 {
        to_monthly(self.quantity, self.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_multipliers_are_fixed() {
        assert_eq!(to_monthly(1.0, FrequencyPeriod::Daily), 30.0);
        assert_eq!(to_monthly(1.0, FrequencyPeriod::Weekly), 4.33);
        assert_eq!(to_monthly(1.0, FrequencyPeriod::Monthly), 1.0);
    }

    #[test]
    fn volume_multipliers_are_fixed() {
        assert_eq!(to_monthly(2.0, VolumePeriod::Day), 60.0);
        assert_eq!(to_monthly(2.0, VolumePeriod::Week), 8.0);
        assert_eq!(to_monthly(2.0, VolumePeriod::Month), 2.0);
        assert_eq!(to_monthly(24.0, VolumePeriod::Year), 2.0);
    }

    #[test]
    fn zero_and_invalid_quantities_yield_zero() {
        assert_eq!(to_monthly(0.0, FrequencyPeriod::Daily), 0.0);
        assert_eq!(to_monthly(-5.0, VolumePeriod::Week), 0.0);
        assert_eq!(to_monthly(f64::NAN, FrequencyPeriod::Weekly), 0.0);
    }

    #[test]
    fn periods_accept_both_vocabularies() {
        let daily: FrequencyPeriod = serde_json::from_str(r#""day""#).unwrap();
        assert_eq!(daily, FrequencyPeriod::Daily);
        let weekly: VolumePeriod = serde_json::from_str(r#""weekly""#).unwrap();
        assert_eq!(weekly, VolumePeriod::Week);
    }

    #[test]
    fn frequency_deserializes_string_quantity() {
        let freq: Frequency =
            serde_json::from_str(r#"{"quantity": "3", "period": "weekly"}"#).unwrap();
        assert!((freq.monthly() - 12.99).abs() < 1e-9);
    }
}
