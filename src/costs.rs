//! Cost aggregation.
//!
//! Recurring costs are converted between monthly and annual totals. One-off
//! costs never enter the recurring totals and are reported on their own.

use crate::core::numeric::{lenient, non_negative};
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recurrence {
    #[default]
    #[serde(alias = "mensal")]
    Monthly,
    #[serde(alias = "yearly", alias = "anual")]
    Annual,
    #[serde(alias = "one-off", alias = "once", alias = "unico")]
    OneOff,
}

impl Recurrence {
    pub fn label(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Annual => "annual",
            Self::OneOff => "one-off",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CostEntry {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub value: f64,
    pub recurrence: Recurrence,
}

impl CostEntry {
    pub fn new(name: impl Into<String>, value: f64, recurrence: Recurrence) -> Self {
        let name = name.into();
        Self {
            id: name.to_lowercase().replace(' ', "-"),
            name,
            value,
            recurrence,
        }
    }

    pub fn monthly_equivalent(&self) -> f64 {
        match self.recurrence {
            Recurrence::Monthly => non_negative(self.value),
            Recurrence::Annual => non_negative(self.value) / 12.0,
            Recurrence::OneOff => 0.0,
        }
    }

    pub fn annual_equivalent(&self) -> f64 {
        match self.recurrence {
            Recurrence::Monthly => non_negative(self.value) * 12.0,
            Recurrence::Annual => non_negative(self.value),
            Recurrence::OneOff => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CostSummary {
    pub total_monthly: f64,
    pub total_annual: f64,
    pub one_off_total: f64,
}

impl Add for CostSummary {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            total_monthly: self.total_monthly + other.total_monthly,
            total_annual: self.total_annual + other.total_annual,
            one_off_total: self.one_off_total + other.one_off_total,
        }
    }
}

impl Sum for CostSummary {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

pub fn total_monthly(costs: &[CostEntry]) -> f64 {
    costs.iter().map(CostEntry::monthly_equivalent).sum()
}

pub fn total_annual(costs: &[CostEntry]) -> f64 {
    costs.iter().map(CostEntry::annual_equivalent).sum()
}

pub fn one_off_total(costs: &[CostEntry]) -> f64 {
    costs
        .iter()
        .filter(|c| c.recurrence == Recurrence::OneOff)
        .map(|c| non_negative(c.value))
        .sum()
}

pub fn summarize(costs: &[CostEntry]) -> CostSummary {
    CostSummary {
        total_monthly: total_monthly(costs),
        total_annual: total_annual(costs),
        one_off_total: one_off_total(costs),
    }
}
