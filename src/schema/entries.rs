//! List entries carried by Baseline and Post-IA records.

use crate::core::numeric::{lenient, non_negative};
use crate::core::Frequency;
use serde::{Deserialize, Serialize};

/// Entries that keep a stable identity across Baseline and Post-IA.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Someone whose working time is measured by a Productivity indicator.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(deserialize_with = "lenient")]
    pub hourly_rate: f64,
    /// Minutes spent on one execution of the task.
    #[serde(deserialize_with = "lenient")]
    pub time_spent_minutes: f64,
    pub real_frequency: Frequency,
    pub desired_frequency: Frequency,
}

impl Person {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Hours per month at the real execution frequency.
    pub fn hours_per_month(&self) -> f64 {
        non_negative(self.time_spent_minutes) / 60.0 * self.real_frequency.monthly()
    }

    /// Hours per month if the task ran at the desired frequency.
    pub fn desired_hours_per_month(&self) -> f64 {
        non_negative(self.time_spent_minutes) / 60.0 * self.desired_frequency.monthly()
    }

    pub fn monthly_cost(&self) -> f64 {
        self.hours_per_month() * non_negative(self.hourly_rate)
    }
}

impl Keyed for Person {
    fn key(&self) -> &str {
        &self.id
    }
}

/// A tool or service whose running cost is tracked before automation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tool {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub monthly_cost: f64,
    #[serde(deserialize_with = "lenient")]
    pub other_costs: f64,
}

impl Tool {
    pub fn monthly_total(&self) -> f64 {
        non_negative(self.monthly_cost) + non_negative(self.other_costs)
    }
}

impl Keyed for Tool {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Post-IA view of a tool; adds the one-off cost of putting it in place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostIaTool {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub monthly_cost: f64,
    #[serde(deserialize_with = "lenient")]
    pub other_costs: f64,
    #[serde(deserialize_with = "lenient")]
    pub implementation_cost: f64,
}

impl PostIaTool {
    pub fn monthly_total(&self) -> f64 {
        non_negative(self.monthly_cost) + non_negative(self.other_costs)
    }
}

impl From<&Tool> for PostIaTool {
    fn from(tool: &Tool) -> Self {
        Self {
            id: tool.id.clone(),
            name: tool.name.clone(),
            monthly_cost: tool.monthly_cost,
            other_costs: tool.other_costs,
            implementation_cost: 0.0,
        }
    }
}

impl Keyed for PostIaTool {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Free-form observation attached to an `Other` indicator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QualitativeEntry {
    pub id: String,
    pub label: String,
    pub note: String,
}

impl Keyed for QualitativeEntry {
    fn key(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FrequencyPeriod;

    #[test]
    fn person_hours_follow_real_frequency() {
        let person = Person {
            hourly_rate: 50.0,
            time_spent_minutes: 60.0,
            real_frequency: Frequency::new(1.0, FrequencyPeriod::Daily),
            desired_frequency: Frequency::new(2.0, FrequencyPeriod::Daily),
            ..Person::new("p1", "Ana")
        };

        assert_eq!(person.hours_per_month(), 30.0);
        assert_eq!(person.desired_hours_per_month(), 60.0);
        assert_eq!(person.monthly_cost(), 1500.0);
    }

    #[test]
    fn negative_inputs_do_not_produce_negative_cost() {
        let person = Person {
            hourly_rate: -20.0,
            time_spent_minutes: 30.0,
            real_frequency: Frequency::new(4.0, FrequencyPeriod::Weekly),
            ..Person::default()
        };
        assert_eq!(person.monthly_cost(), 0.0);
    }

    #[test]
    fn post_tool_copies_running_costs_only() {
        let tool = Tool {
            id: "t1".into(),
            name: "OCR".into(),
            monthly_cost: 120.0,
            other_costs: 30.0,
        };
        let post = PostIaTool::from(&tool);
        assert_eq!(post.monthly_total(), 150.0);
        assert_eq!(post.implementation_cost, 0.0);
        assert_eq!(post.key(), "t1");
    }
}
