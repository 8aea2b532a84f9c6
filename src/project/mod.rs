//! Projects and project-level aggregation.

pub mod aggregate;
pub mod outcome;

pub use aggregate::{aggregate, fold_outcomes, outcomes, ProjectAggregate, TypeBreakdown};
pub use outcome::{roi, IndicatorOutcome};

use crate::config::AggregationConfig;
use crate::indicator::Indicator;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub department: String,
    pub description: String,
    indicators: Vec<Indicator>,
}

impl Project {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    pub fn indicator(&self, id: &str) -> Option<&Indicator> {
        self.indicators.iter().find(|i| i.id() == id)
    }

    /// Mutable access for editing; [`Indicator`]'s own methods keep it consistent.
    pub fn indicator_mut(&mut self, id: &str) -> Option<&mut Indicator> {
        self.indicators.iter_mut().find(|i| i.id() == id)
    }

    /// Add `indicator`, replacing any indicator with the same id.
    ///
    /// Returns the replaced indicator.
    pub fn add_indicator(&mut self, mut indicator: Indicator) -> Option<Indicator> {
        indicator.set_project_id(&self.id);
        match self.indicators.iter().position(|i| i.id() == indicator.id()) {
            Some(index) => Some(std::mem::replace(&mut self.indicators[index], indicator)),
            None => {
                self.indicators.push(indicator);
                None
            }
        }
    }

    /// Remove an indicator together with its records and costs.
    pub fn remove_indicator(&mut self, id: &str) -> Option<Indicator> {
        let index = self.indicators.iter().position(|i| i.id() == id)?;
        Some(self.indicators.remove(index))
    }

    /// Re-derive every Post-IA record and re-attach indicators to this project.
    pub fn recompute_all(&mut self) {
        let project_id = self.id.clone();
        for indicator in &mut self.indicators {
            indicator.set_project_id(&project_id);
            indicator.refresh();
        }
    }

    pub fn outcomes(&self, config: &AggregationConfig) -> Vec<IndicatorOutcome> {
        outcomes(&self.indicators, config)
    }

    pub fn aggregate(&self, config: &AggregationConfig) -> ProjectAggregate {
        aggregate(&self.indicators, config)
    }
}
