// Shared fixtures for roitrack integration tests
#![allow(dead_code)]

use roitrack::schema::{OtherBaseline, ProductivityBaseline, RiskBaseline};
use roitrack::{
    BaselineRecord, Frequency, FrequencyPeriod, Indicator, IndicatorType, Person, PostIaRecord,
    Project,
};
use std::path::PathBuf;

pub const PROJECT_ID: &str = "proj-1";

pub fn sample_project_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/sample_project.json")
}

pub fn person(id: &str, hourly_rate: f64, minutes: f64, per_day: f64) -> Person {
    Person {
        hourly_rate,
        time_spent_minutes: minutes,
        real_frequency: Frequency::new(per_day, FrequencyPeriod::Daily),
        ..Person::new(id, id)
    }
}

/// One analyst spending `before` then `after` minutes a day on the task.
pub fn productivity_indicator(id: &str, rate: f64, before: f64, after: f64) -> Indicator {
    let baseline = BaselineRecord::Productivity(ProductivityBaseline {
        people: vec![person("analyst", rate, before, 1.0)],
    });
    let mut indicator = Indicator::with_records(id, PROJECT_ID, id, baseline, None);
    indicator.edit_post_ia(|post| {
        if let PostIaRecord::Productivity(p) = post {
            p.people[0].time_spent_minutes = after;
        }
    });
    indicator
}

pub fn risk_indicator(id: &str) -> Indicator {
    let baseline = BaselineRecord::RiskReduction(RiskBaseline {
        current_probability: 20.0,
        impact: 100_000.0,
        mitigation_cost: 500.0,
    });
    let mut indicator = Indicator::with_records(id, PROJECT_ID, id, baseline, None);
    indicator.edit_post_ia(|post| {
        if let PostIaRecord::RiskReduction(p) = post {
            p.probability_with_ia = 5.0;
            p.mitigation_cost_with_ia = 200.0;
        }
    });
    indicator
}

/// Monetary "Other" indicator worth `annual` per year.
pub fn monetary_indicator(id: &str, annual: f64) -> Indicator {
    let baseline = BaselineRecord::Other(OtherBaseline {
        label: "Invoices".into(),
        unit: "EUR".into(),
        value_before: 500.0,
        ..Default::default()
    });
    let mut indicator = Indicator::with_records(id, PROJECT_ID, id, baseline, None);
    indicator.edit_post_ia(|post| {
        if let PostIaRecord::Other(p) = post {
            p.value_after = 500.0 + annual / 12.0;
            p.monetary = true;
        }
    });
    indicator
}

pub fn empty_indicator(id: &str, indicator_type: IndicatorType) -> Indicator {
    Indicator::new(id, PROJECT_ID, id, indicator_type)
}

pub fn project_with(indicators: Vec<Indicator>) -> Project {
    let mut project = Project::new(PROJECT_ID, "Back office automation");
    for indicator in indicators {
        project.add_indicator(indicator);
    }
    project
}

pub fn approx(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-6
}
