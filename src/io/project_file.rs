//! Project files: a [`Project`] stored as JSON.
//!
//! Cached metrics in a file are ignored; every indicator is recomputed on
//! load.

use super::{read_file, write_file};
use crate::errors::Result;
use crate::project::Project;
use std::path::Path;
use tracing::{debug, info};

pub fn parse_project(contents: &str) -> Result<Project> {
    let mut project: Project = serde_json::from_str(contents)?;
    project.recompute_all();
    Ok(project)
}

pub fn load_project(path: &Path) -> Result<Project> {
    let contents = read_file(path)?;
    let project = parse_project(&contents)?;
    info!(
        path = %path.display(),
        project = %project.id,
        indicators = project.indicators().len(),
        "Loaded project"
    );
    Ok(project)
}

pub fn to_json(project: &Project) -> Result<String> {
    Ok(serde_json::to_string_pretty(project)?)
}

pub fn save_project(path: &Path, project: &Project) -> Result<()> {
    write_file(path, &to_json(project)?)?;
    debug!(path = %path.display(), "Saved project");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::IndicatorType;
    use crate::schema::PostIaRecord;
    use indoc::indoc;
    use tempfile::TempDir;

    const PROJECT: &str = indoc! {r#"
        {
          "id": "p1",
          "name": "Back office",
          "department": "Finance",
          "indicators": [
            {
              "id": "risk",
              "name": "Fraud checks",
              "indicator_type": "risk_reduction",
              "baseline": {"type": "risk_reduction", "current_probability": "20", "impact": 100000, "mitigation_cost": 500},
              "post_ia": {
                "type": "risk_reduction",
                "probability_with_ia": 5,
                "impact_with_ia": 100000,
                "mitigation_cost_with_ia": "200",
                "metrics": {"annual_benefit": 1}
              }
            }
          ]
        }
    "#};

    #[test]
    fn stale_metrics_are_recomputed_on_load() {
        let project = parse_project(PROJECT).unwrap();
        let indicator = project.indicator("risk").unwrap();

        assert_eq!(indicator.project_id(), "p1");
        assert_eq!(indicator.indicator_type(), IndicatorType::RiskReduction);
        let PostIaRecord::RiskReduction(p) = indicator.post_ia() else {
            panic!("wrong variant");
        };
        assert!((p.metrics().annual_benefit - 18_600.0).abs() < 1e-6);
    }

    #[test]
    fn saved_project_loads_back_identically() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("project.json");
        let project = parse_project(PROJECT).unwrap();

        save_project(&path, &project).unwrap();
        let reloaded = load_project(&path).unwrap();

        assert_eq!(reloaded, project);
    }

    #[test]
    fn unknown_record_tag_falls_back_to_defaults() {
        let json = r#"{"id":"p","indicators":[{"id":"i","baseline":{"type":"quality_score","x":1}}]}"#;
        let project = parse_project(json).unwrap();
        let indicator = project.indicator("i").unwrap();

        assert_eq!(indicator.indicator_type(), IndicatorType::Productivity);
        assert!(indicator.baseline().is_empty());
        assert!(indicator.post_ia().is_empty());
    }

    #[test]
    fn unreadable_post_ia_is_rebuilt_from_baseline() {
        let json = indoc! {r#"
            {"id": "p", "indicators": [{
              "id": "risk",
              "baseline": {"type": "risk_reduction", "current_probability": 20, "impact": 1000},
              "post_ia": {"type": "quality_score", "probability_with_ia": 5}
            }]}
        "#};
        let project = parse_project(json).unwrap();
        let indicator = project.indicator("risk").unwrap();

        assert_eq!(indicator.indicator_type(), IndicatorType::RiskReduction);
        let PostIaRecord::RiskReduction(p) = indicator.post_ia() else {
            panic!("wrong variant");
        };
        assert_eq!(p.probability_with_ia, 20.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_project("{\"id\": ").is_err());
    }
}
