// Correlation analysis over whole projects
mod common;

use common::*;
use pretty_assertions::assert_eq;
use roitrack::correlation::analyze_project;
use roitrack::{
    pearson, AggregationConfig, CorrelationConfig, CorrelationStrength, CorrelationValue,
    CostEntry, Indicator, IndicatorType, Pairing, Recurrence,
};

fn with_license(mut indicator: Indicator, monthly: f64) -> Indicator {
    indicator.add_cost(CostEntry::new("License", monthly, Recurrence::Monthly));
    indicator
}

/// Same task at different hourly rates: costs before and after scale together.
fn scaled_productivity_project() -> Vec<Indicator> {
    [30.0, 45.0, 70.0]
        .iter()
        .enumerate()
        .map(|(i, &rate)| {
            let indicator = productivity_indicator(&format!("team-{i}"), rate, 60.0, 20.0);
            with_license(indicator, rate)
        })
        .collect()
}

#[test]
fn series_correlates_with_itself() {
    let series = [3.0, 7.5, 1.0, 12.0, 4.2];
    assert!((pearson(&series, &series) - 1.0).abs() < 1e-12);
}

#[test]
fn constant_series_has_no_correlation() {
    assert_eq!(pearson(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]), 0.0);
    assert_eq!(pearson(&[], &[]), 0.0);
    assert_eq!(pearson(&[1.0, 2.0], &[1.0]), 0.0);
}

#[test]
fn proportional_indicators_produce_strong_insights() {
    let project = project_with(scaled_productivity_project());
    let report = analyze_project(
        &project,
        &AggregationConfig::default(),
        &CorrelationConfig::default(),
    );

    let baseline = report
        .result(Pairing::BaselineVsPostIa)
        .expect("baseline pairing should run");
    assert!((baseline.value.magnitude() - 1.0).abs() < 1e-9);
    assert_eq!(baseline.strength, CorrelationStrength::VeryStrong);
    assert_eq!(baseline.sample_size, 3);

    let cost = report
        .result(Pairing::CostVsSaving)
        .expect("cost pairing should run");
    assert!(cost.value.magnitude() > 0.99);

    let pairings: Vec<Pairing> = report.insights.iter().map(|i| i.pairing).collect();
    assert!(pairings.contains(&Pairing::BaselineVsPostIa));
    assert!(pairings.contains(&Pairing::CostVsSaving));
    // Every team has one person: no variance, no insight.
    assert!(!pairings.contains(&Pairing::TeamSizeVsGain));
}

#[test]
fn small_projects_skip_every_pairing() {
    let project = project_with(vec![
        productivity_indicator("a", 40.0, 60.0, 30.0),
        risk_indicator("b"),
    ]);
    let report = analyze_project(
        &project,
        &AggregationConfig::default(),
        &CorrelationConfig::default(),
    );

    assert!(report.results.is_empty());
    assert!(report.insights.is_empty());
    assert_eq!(report.skipped.len(), Pairing::ALL.len());
    assert!(report.skipped.iter().all(|s| s.required == 3));
}

#[test]
fn uncomputable_indicators_are_not_sampled() {
    let mut indicators = scaled_productivity_project();
    indicators.push(empty_indicator("draft", IndicatorType::Speed));
    let project = project_with(indicators);

    let report = analyze_project(
        &project,
        &AggregationConfig::default(),
        &CorrelationConfig::default(),
    );
    let baseline = report
        .result(Pairing::BaselineVsPostIa)
        .expect("baseline pairing should run");
    assert_eq!(baseline.sample_size, 3);
}

#[test]
fn type_breakdown_groups_roi_by_type() {
    let mut indicators = scaled_productivity_project();
    indicators.push(with_license(risk_indicator("fraud-1"), 100.0));
    indicators.push(with_license(risk_indicator("fraud-2"), 200.0));
    let project = project_with(indicators);

    let report = analyze_project(
        &project,
        &AggregationConfig::default(),
        &CorrelationConfig::default(),
    );
    let result = report
        .result(Pairing::TypeVsRoi)
        .expect("type pairing should run");

    let CorrelationValue::Breakdown { eta, categories } = &result.value else {
        panic!("type pairing should produce a breakdown");
    };
    let types: Vec<IndicatorType> = categories.iter().map(|c| c.indicator_type).collect();
    assert_eq!(
        types,
        vec![IndicatorType::Productivity, IndicatorType::RiskReduction]
    );
    assert!((0.0..=1.0).contains(eta));
    assert!(report
        .insights
        .iter()
        .any(|i| i.pairing == Pairing::TypeVsRoi));
}

#[test]
fn raising_the_sample_size_skips_pairings() {
    let project = project_with(scaled_productivity_project());
    let config = CorrelationConfig {
        min_sample_size: 10,
        ..CorrelationConfig::default()
    };
    let report = analyze_project(&project, &AggregationConfig::default(), &config);

    assert!(report.results.is_empty());
    assert!(report.skipped.iter().all(|s| s.sample_size == 3));
}
