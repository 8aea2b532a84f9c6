use super::{
    insights, pearson, CategoryValue, CorrelationReport, CorrelationResult, CorrelationStrength,
    CorrelationValue, Insight, Pairing, SkippedPairing,
};
use crate::config::{AggregationConfig, CorrelationConfig};
use crate::core::numeric::ratio;
use crate::core::IndicatorType;
use crate::project::{IndicatorOutcome, Project};
use tracing::{debug, info_span, warn};

/// Run every pairing over `outcomes`. Only computable outcomes are sampled.
pub fn analyze(outcomes: &[IndicatorOutcome], config: &CorrelationConfig) -> CorrelationReport {
    let _span = info_span!("correlation_analysis", indicators = outcomes.len()).entered();

    let computable: Vec<&IndicatorOutcome> = outcomes.iter().filter(|o| o.computable).collect();
    let mut report = CorrelationReport::default();

    for pairing in Pairing::ALL {
        let sample = sample_for(pairing, &computable);
        if sample.len() < config.min_sample_size {
            debug!(
                pairing = pairing.label(),
                sample = sample.len(),
                required = config.min_sample_size,
                "Skipping pairing, not enough indicators"
            );
            report.skipped.push(SkippedPairing {
                pairing,
                sample_size: sample.len(),
                required: config.min_sample_size,
            });
            continue;
        }

        let (result, insight) = match pairing {
            Pairing::TypeVsRoi => type_vs_roi(&sample),
            _ => coefficient(pairing, &sample, config),
        };
        if let Some(message) = insight {
            report.insights.push(Insight { pairing, message });
        }
        report.results.push(result);
    }

    report
}

/// Convenience wrapper computing the outcomes first.
pub fn analyze_project(
    project: &Project,
    aggregation: &AggregationConfig,
    config: &CorrelationConfig,
) -> CorrelationReport {
    analyze(&project.outcomes(aggregation), config)
}

fn sample_for<'a>(pairing: Pairing, computable: &[&'a IndicatorOutcome]) -> Vec<&'a IndicatorOutcome> {
    computable
        .iter()
        .copied()
        .filter(|o| match pairing {
            // Gains only mean something where a team was recorded.
            Pairing::TeamSizeVsGain => o.team_size > 0.0,
            _ => true,
        })
        .collect()
}

fn series(pairing: Pairing, sample: &[&IndicatorOutcome]) -> (Vec<f64>, Vec<f64>) {
    sample
        .iter()
        .map(|o| match pairing {
            Pairing::BaselineVsPostIa => (o.baseline_magnitude, o.post_ia_magnitude),
            Pairing::CostVsSaving => (o.total_cost(), o.annual_saving),
            Pairing::TeamSizeVsGain => (o.team_size, o.productivity_gain_pct),
            Pairing::TimeSavedVsInvestment => (o.hours_saved_monthly, o.investment),
            Pairing::TypeVsRoi => (0.0, o.roi),
        })
        .unzip()
}

fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}

fn coefficient(
    pairing: Pairing,
    sample: &[&IndicatorOutcome],
    config: &CorrelationConfig,
) -> (CorrelationResult, Option<String>) {
    let (x, y) = series(pairing, sample);
    if is_constant(&x) || is_constant(&y) {
        warn!(pairing = pairing.label(), "Constant series, correlation reported as 0");
    }
    let r = pearson(&x, &y);

    let insight = match pairing {
        Pairing::BaselineVsPostIa if r >= config.baseline_post_threshold => {
            Some(insights::baseline_vs_post_ia(r))
        }
        Pairing::CostVsSaving if r.abs() >= config.cost_saving_threshold => {
            Some(insights::cost_vs_saving(r))
        }
        Pairing::TeamSizeVsGain if r.abs() >= config.team_size_threshold => {
            Some(insights::team_size_vs_gain(r))
        }
        Pairing::TimeSavedVsInvestment if r.abs() >= config.time_investment_threshold => {
            Some(insights::time_saved_vs_investment(r))
        }
        _ => None,
    };

    let result = CorrelationResult {
        pairing,
        label: pairing.label().to_string(),
        value: CorrelationValue::Coefficient { r },
        strength: CorrelationStrength::from_coefficient(r),
        sample_size: sample.len(),
    };
    (result, insight)
}

/// Group ROI by indicator type. Strength comes from the correlation ratio:
/// the share of ROI variance explained by the type.
fn type_vs_roi(sample: &[&IndicatorOutcome]) -> (CorrelationResult, Option<String>) {
    let categories: Vec<CategoryValue> = IndicatorType::ALL
        .iter()
        .filter_map(|&t| {
            let rois: Vec<f64> = sample
                .iter()
                .filter(|o| o.indicator_type == t)
                .map(|o| o.roi)
                .collect();
            if rois.is_empty() {
                return None;
            }
            Some(CategoryValue {
                indicator_type: t,
                count: rois.len(),
                average_roi: rois.iter().sum::<f64>() / rois.len() as f64,
            })
        })
        .collect();

    let eta = correlation_ratio(sample, &categories);

    let best = categories
        .iter()
        .max_by(|a, b| a.average_roi.total_cmp(&b.average_roi));
    let insight = match best {
        Some(best) if categories.len() >= 2 && best.average_roi > 0.0 => {
            Some(insights::best_type(best))
        }
        _ => None,
    };

    let result = CorrelationResult {
        pairing: Pairing::TypeVsRoi,
        label: Pairing::TypeVsRoi.label().to_string(),
        value: CorrelationValue::Breakdown { eta, categories },
        strength: CorrelationStrength::from_coefficient(eta),
        sample_size: sample.len(),
    };
    (result, insight)
}

fn correlation_ratio(sample: &[&IndicatorOutcome], categories: &[CategoryValue]) -> f64 {
    if sample.is_empty() {
        return 0.0;
    }
    let mean = sample.iter().map(|o| o.roi).sum::<f64>() / sample.len() as f64;
    let total: f64 = sample.iter().map(|o| (o.roi - mean).powi(2)).sum();
    let between: f64 = categories
        .iter()
        .map(|c| c.count as f64 * (c.average_roi - mean).powi(2))
        .sum();
    ratio(between, total).clamp(0.0, 1.0).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn outcome(t: IndicatorType, cost: f64, saving: f64, roi: f64) -> IndicatorOutcome {
        IndicatorOutcome {
            indicator_type: t,
            computable: true,
            annual_cost: cost,
            annual_saving: saving,
            roi,
            baseline_magnitude: saving * 2.0,
            post_ia_magnitude: saving,
            ..Default::default()
        }
    }

    fn sample() -> Vec<IndicatorOutcome> {
        vec![
            outcome(IndicatorType::Productivity, 1_000.0, 5_000.0, 400.0),
            outcome(IndicatorType::Productivity, 2_000.0, 9_000.0, 350.0),
            outcome(IndicatorType::RiskReduction, 3_000.0, 14_000.0, 366.0),
            outcome(IndicatorType::RevenueIncrease, 4_000.0, 21_000.0, 425.0),
        ]
    }

    #[test]
    fn small_projects_skip_every_pairing() {
        let outcomes = vec![outcome(IndicatorType::Speed, 1.0, 2.0, 100.0)];
        let report = analyze(&outcomes, &CorrelationConfig::default());

        assert!(report.results.is_empty());
        assert_eq!(report.skipped.len(), Pairing::ALL.len());
        assert_eq!(report.skipped[0].required, 3);
    }

    #[test]
    fn cost_and_saving_moving_together_produce_an_insight() {
        let report = analyze(&sample(), &CorrelationConfig::default());

        let result = report.result(Pairing::CostVsSaving).unwrap();
        assert_eq!(result.strength, CorrelationStrength::VeryStrong);
        assert!(report.insights.iter().any(|i| i.pairing == Pairing::CostVsSaving));
        assert!(report.insights.iter().any(|i| i.pairing == Pairing::BaselineVsPostIa));
    }

    #[test]
    fn type_breakdown_names_best_type() {
        let report = analyze(&sample(), &CorrelationConfig::default());

        let result = report.result(Pairing::TypeVsRoi).unwrap();
        let CorrelationValue::Breakdown { categories, .. } = &result.value else {
            panic!("expected a breakdown");
        };
        assert_eq!(categories.len(), 3);
        assert_eq!(categories[0].average_roi, 375.0);

        let insight = report
            .insights
            .iter()
            .find(|i| i.pairing == Pairing::TypeVsRoi)
            .unwrap();
        assert!(insight.message.starts_with("Revenue Increase"));
    }

    #[test]
    fn team_pairing_ignores_outcomes_without_team() {
        let report = analyze(&sample(), &CorrelationConfig::default());
        let skipped = report
            .skipped
            .iter()
            .find(|s| s.pairing == Pairing::TeamSizeVsGain)
            .unwrap();
        assert_eq!(skipped.sample_size, 0);
    }

    #[test]
    fn constant_series_never_produce_insights() {
        let outcomes: Vec<IndicatorOutcome> = (0..4)
            .map(|_| outcome(IndicatorType::Speed, 100.0, 100.0, 0.0))
            .collect();
        let report = analyze(&outcomes, &CorrelationConfig::default());

        assert!(report.insights.is_empty());
        for result in &report.results {
            assert_eq!(result.value.magnitude(), 0.0);
        }
    }

    #[test]
    fn uncomputable_outcomes_are_not_sampled() {
        let mut outcomes = sample();
        outcomes.truncate(2);
        outcomes.push(IndicatorOutcome::default());
        let report = analyze(&outcomes, &CorrelationConfig::default());
        assert!(report.results.is_empty());
    }
}
