use criterion::{criterion_group, criterion_main, Criterion};
use roitrack::correlation::analyze;
use roitrack::schema::{ProductivityBaseline, RiskBaseline};
use roitrack::{
    AggregationConfig, BaselineRecord, CorrelationConfig, CostEntry, Frequency, FrequencyPeriod,
    Indicator, Person, PostIaRecord, ProductivityGainMode, Project, Recurrence,
};
use std::hint::black_box;

fn create_test_project(size: usize) -> Project {
    let mut project = Project::new("bench", "Benchmark project");

    for i in 0..size {
        let indicator = if i % 3 == 0 {
            risk_indicator(i)
        } else {
            productivity_indicator(i)
        };
        project.add_indicator(indicator);
    }
    project
}

fn productivity_indicator(i: usize) -> Indicator {
    let people = (0..5)
        .map(|p| Person {
            hourly_rate: 30.0 + (i % 7) as f64 * 5.0,
            time_spent_minutes: 30.0 + (p * 10) as f64,
            real_frequency: Frequency::new(1.0 + (p % 3) as f64, FrequencyPeriod::Daily),
            ..Person::new(format!("p{p}"), format!("Person {p}"))
        })
        .collect();
    let baseline = BaselineRecord::Productivity(ProductivityBaseline { people });

    let id = format!("prod-{i}");
    let mut indicator = Indicator::with_records(&id, "bench", &id, baseline, None);
    indicator.edit_post_ia(|post| {
        if let PostIaRecord::Productivity(p) = post {
            for person in &mut p.people {
                person.time_spent_minutes *= 0.4;
            }
        }
    });
    indicator.add_cost(CostEntry::new("License", 50.0 + i as f64, Recurrence::Monthly));
    indicator
}

fn risk_indicator(i: usize) -> Indicator {
    let baseline = BaselineRecord::RiskReduction(RiskBaseline {
        current_probability: 10.0 + (i % 20) as f64,
        impact: 50_000.0,
        mitigation_cost: 400.0,
    });

    let id = format!("risk-{i}");
    let mut indicator = Indicator::with_records(&id, "bench", &id, baseline, None);
    indicator.edit_post_ia(|post| {
        if let PostIaRecord::RiskReduction(p) = post {
            p.probability_with_ia /= 2.0;
            p.implementation_cost = 1_000.0 + i as f64;
        }
    });
    indicator
}

fn benchmark_sequential_aggregation(c: &mut Criterion) {
    let project = create_test_project(500);
    let config = AggregationConfig::sequential();

    c.bench_function("aggregate_sequential_500", |b| {
        b.iter(|| black_box(project.aggregate(black_box(&config))));
    });
}

fn benchmark_parallel_aggregation(c: &mut Criterion) {
    let project = create_test_project(500);
    let config = AggregationConfig {
        parallel_threshold: 1,
        ..AggregationConfig::default()
    };

    c.bench_function("aggregate_parallel_500", |b| {
        b.iter(|| black_box(project.aggregate(black_box(&config))));
    });
}

fn benchmark_gain_modes(c: &mut Criterion) {
    let project = create_test_project(200);

    for mode in [ProductivityGainMode::Weighted, ProductivityGainMode::Summed] {
        let config = AggregationConfig::with_mode(mode);
        c.bench_function(&format!("aggregate_gain_{mode:?}"), |b| {
            b.iter(|| black_box(project.aggregate(&config)));
        });
    }
}

fn benchmark_correlation(c: &mut Criterion) {
    let project = create_test_project(500);
    let outcomes = project.outcomes(&AggregationConfig::default());
    let config = CorrelationConfig::default();

    c.bench_function("correlation_500", |b| {
        b.iter(|| black_box(analyze(black_box(&outcomes), &config)));
    });
}

fn benchmark_recompute_all(c: &mut Criterion) {
    let project = create_test_project(200);

    c.bench_function("recompute_all_200", |b| {
        b.iter(|| {
            let mut copy = project.clone();
            copy.recompute_all();
            black_box(copy)
        });
    });
}

criterion_group!(
    benches,
    benchmark_sequential_aggregation,
    benchmark_parallel_aggregation,
    benchmark_gain_modes,
    benchmark_correlation,
    benchmark_recompute_all
);
criterion_main!(benches);
