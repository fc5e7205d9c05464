//! Compute and render cost of one comparison.
//!
//! Run: `cargo bench --bench compare`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use energy_compare::report::{build_document, render_console, render_csv, render_table};
use energy_compare::schema::{BaselineRecord, ScenarioRecord};
use energy_compare::{Comparison, Config, MeasurementSet};

fn measurements() -> MeasurementSet {
    MeasurementSet::from_records(
        Some(BaselineRecord {
            energy_kwh: Some(0.01),
            duration_seconds: 100.0,
        }),
        Some(ScenarioRecord {
            total_energy_kwh: Some(0.02),
            total_requests: 50_000,
            duration_seconds: 50.0,
        }),
        Some(ScenarioRecord {
            total_energy_kwh: Some(0.012),
            total_requests: 50_000,
            duration_seconds: 50.0,
        }),
    )
}

fn bench_compute(c: &mut Criterion) {
    let set = measurements();
    c.bench_function("comparison/compute", |b| {
        b.iter(|| Comparison::compute(black_box(&set)))
    });
}

fn bench_render(c: &mut Criterion) {
    let set = measurements();
    let config = Config::new("results");
    let comparison = Comparison::compute(&set);

    c.bench_function("comparison/render_csv", |b| {
        b.iter(|| render_csv(&render_table(&config, black_box(&comparison))))
    });
    c.bench_function("comparison/render_json", |b| {
        b.iter(|| {
            let doc = build_document(&config, &set, black_box(&comparison));
            serde_json::to_string_pretty(&doc)
        })
    });
    c.bench_function("comparison/render_console", |b| {
        b.iter(|| render_console(&config, black_box(&comparison)))
    });
}

criterion_group!(benches, bench_compute, bench_render);
criterion_main!(benches);
