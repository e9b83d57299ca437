//! Criterion benchmarks for the per-frame risk hot path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use physics_risk::{assess_ttc_risk, compute_physics_risk, PhysicsRiskConfig, TtcRiskConfig};

fn bench_physics_risk(c: &mut Criterion) {
    let cfg = PhysicsRiskConfig::default();
    c.bench_function("compute_physics_risk", |b| {
        b.iter(|| compute_physics_risk(black_box(Some(20.0)), black_box(Some(40.0)), &cfg))
    });
}

fn bench_physics_risk_missing_input(c: &mut Criterion) {
    let cfg = PhysicsRiskConfig::default();
    c.bench_function("compute_physics_risk_unknown", |b| {
        b.iter(|| compute_physics_risk(black_box(None), black_box(Some(40.0)), &cfg))
    });
}

fn bench_ttc_banding(c: &mut Criterion) {
    let cfg = TtcRiskConfig::default();
    c.bench_function("assess_ttc_risk", |b| {
        b.iter(|| assess_ttc_risk(black_box(Some(2.2)), &cfg))
    });
}

criterion_group!(
    benches,
    bench_physics_risk,
    bench_physics_risk_missing_input,
    bench_ttc_banding
);
criterion_main!(benches);
