//! Benchmarks for the Euler step and the Magnus series.
//!
//! Run with: `cargo bench -p artik`

use std::hint::black_box;

use artik::{
    EulerIntegrator, Integrator, Model, ModelBuilder, SeriesOrder, Tolerance, Vec3, magnus_expansion,
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

/// A floating base carrying `n_arms` arms of spherical, revolute and cylindrical joints.
fn bench_model(n_arms: usize) -> Model {
    let mut builder = ModelBuilder::new().free("base");
    for i in 0..n_arms {
        builder = builder
            .spherical(&format!("shoulder{i}"))
            .revolute(&format!("elbow{i}"))
            .cylindrical(&format!("wrist{i}"));
    }
    builder.build()
}

fn bench_euler_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("euler_step");

    for &n_arms in &[1, 4, 16] {
        let model = bench_model(n_arms);
        let mut state = model.default_state();
        for (i, a) in state.alpha.iter_mut().enumerate() {
            *a = 0.1 * ((i % 7) as f64 - 3.0);
        }
        state.alpha_dot.fill(0.05);

        for (name, tolerance) in [("tight", Tolerance::tight()), ("loose", Tolerance::loose())] {
            let integrator = EulerIntegrator::with_tolerance(tolerance).expect("preset tolerances are valid");
            group.bench_with_input(BenchmarkId::new(name, model.nv()), &state, |b, state| {
                let mut s = state.clone();
                b.iter(|| integrator.integrate(&model, &mut s, black_box(1e-3)));
            });
        }
    }

    group.finish();
}

fn bench_magnus(c: &mut Criterion) {
    let w = Vec3::new(0.8, -0.6, 0.4);
    let wd = Vec3::new(-0.7, 0.5, 0.9);
    let tolerance = Tolerance::default();

    let mut group = c.benchmark_group("magnus_expansion");
    // constant velocity stops at two terms, the others at four and five
    let cases = [
        (SeriesOrder::Two, Vec3::zeros(), 1e-2),
        (SeriesOrder::Four, wd, 1e-6),
        (SeriesOrder::Five, wd, 1e-2),
    ];
    for (order, wd, step) in cases {
        assert_eq!(magnus_expansion(&w, &wd, step, &tolerance).order, order);
        group.bench_function(BenchmarkId::from_parameter(order.terms()), |b| {
            b.iter(|| magnus_expansion(black_box(&w), black_box(&wd), black_box(step), &tolerance));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_euler_step, bench_magnus);
criterion_main!(benches);
