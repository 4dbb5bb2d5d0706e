//! Integrator step throughput on the reference 120×120 grid.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ripple_core::GridPos;
use ripple_grid::FieldGrid;
use ripple_sim::WaveIntegrator;

fn bench_step(c: &mut Criterion) {
    let integrator = WaveIntegrator::builder()
        .wave_speed(3.0)
        .time_step(0.1)
        .damping(0.995)
        .build()
        .unwrap();

    c.bench_function("integrate_120x120", |b| {
        let mut grid = FieldGrid::new(120).unwrap();
        grid.inject_span(GridPos::new(60, 60), 5).unwrap();
        b.iter(|| {
            integrator.step(black_box(&mut grid)).unwrap();
        });
    });
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
