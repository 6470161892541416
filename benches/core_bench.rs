use catheter_label::{
    continuous_points, requantize, to_pixel_path, Bspline2, PointSet, ReknotOptions, Topology,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::{IVec2, Vec2};
use std::hint::black_box;

fn build_wavy_knots(count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let x = i as f32 * 12.0;
            let y = 200.0 + (i as f32 * 0.7).sin() * 40.0;
            Vec2::new(x, y)
        })
        .collect()
}

fn bench_resynchronization(c: &mut Criterion) {
    let mut group = c.benchmark_group("resynchronization");

    for &count in &[10usize, 50usize] {
        let knots = build_wavy_knots(count);

        for topology in [Topology::Open, Topology::Closed] {
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", topology), count),
                &knots,
                |b, knots| {
                    b.iter(|| {
                        let mut curve = Bspline2::with_topology(topology);
                        curve
                            .set_points(PointSet::Knots, black_box(knots.iter().copied()))
                            .expect("Knoten setzen fehlgeschlagen");
                        black_box(curve.control_points().len())
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_requantize(c: &mut Criterion) {
    let mut curve = Bspline2::new();
    curve
        .set_points(PointSet::Knots, build_wavy_knots(12))
        .expect("Knoten setzen fehlgeschlagen");
    let options = ReknotOptions::default();

    c.bench_function("requantize_12_knots", |b| {
        b.iter(|| {
            let mut work = curve.clone();
            let report = requantize(&mut work, black_box(&options)).expect("Re-Knotting");
            black_box(report.iterations)
        })
    });
}

fn bench_rasterization(c: &mut Criterion) {
    let mut curve = Bspline2::new();
    curve
        .set_points(PointSet::Knots, build_wavy_knots(50))
        .expect("Knoten setzen fehlgeschlagen");
    let samples: Vec<IVec2> = curve
        .tessellate()
        .into_iter()
        .map(|p| p.round().as_ivec2())
        .collect();

    c.bench_function("to_pixel_path_50_knots", |b| {
        b.iter(|| black_box(to_pixel_path(black_box(&samples)).len()))
    });

    c.bench_function("continuous_points_50_knots", |b| {
        b.iter(|| black_box(continuous_points(black_box(&curve)).len()))
    });
}

criterion_group!(
    core_benches,
    bench_resynchronization,
    bench_requantize,
    bench_rasterization
);
criterion_main!(core_benches);
