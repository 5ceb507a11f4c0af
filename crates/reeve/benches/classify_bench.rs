//! Criterion benchmarks for the tetrahedron point classifier.
//!
//! Three query mixes: far-outside points (early exit on the first face),
//! interior points (all four planes), and boundary points (triangle fallback).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::Vector3;
use rand::Rng;
use reeve::api::{
    draw_barycentric_point, draw_tetrahedron, reeve_tetrahedron, ClassifyCfg, ReplayToken,
    TetDrawCfg,
};

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let cfg = ClassifyCfg::default();
    let tet = draw_tetrahedron(TetDrawCfg::default(), ReplayToken::new(17, 0)).unwrap();
    let mut rng = ReplayToken::new(17, 1).to_std_rng();

    let interior: Vec<Vector3<f64>> = (0..1024)
        .map(|_| draw_barycentric_point(&mut rng, &tet, 0.01))
        .collect();
    let outside: Vec<Vector3<f64>> = (0..1024)
        .map(|_| Vector3::new(rng.gen_range(20.0..30.0), rng.gen_range(20.0..30.0), 25.0))
        .collect();
    let boundary: Vec<Vector3<f64>> = (0..1024)
        .map(|i| {
            let vs = tet.vertices();
            let (a, b) = (vs[i % 4], vs[(i + 1) % 4]);
            let s: f64 = rng.gen();
            a + (b - a) * s
        })
        .collect();

    for (name, pts) in [
        ("interior", &interior),
        ("outside", &outside),
        ("boundary", &boundary),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), pts, |b, pts| {
            b.iter(|| {
                for &p in pts.iter() {
                    black_box(tet.classify_with(black_box(p), cfg));
                }
            })
        });
    }

    let reeve = reeve_tetrahedron(6).unwrap();
    group.bench_function("reeve_r6_edge_midpoint", |b| {
        b.iter(|| black_box(reeve.classify(black_box(Vector3::new(0.5, 0.5, 3.0)))))
    });
    group.finish();
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
