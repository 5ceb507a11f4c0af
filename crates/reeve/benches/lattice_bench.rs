//! Criterion benchmarks for lattice sweeps over Reeve tetrahedra.
//!
//! Sizes: r in {1, 5, 20} on Z_1 and Z_2. Run with `--features parallel` to
//! include the rayon sweep.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use reeve::api::{reeve_tetrahedron, tally, Bounds3, ClassifyCfg, Lattice};

fn bench_lattice(c: &mut Criterion) {
    let mut group = c.benchmark_group("lattice_tally");
    let cfg = ClassifyCfg::default();
    for &r in &[1u32, 5, 20] {
        let tet = reeve_tetrahedron(r).unwrap();
        let bounds = Bounds3::around(&tet, 1.5);
        for n in [1u32, 2] {
            let lat = Lattice::new(n).unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("seq_z{n}"), r),
                &r,
                |b, _| b.iter(|| black_box(tally(&tet, lat, &bounds, cfg))),
            );
            #[cfg(feature = "parallel")]
            group.bench_with_input(
                BenchmarkId::new(format!("par_z{n}"), r),
                &r,
                |b, _| b.iter(|| black_box(reeve::api::par_tally(&tet, lat, &bounds, cfg))),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_lattice);
criterion_main!(benches);
