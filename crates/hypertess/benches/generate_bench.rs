//! Criterion microbenches for tessellation generation and edge sampling.
//!
//! - Full generation for a few (p,q) at fixed depth.
//! - Edge sampling of random geodesics at the default spacing.
//! - Isometry shifts (the inner step of the layer walk).
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hypertess::disk::{Coordinate, Edge, DEFAULT_SPACING};
use hypertess::isometry::IsometryGroup;
use hypertess::{Tessellation, TilingConfig};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (p, q, layers) in [(7u32, 3u32, 3usize), (4, 5, 3), (5, 4, 3), (3, 7, 4)] {
        let cfg = TilingConfig::new(p, q).with_max_layers(layers);
        group.bench_function(BenchmarkId::new(format!("{{{p},{q}}}"), layers), |b| {
            b.iter(|| {
                let t = Tessellation::new(cfg).unwrap();
                criterion::black_box(t.tile_count())
            })
        });
    }
    group.finish();
}

fn bench_edges(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge");
    let mut rng = StdRng::seed_from_u64(42);
    let mut draw = move || {
        let r = rng.gen_range(0.0..0.95);
        let t = rng.gen_range(0.0..std::f64::consts::TAU);
        Coordinate::new(r * f64::cos(t), r * f64::sin(t))
    };
    group.bench_function(BenchmarkId::new("sample", DEFAULT_SPACING), |b| {
        b.iter_batched(
            || (draw(), draw()),
            |(a, z)| {
                let e = Edge::new(a, z, DEFAULT_SPACING);
                criterion::black_box(e.segments())
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_shift(c: &mut Criterion) {
    let g = IsometryGroup::new(7, 3);
    let start = g.edge_transforms()[0];
    c.bench_function("shift/{7,3}", |b| {
        b.iter(|| {
            let mut t = start;
            for k in 0..16 {
                t = g.shift(&t, if k % 2 == 0 { -1 } else { 2 }).unwrap();
            }
            criterion::black_box(t.apex_height())
        })
    });
}

criterion_group!(benches, bench_generate, bench_edges, bench_shift);
criterion_main!(benches);
