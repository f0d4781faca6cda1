use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use exodash::orbit_geometry::{generate_orbit_coordinates, position_at, scale_path};

/// Dashboard resolution: 100 vertices per orbit
fn bench_default_resolution(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let samples = 1_000usize;

    c.bench_function("generate_orbit_coordinates/100_points", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| (rng.random_range(0.01..50.0), rng.random_range(0.0..0.9)))
                    .collect::<Vec<(f64, f64)>>()
            },
            |cases| {
                for (a, e) in cases {
                    black_box(generate_orbit_coordinates(
                        black_box(Some(a)),
                        black_box(Some(e)),
                        100,
                    ));
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// One animation frame of a system: sample each orbit at the current time, then scale.
fn bench_animation_frame(c: &mut Criterion) {
    let paths: Vec<_> = [0.0485, 0.1633, 0.432, 0.849, 1.046]
        .iter()
        .map(|a| generate_orbit_coordinates(Some(*a), Some(0.05), 100))
        .collect();
    let periods = [11.186, 37.426, 129.944, 289.8623, 384.843];

    c.bench_function("position_at/system_frame", |b| {
        let mut t = 0.0_f64;
        b.iter(|| {
            t += 0.016;
            for (path, period) in paths.iter().zip(periods) {
                black_box(position_at(black_box(path), t, period));
            }
        })
    });

    c.bench_function("scale_path/100_points", |b| {
        b.iter(|| scale_path(black_box(&paths[4]), black_box(320.0)))
    });
}

criterion_group!(benches, bench_default_resolution, bench_animation_frame);
criterion_main!(benches);
