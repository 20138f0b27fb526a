use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pocketsky::constants::{KEPLER_MAX_ITERATIONS, KEPLER_TOL_MOON, KEPLER_TOL_PLANET};
use pocketsky::kepler::solve_kepler;

/// Uniform random in [0, 2π)
#[inline]
fn rand_angle(rng: &mut StdRng) -> f64 {
    rng.random::<f64>() * std::f64::consts::TAU
}

fn random_cases(
    rng: &mut StdRng,
    samples: usize,
    e_range: std::ops::Range<f64>,
) -> Vec<(f64, f64)> {
    (0..samples)
        .map(|_| (rand_angle(rng), rng.random_range(e_range.clone())))
        .collect()
}

/// Solar-system regime of the analytic model: e ∈ [0, 0.1)
fn bench_planetary(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let samples = 10_000usize;

    c.bench_function("solve_kepler/planetary_e<0.1", |b| {
        b.iter_batched(
            || random_cases(&mut rng, samples, 0.0..0.1),
            |cases| {
                for (m, e) in cases {
                    let ecc_anom = solve_kepler(
                        black_box(m),
                        black_box(e),
                        KEPLER_TOL_PLANET,
                        KEPLER_MAX_ITERATIONS,
                    )
                    .unwrap();
                    black_box(ecc_anom);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// High eccentricity, still elliptic: e ∈ [0.7, 0.9)
fn bench_high_e(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xBADF00D);
    let samples = 10_000usize;

    c.bench_function("solve_kepler/high_e_0.7..0.9", |b| {
        b.iter_batched(
            || random_cases(&mut rng, samples, 0.7..0.9),
            |cases| {
                for (m, e) in cases {
                    let _ = solve_kepler(
                        black_box(m),
                        black_box(e),
                        KEPLER_TOL_PLANET,
                        KEPLER_MAX_ITERATIONS,
                    );
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Lunar orbit, looser tolerance
fn bench_moon(c: &mut Criterion) {
    let m = 4.2_f64;
    let e = 0.0549_f64;

    c.bench_function("solve_kepler/moon", |b| {
        b.iter(|| {
            let ecc_anom = solve_kepler(
                black_box(m),
                black_box(e),
                KEPLER_TOL_MOON,
                KEPLER_MAX_ITERATIONS,
            );
            black_box(ecc_anom.ok());
        })
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_planetary, bench_high_e, bench_moon
);
criterion_main!(benches);
