#![allow(dead_code)]

use std::{sync::Mutex, time::Duration};

use once_cell::sync::Lazy;
use rand::{rngs::StdRng, SeedableRng};
use sortbench::dataset;

static BASE_SEED: Lazy<u64> = Lazy::new(|| {
    std::env::var("SORTBENCH_BENCH_SEED")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0x7d11_5eed_f065_cafe)
});

static RNG_COUNTER: Lazy<Mutex<u64>> = Lazy::new(|| Mutex::new(0));

pub fn usize_env(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

pub fn duration_env(name: &str, default_secs: f64) -> Duration {
    let secs = std::env::var(name)
        .ok()
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(default_secs);
    Duration::from_secs_f64(secs)
}

#[inline]
pub fn seeded_rng() -> StdRng {
    let mut guard = RNG_COUNTER.lock().unwrap();
    let seed = BASE_SEED.wrapping_add(*guard);
    *guard = guard.wrapping_add(1);
    StdRng::seed_from_u64(seed)
}

pub fn uniform(n: usize, min: i64, max: i64) -> Vec<i64> {
    dataset::generate_with(&mut seeded_rng(), n, min, max)
}

pub fn ascending(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

pub fn descending(n: usize) -> Vec<i64> {
    (0..n as i64).rev().collect()
}

/// Sizes to sweep, overridable with a single `SORTBENCH_BENCH_SIZE`.
pub fn sizes() -> Vec<usize> {
    match std::env::var("SORTBENCH_BENCH_SIZE") {
        Ok(_) => vec![usize_env("SORTBENCH_BENCH_SIZE", 10_001)],
        Err(_) => vec![100, 1_000, 10_001],
    }
}
