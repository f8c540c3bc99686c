#![allow(dead_code)]

use rand::{rngs::StdRng, Rng, SeedableRng};
use sortbench::dataset;

pub const SEED: u64 = 0x7d11_5eed_f065_cafe;

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

pub fn uniform(n: usize, min: i64, max: i64) -> Vec<i64> {
    dataset::generate_with(&mut seeded_rng(), n, min, max)
}

pub fn descending(n: usize) -> Vec<i64> {
    (0..n as i64).rev().collect()
}

pub fn few_distinct(n: usize, distinct: i64) -> Vec<i64> {
    let mut rng = seeded_rng();
    (0..n).map(|_| rng.gen_range(0..distinct)).collect()
}

pub fn is_sorted(values: &[i64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

pub fn sorted_copy(values: &[i64]) -> Vec<i64> {
    let mut out = values.to_vec();
    out.sort_unstable();
    out
}
