use rand::Rng;

use crate::{Error, Result};

pub const DEFAULT_LENGTH: usize = 10_001;
pub const DEFAULT_MIN: i64 = 0;
pub const DEFAULT_MAX: i64 = 10_000_000;

/// Shape of the random input: `length` values drawn from `[min, max)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DatasetSpec {
    pub length: usize,
    pub min: i64,
    pub max: i64,
}

impl Default for DatasetSpec {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}

impl DatasetSpec {
    pub fn new(length: usize, min: i64, max: i64) -> Result<Self> {
        let spec = Self { length, min, max };
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min >= self.max {
            return Err(Error::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    pub fn generate(&self) -> Result<Vec<i64>> {
        self.validate()?;
        Ok(generate(self.length, self.min, self.max))
    }
}

/// Draws `length` values uniformly from `[min, max)` using the thread-local RNG.
pub fn generate(length: usize, min: i64, max: i64) -> Vec<i64> {
    generate_with(&mut rand::thread_rng(), length, min, max)
}

/// Same as [`generate`] with a caller supplied source of randomness.
///
/// Each value is `min + trunc(u * (max - min))` for a continuous `u` in
/// `[0, 1)`. An empty or inverted range yields `min` for every slot.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, length: usize, min: i64, max: i64) -> Vec<i64> {
    if max <= min {
        return vec![min; length];
    }
    let span = max.abs_diff(min);
    (0..length)
        .map(|_| {
            let u: f64 = rng.gen();
            // f64 rounding on wide spans can land exactly on `span`
            let offset = ((u * span as f64) as u64).min(span - 1);
            min.wrapping_add(offset as i64)
        })
        .collect()
}
