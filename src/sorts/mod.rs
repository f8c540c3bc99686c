//! The competing sort implementations.
//!
//! Every algorithm is a pure function of an owned input and optional known
//! bounds, returning the sorted values together with a self-reported
//! iteration count. What one "iteration" means differs per algorithm, so the
//! counts only compare growth for the same algorithm across input sizes.

use std::{fmt, mem::size_of};

use thiserror::Error;

pub mod bucket;
pub mod counting;
pub mod identity;
pub mod insertion;
pub mod merge;
pub mod selection;

/// Memory a bounded sort may spend on its frequency table or bucket array.
pub const MAX_TABLE_BYTES: u64 = 1 << 30;

/// Inclusive value bounds handed to the bounded sorts.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
}

impl Bounds {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SortOutcome {
    pub sorted: Vec<i64>,
    pub iterations: u64,
}

impl SortOutcome {
    pub fn new(sorted: Vec<i64>, iterations: u64) -> Self {
        Self { sorted, iterations }
    }
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum SortError {
    #[error("bounds are inverted: min {min} > max {max}")]
    InvertedBounds { min: i64, max: i64 },
    #[error("value {value} lies outside bounds [{min}, {max}]")]
    OutOfBounds { value: i64, min: i64, max: i64 },
    #[error("{slots} table slots requested, limit is {limit}")]
    TableTooLarge { slots: u64, limit: u64 },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Algorithm {
    /// Returns its input untouched. Negative control for the validator.
    ErrorTest,
    Selection,
    Insertion,
    Counting,
    ClassicMerge,
    PureBucket,
}

impl Algorithm {
    /// Submission order used by the harness and the report.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::ErrorTest,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Counting,
        Algorithm::ClassicMerge,
        Algorithm::PureBucket,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::ErrorTest => "errorTestSort",
            Algorithm::Selection => "selectionSort",
            Algorithm::Insertion => "insertionSort",
            Algorithm::Counting => "countingSort",
            Algorithm::ClassicMerge => "classicMergeSort",
            Algorithm::PureBucket => "pureBucketSort",
        }
    }

    /// `true` for the identity sort, which is not expected to sort.
    pub const fn is_reference(self) -> bool {
        matches!(self, Algorithm::ErrorTest)
    }

    pub fn sort(self, input: Vec<i64>, bounds: Option<Bounds>) -> Result<SortOutcome, SortError> {
        match self {
            Algorithm::ErrorTest => Ok(identity::sort(input)),
            Algorithm::Selection => Ok(selection::sort(input)),
            Algorithm::Insertion => Ok(insertion::sort(input)),
            Algorithm::Counting => counting::sort(input, bounds),
            Algorithm::ClassicMerge => Ok(merge::sort(input)),
            Algorithm::PureBucket => bucket::sort(input, bounds),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolves the bounds a bounded sort works with.
///
/// Supplied bounds are checked against every value without counting work.
/// Missing bounds are inferred by a scan that costs one iteration per
/// element. Returns `None` only for an empty input without bounds.
pub(crate) fn resolve_bounds(
    input: &[i64],
    bounds: Option<Bounds>,
    iterations: &mut u64,
) -> Result<Option<Bounds>, SortError> {
    if let Some(b) = bounds {
        if b.min > b.max {
            return Err(SortError::InvertedBounds {
                min: b.min,
                max: b.max,
            });
        }
        if let Some(&value) = input.iter().find(|&&v| !b.contains(v)) {
            return Err(SortError::OutOfBounds {
                value,
                min: b.min,
                max: b.max,
            });
        }
        return Ok(Some(b));
    }

    let Some(&first) = input.first() else {
        return Ok(None);
    };
    let mut found = Bounds::new(first, first);
    for &value in input {
        found.min = found.min.min(value);
        found.max = found.max.max(value);
        *iterations += 1;
    }
    Ok(Some(found))
}

/// Number of `width`-wide slots of type `T` needed to cover `bounds`.
///
/// Fails before anything is allocated when the slots would not fit in
/// [`MAX_TABLE_BYTES`].
pub(crate) fn table_slots<T>(bounds: Bounds, width: u64) -> Result<usize, SortError> {
    debug_assert!(width > 0);
    let limit = slot_limit::<T>();
    let slots = (bounds.max.abs_diff(bounds.min) / width)
        .checked_add(1)
        .unwrap_or(u64::MAX);
    if slots > limit {
        return Err(SortError::TableTooLarge { slots, limit });
    }
    Ok(slots as usize)
}

/// Most slots of type `T` that fit in [`MAX_TABLE_BYTES`].
pub fn slot_limit<T>() -> u64 {
    MAX_TABLE_BYTES / (size_of::<T>().max(1) as u64)
}

/// Offset of `value` above `min`, used to index tables and buckets.
#[inline]
pub(crate) fn offset(value: i64, min: i64) -> u64 {
    debug_assert!(value >= min);
    value.abs_diff(min)
}
