use super::{offset, resolve_bounds, table_slots, Bounds, SortError, SortOutcome};

/// Width of the value range covered by one bucket.
pub const BUCKET_SIZE: u64 = 100;

/// Bucket a value lands in, counted from `min`.
#[inline]
pub fn bucket_index(value: i64, min: i64) -> usize {
    (offset(value, min) / BUCKET_SIZE) as usize
}

/// Number of buckets needed to cover `bounds`, limited by the memory the
/// bucket array itself would take.
pub fn bucket_count(bounds: Bounds) -> Result<usize, SortError> {
    table_slots::<Vec<i64>>(bounds, BUCKET_SIZE)
}

/// Scatters values into fixed width buckets, sorts each bucket with the
/// standard library sort and concatenates them in index order.
///
/// Iterations: the bound scan when `bounds` is `None`, then one per bucket
/// created, one per element bucketed and one per element gathered back.
///
/// An empty input returns before bounds are looked at, so it costs nothing
/// even with bounds supplied. Counting sort differs here and still builds
/// its table for supplied bounds.
pub fn sort(input: Vec<i64>, bounds: Option<Bounds>) -> Result<SortOutcome, SortError> {
    if input.is_empty() {
        return Ok(SortOutcome::new(input, 0));
    }
    let mut iterations = 0u64;
    let Some(bounds) = resolve_bounds(&input, bounds, &mut iterations)? else {
        return Ok(SortOutcome::new(input, iterations));
    };

    let count = bucket_count(bounds)?;
    let mut buckets: Vec<Vec<i64>> = Vec::with_capacity(count);
    for _ in 0..count {
        buckets.push(Vec::new());
        iterations += 1;
    }

    for &value in &input {
        buckets[bucket_index(value, bounds.min)].push(value);
        iterations += 1;
    }

    let mut sorted = input;
    sorted.clear();
    for mut bucket in buckets {
        bucket.sort_unstable();
        iterations += bucket.len() as u64;
        sorted.append(&mut bucket);
    }
    Ok(SortOutcome::new(sorted, iterations))
}
