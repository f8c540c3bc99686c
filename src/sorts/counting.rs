use std::iter;

use super::{offset, resolve_bounds, table_slots, Bounds, SortError, SortOutcome};

/// Tallies every value into a frequency table spanning `[min, max]` and
/// replays the table in ascending order.
///
/// Iterations: one per element of the bound scan (only when `bounds` is
/// `None`), one per table slot, one per tallied element and one per emitted
/// element.
pub fn sort(input: Vec<i64>, bounds: Option<Bounds>) -> Result<SortOutcome, SortError> {
    let mut iterations = 0u64;
    let Some(bounds) = resolve_bounds(&input, bounds, &mut iterations)? else {
        return Ok(SortOutcome::new(input, iterations));
    };

    let slots = table_slots::<usize>(bounds, 1)?;
    let mut frequency = vec![0usize; slots];
    iterations += slots as u64;

    for &value in &input {
        frequency[offset(value, bounds.min) as usize] += 1;
        iterations += 1;
    }

    let mut sorted = Vec::with_capacity(input.len());
    for (slot, &count) in frequency.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let value = bounds.min.wrapping_add(slot as i64);
        sorted.extend(iter::repeat(value).take(count));
        iterations += count as u64;
    }
    Ok(SortOutcome::new(sorted, iterations))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inferred_bounds_cost() {
        // scan 4 + slots 5 (1..=5) + tally 4 + emit 4
        let out = sort(vec![5, 3, 3, 1], None).unwrap();
        assert_eq!(out.sorted, [1, 3, 3, 5]);
        assert_eq!(out.iterations, 4 + 5 + 4 + 4);
    }

    #[test]
    fn supplied_bounds_skip_scan() {
        let out = sort(vec![5, 3, 3, 1], Some(Bounds::new(0, 9))).unwrap();
        assert_eq!(out.sorted, [1, 3, 3, 5]);
        assert_eq!(out.iterations, 10 + 4 + 4);
    }

    #[test]
    fn empty_with_bounds_still_builds_table() {
        let out = sort(Vec::new(), Some(Bounds::new(-2, 2))).unwrap();
        assert!(out.sorted.is_empty());
        assert_eq!(out.iterations, 5);
    }

    #[test]
    fn negative_values() {
        let out = sort(vec![-1, -10, 4, -10], None).unwrap();
        assert_eq!(out.sorted, [-10, -10, -1, 4]);
    }

    #[test]
    fn rejects_oversized_table() {
        let err = sort(vec![0, 1 << 40], None).unwrap_err();
        assert!(matches!(err, SortError::TableTooLarge { .. }));
    }
}
