use std::collections::VecDeque;

use super::SortOutcome;

/// Top-down merge sort splitting at `len / 2`.
///
/// One iteration per split and one per element moved while merging.
pub fn sort(input: Vec<i64>) -> SortOutcome {
    let mut iterations = 0u64;
    let sorted = merge_sort(input, &mut iterations);
    SortOutcome::new(sorted, iterations)
}

fn merge_sort(mut values: Vec<i64>, iterations: &mut u64) -> Vec<i64> {
    if values.len() < 2 {
        return values;
    }
    let right = values.split_off(values.len() / 2);
    *iterations += 1;
    let left = merge_sort(values, iterations);
    let right = merge_sort(right, iterations);
    merge(left, right, iterations)
}

fn merge(left: Vec<i64>, right: Vec<i64>, iterations: &mut u64) -> Vec<i64> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = VecDeque::from(left);
    let mut right = VecDeque::from(right);

    while let (Some(&l), Some(&r)) = (left.front(), right.front()) {
        // left wins ties
        let next = if l <= r {
            left.pop_front()
        } else {
            right.pop_front()
        };
        out.extend(next);
        *iterations += 1;
    }
    for value in left.into_iter().chain(right) {
        out.push(value);
        *iterations += 1;
    }
    out
}
