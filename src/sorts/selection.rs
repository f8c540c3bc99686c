use super::SortOutcome;

/// Repeatedly removes the first minimum of the unsorted remainder.
///
/// One iteration per element visited in each minimum search, so
/// `n + (n - 1) + ... + 1` in total.
pub fn sort(input: Vec<i64>) -> SortOutcome {
    let mut remaining = input;
    let mut sorted = Vec::with_capacity(remaining.len());
    let mut iterations = 0u64;

    while !remaining.is_empty() {
        let mut smallest = 0;
        for (i, &value) in remaining.iter().enumerate() {
            iterations += 1;
            if value < remaining[smallest] {
                smallest = i;
            }
        }
        sorted.push(remaining.remove(smallest));
    }
    SortOutcome::new(sorted, iterations)
}
