use super::SortOutcome;

/// Grows a sorted vector, inserting each value before the first element that
/// is strictly greater. Equal values keep their arrival order.
pub fn sort(input: Vec<i64>) -> SortOutcome {
    let mut sorted: Vec<i64> = Vec::with_capacity(input.len());
    let mut iterations = 0u64;

    for value in input {
        let mut slot = sorted.len();
        for (i, &existing) in sorted.iter().enumerate() {
            iterations += 1;
            if value < existing {
                slot = i;
                break;
            }
        }
        sorted.insert(slot, value);
    }
    SortOutcome::new(sorted, iterations)
}
