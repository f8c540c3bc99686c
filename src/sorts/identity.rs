use super::SortOutcome;

/// Hands the input back untouched with zero iterations.
pub fn sort(input: Vec<i64>) -> SortOutcome {
    SortOutcome::new(input, 0)
}
