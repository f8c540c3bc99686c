use tracing::warn;

use crate::{harness::AlgorithmRun, sorts::Algorithm};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Verdict {
    Passed,
    /// First adjacent pair where `next < previous`.
    Failed { previous: i64, next: i64 },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Validation {
    pub algorithm: Algorithm,
    pub verdict: Verdict,
}

impl Validation {
    #[inline]
    pub fn passed(&self) -> bool {
        self.verdict == Verdict::Passed
    }
}

/// Single pass over `values`, stopping at the first descent.
pub fn check_order(values: &[i64]) -> Verdict {
    let mut last: Option<i64> = None;
    for &value in values {
        match last {
            Some(previous) if value < previous => {
                return Verdict::Failed {
                    previous,
                    next: value,
                };
            }
            _ => last = Some(value),
        }
    }
    Verdict::Passed
}

pub fn validate(algorithm: Algorithm, values: &[i64]) -> Validation {
    let verdict = check_order(values);
    if let Verdict::Failed { previous, next } = verdict {
        warn!(%algorithm, previous, next, "output is not sorted");
    }
    Validation { algorithm, verdict }
}

/// One outcome per run, in the order the runs were submitted.
pub fn validate_all(runs: &[AlgorithmRun]) -> Vec<Validation> {
    runs.iter()
        .map(|run| validate(run.algorithm, &run.sorted))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivial_inputs_pass() {
        assert_eq!(check_order(&[]), Verdict::Passed);
        assert_eq!(check_order(&[42]), Verdict::Passed);
        assert_eq!(check_order(&[1, 1, 2, 2]), Verdict::Passed);
    }

    #[test]
    fn reports_first_descent_only() {
        assert_eq!(
            check_order(&[5, 3, 3, 1]),
            Verdict::Failed {
                previous: 5,
                next: 3
            }
        );
        assert_eq!(
            check_order(&[1, 4, 2, 0]),
            Verdict::Failed {
                previous: 4,
                next: 2
            }
        );
    }

    #[test]
    fn labels_with_algorithm() {
        let v = validate(Algorithm::ErrorTest, &[2, 1]);
        assert_eq!(v.algorithm, Algorithm::ErrorTest);
        assert!(!v.passed());
        assert!(validate(Algorithm::Counting, &[1, 2]).passed());
    }
}
