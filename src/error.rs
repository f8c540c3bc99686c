use thiserror::Error;

use crate::sorts::SortError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid value range: min {min} must be below max {max}")]
    InvalidRange { min: i64, max: i64 },

    #[error("{algorithm} failed: {source}")]
    Sort {
        algorithm: &'static str,
        #[source]
        source: SortError,
    },

    #[error("{algorithm} task did not complete: {reason}")]
    TaskFailed {
        algorithm: &'static str,
        reason: String,
    },

    #[error("failed to serialize statistics: {0}")]
    Serialize(#[from] serde_json::Error),
}
