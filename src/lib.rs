#![deny(clippy::uninlined_format_args)]
#![deny(clippy::to_string_in_format_args)]
//! Races a fixed suite of integer sorts over private copies of one random
//! dataset, validates every output and assembles a single report.

pub mod dataset;
pub mod error;
pub mod harness;
pub mod output;
pub mod report;
pub mod sorts;
pub mod validate;

pub use dataset::DatasetSpec;
pub use error::Error;
pub use harness::{AlgorithmRun, AlgorithmStats, Comparison, Harness, Statistics};
pub use report::Report;
pub use sorts::{Algorithm, Bounds, SortError, SortOutcome};
pub use validate::{Validation, Verdict};

/// Convenient result type used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
