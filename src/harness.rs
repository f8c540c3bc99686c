//! Fan-out / fan-in execution of the sort suite.
//!
//! Every algorithm gets its own copy of the shared dataset and runs as an
//! independent blocking task. Tasks report their own statistics; the harness
//! joins them in submission order and only then folds the records into one
//! immutable [`Statistics`] map.

use std::{any::Any, sync::Arc, time::Instant};

use serde::{ser::SerializeMap, Serialize, Serializer};
use tokio::task::{self, JoinError};
use tracing::{debug, info};

use crate::{
    sorts::{Algorithm, Bounds, SortError},
    Error, Result,
};

/// Per-algorithm numbers, keyed by the algorithm name when serialized.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmStats {
    #[serde(skip)]
    pub algorithm: Algorithm,
    pub initial_array_size: usize,
    pub elapsed_time_ms: u64,
    pub iteration_count: u64,
    pub sorted_array_size: usize,
}

impl AlgorithmStats {
    #[inline]
    pub fn name(&self) -> &'static str {
        self.algorithm.name()
    }

    #[inline]
    pub fn size_preserved(&self) -> bool {
        self.initial_array_size == self.sorted_array_size
    }
}

/// Output of one algorithm over its private copy of the dataset.
#[derive(Clone, Debug)]
pub struct AlgorithmRun {
    pub algorithm: Algorithm,
    pub sorted: Vec<i64>,
    pub stats: AlgorithmStats,
}

/// One entry per attempted algorithm, in submission order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Statistics(Vec<AlgorithmStats>);

impl Statistics {
    pub fn from_runs(runs: &[AlgorithmRun]) -> Self {
        Self(runs.iter().map(|run| run.stats.clone()).collect())
    }

    pub fn get(&self, name: &str) -> Option<&AlgorithmStats> {
        self.0.iter().find(|s| s.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AlgorithmStats> + '_ {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Statistics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for stats in &self.0 {
            map.serialize_entry(stats.name(), stats)?;
        }
        map.end()
    }
}

/// Everything the harness produced, ready for validation and reporting.
#[derive(Clone, Debug)]
pub struct Comparison {
    pub dataset: Arc<[i64]>,
    pub runs: Vec<AlgorithmRun>,
    pub statistics: Statistics,
}

impl Comparison {
    pub fn runs(&self) -> &[AlgorithmRun] {
        &self.runs
    }
}

pub struct Harness {
    dataset: Arc<[i64]>,
    algorithms: Vec<Algorithm>,
    bounds: Option<Bounds>,
}

impl Harness {
    /// Harness over `dataset` running the full suite with inferred bounds.
    pub fn new(dataset: impl Into<Arc<[i64]>>) -> Self {
        Self {
            dataset: dataset.into(),
            algorithms: Algorithm::ALL.to_vec(),
            bounds: None,
        }
    }

    /// Restricts the run to `algorithms`. Repeats are dropped so every name
    /// keys exactly one statistics entry.
    pub fn with_algorithms(mut self, algorithms: impl IntoIterator<Item = Algorithm>) -> Self {
        self.algorithms.clear();
        for algorithm in algorithms {
            if !self.algorithms.contains(&algorithm) {
                self.algorithms.push(algorithm);
            }
        }
        self
    }

    /// Hands known inclusive bounds to the bounded sorts.
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Runs every algorithm and waits for all of them.
    ///
    /// The first failure in submission order aborts the comparison.
    pub async fn run(self) -> Result<Comparison> {
        info!(
            algorithms = self.algorithms.len(),
            values = self.dataset.len(),
            "dispatching sorts"
        );

        let handles: Vec<_> = self
            .algorithms
            .iter()
            .map(|&algorithm| {
                let dataset = Arc::clone(&self.dataset);
                let bounds = self.bounds;
                let handle = task::spawn_blocking(move || run_one(algorithm, &dataset, bounds));
                (algorithm, handle)
            })
            .collect();

        let mut runs = Vec::with_capacity(handles.len());
        for (algorithm, handle) in handles {
            let run = handle
                .await
                .map_err(|err| Error::TaskFailed {
                    algorithm: algorithm.name(),
                    reason: describe_join_error(err),
                })?
                .map_err(|source| Error::Sort {
                    algorithm: algorithm.name(),
                    source,
                })?;
            runs.push(run);
        }

        let statistics = Statistics::from_runs(&runs);
        info!(completed = runs.len(), "all sorts finished");
        Ok(Comparison {
            dataset: self.dataset,
            runs,
            statistics,
        })
    }
}

/// Times a single algorithm over a fresh copy of `dataset`.
///
/// The copy is made before the clock starts. Elapsed time is truncated to
/// whole milliseconds.
pub fn run_one(
    algorithm: Algorithm,
    dataset: &[i64],
    bounds: Option<Bounds>,
) -> Result<AlgorithmRun, SortError> {
    let input = dataset.to_vec();
    debug!(%algorithm, "sort started");

    let start = Instant::now();
    let outcome = algorithm.sort(input, bounds)?;
    let elapsed_time_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

    debug!(
        %algorithm,
        elapsed_time_ms,
        iterations = outcome.iterations,
        "sort finished"
    );

    let stats = AlgorithmStats {
        algorithm,
        initial_array_size: dataset.len(),
        elapsed_time_ms,
        iteration_count: outcome.iterations,
        sorted_array_size: outcome.sorted.len(),
    };
    Ok(AlgorithmRun {
        algorithm,
        sorted: outcome.sorted,
        stats,
    })
}

fn describe_join_error(err: JoinError) -> String {
    if err.is_panic() {
        let payload = err.into_panic();
        format!("panicked: {}", panic_message(payload.as_ref()))
    } else {
        err.to_string()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "unknown panic payload"
    }
}
