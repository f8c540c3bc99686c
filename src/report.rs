//! Final, write-once report.
//!
//! The text form is the unsorted dataset under `--Unsorted--`, then each
//! algorithm's output under `--<name>--`, one value per line, followed by
//! the pretty-printed statistics. Nothing here touches the filesystem or the
//! terminal; see [`crate::output`] for that.

use std::{fmt, sync::Arc};

use crate::{
    harness::{AlgorithmRun, Comparison, Statistics},
    validate::Validation,
    Result,
};

#[derive(Clone, Debug)]
pub struct Report {
    dataset: Arc<[i64]>,
    runs: Vec<AlgorithmRun>,
    statistics: Statistics,
    validations: Vec<Validation>,
    statistics_json: String,
}

impl Report {
    pub fn build(comparison: Comparison, validations: Vec<Validation>) -> Result<Self> {
        let statistics_json = serde_json::to_string_pretty(&comparison.statistics)?;
        Ok(Self {
            dataset: comparison.dataset,
            runs: comparison.runs,
            statistics: comparison.statistics,
            validations,
            statistics_json,
        })
    }

    pub fn dataset(&self) -> &[i64] {
        &self.dataset
    }

    pub fn runs(&self) -> &[AlgorithmRun] {
        &self.runs
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn validations(&self) -> &[Validation] {
        &self.validations
    }

    /// Pretty-printed statistics map.
    pub fn statistics_json(&self) -> &str {
        &self.statistics_json
    }

    /// Runs whose output failed validation.
    pub fn failures(&self) -> impl Iterator<Item = &Validation> + '_ {
        self.validations.iter().filter(|v| !v.passed())
    }

    pub fn summary(&self) -> String {
        format!("final stats: {}", self.statistics_json)
    }

    /// Writes the text form into `out`.
    pub fn render<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "--Unsorted--")?;
        write_values(out, &self.dataset)?;
        for run in &self.runs {
            write!(out, "\n\n--{}--\n", run.algorithm)?;
            write_values(out, &run.sorted)?;
        }
        out.write_str(&self.statistics_json)
    }

    pub fn to_text(&self) -> String {
        let values = self.dataset.len() + self.runs.iter().map(|r| r.sorted.len()).sum::<usize>();
        let mut text = String::with_capacity(values * 9 + self.statistics_json.len());
        // writing into a String cannot fail
        let _ = self.render(&mut text);
        text
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

fn write_values<W: fmt::Write>(out: &mut W, values: &[i64]) -> fmt::Result {
    for value in values {
        writeln!(out, "{value}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{harness::run_one, sorts::Algorithm, validate::validate_all};

    fn report_for(dataset: Vec<i64>, algorithms: &[Algorithm]) -> Report {
        let dataset: Arc<[i64]> = dataset.into();
        let runs: Vec<_> = algorithms
            .iter()
            .map(|&a| run_one(a, &dataset, None).unwrap())
            .collect();
        let validations = validate_all(&runs);
        let statistics = Statistics::from_runs(&runs);
        Report::build(
            Comparison {
                dataset,
                runs,
                statistics,
            },
            validations,
        )
        .unwrap()
    }

    #[test]
    fn text_layout() {
        let report = report_for(vec![2, 1], &[Algorithm::ErrorTest, Algorithm::Insertion]);
        let text = report.to_text();
        let expected_head = "--Unsorted--\n2\n1\n\n\n--errorTestSort--\n2\n1\n\n\n--insertionSort--\n1\n2\n{";
        assert!(text.starts_with(expected_head), "{text}");
        assert!(text.ends_with(report.statistics_json()));
        assert!(report.statistics_json().contains("\n  \"errorTestSort\": {"));
    }

    #[test]
    fn render_into_any_writer() {
        let report = report_for(vec![3, 1, 2], &[Algorithm::ClassicMerge]);
        let mut buf = String::new();
        report.render(&mut buf).unwrap();
        assert!(buf.starts_with("--Unsorted--\n3\n1\n2\n\n\n--classicMergeSort--\n1\n2\n3\n{"));
        assert_eq!(buf, report.to_text());
        assert_eq!(buf, report.to_string());
    }

    #[test]
    fn failures_and_summary() {
        let report = report_for(vec![5, 3, 3, 1], &Algorithm::ALL);
        let failed: Vec<_> = report.failures().map(|v| v.algorithm).collect();
        assert_eq!(failed, [Algorithm::ErrorTest]);
        assert!(report.summary().starts_with("final stats: {"));
        assert_eq!(report.statistics().len(), 6);
        assert_eq!(report.runs().len(), 6);
        assert_eq!(report.dataset(), [5, 3, 3, 1]);
    }
}
