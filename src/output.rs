//! Console and file sinks for a finished [`Report`].

use std::{fs, io, path::Path};

use colored::Colorize;
use tracing::{error, info};

use crate::{
    report::Report,
    validate::{Validation, Verdict},
};

/// Where the binary stores its report, relative to the working directory.
pub const RESULTS_PATH: &str = "results.log";

pub fn write_report(path: impl AsRef<Path>, report: &Report) -> io::Result<()> {
    fs::write(path, report.to_text())
}

/// Writes the report, logging instead of propagating any I/O failure.
///
/// Returns whether the file was written.
pub fn save(path: impl AsRef<Path>, report: &Report) -> bool {
    let path = path.as_ref();
    match write_report(path, report) {
        Ok(()) => {
            info!(path = %path.display(), "report written");
            println!("{}", "results were successfully saved!".green());
            true
        }
        Err(err) => {
            error!(path = %path.display(), %err, "failed to write report");
            false
        }
    }
}

/// Console lines for one validation outcome.
pub fn validation_lines(validation: &Validation) -> Vec<String> {
    let name = validation.algorithm.name();
    match validation.verdict {
        Verdict::Passed => vec![format!("sort test passed: {name}").green().to_string()],
        Verdict::Failed { previous, next } => vec![
            format!("ERROR IN: {name}").red().to_string(),
            format!("{previous} should be smaller then {next}")
                .red()
                .to_string(),
        ],
    }
}

pub fn print_validations(validations: &[Validation]) {
    for validation in validations {
        for line in validation_lines(validation) {
            println!("{line}");
        }
    }
}

pub fn print_summary(report: &Report) {
    println!("{}", report.summary());
}
