//! Subcommand handlers

pub mod analyze;
pub mod calculate;
pub mod extract;

use super::progress::Spinner;
use quantify_core::{DimensionRun, StageSummary};

/// One line describing a dimension's outcome
fn outcome_line(run: &DimensionRun) -> String {
    match &run.outcome {
        Ok(paths) => {
            let written: Vec<_> = paths.iter().map(|path| path.display().to_string()).collect();
            format!("{} done: {}", run.dimension, written.join(", "))
        }
        Err(e) => format!("{} failed: {}", run.dimension, e),
    }
}

/// Close a dimension's spinner with its outcome
fn finish(spinner: Spinner, run: &DimensionRun) {
    spinner.finish(outcome_line(run));
}

/// Print which dimensions failed, if any
fn print_summary(stage: &str, summary: &StageSummary) {
    let failed: Vec<_> = summary.failed().map(|run| run.dimension.to_string()).collect();
    if failed.is_empty() {
        println!("\n{} finished for {} dimension(s)", stage, summary.runs.len());
    } else {
        println!("\n{} finished; failed: {}", stage, failed.join(", "));
    }
}
