//! Calculate command - normalize analysis documents into percentages

use super::{finish, print_summary};
use crate::cli::app::CalculateArgs;
use crate::cli::progress::Spinner;
use anyhow::{Context, Result};
use quantify_core::{CalculatePipeline, Dimension, DimensionRun, RepositoryList, StageSummary};

pub fn execute(args: CalculateArgs) -> Result<()> {
    println!("Calculating results using repository list from: {}", args.input.display());

    let repositories = RepositoryList::from_file(&args.input)
        .with_context(|| format!("Failed to read repository list {}", args.input.display()))?;
    let corpus_size = repositories.require_non_empty(&args.input)?;

    println!(
        "Results: {}, Cluster: {}, Total repositories: {}",
        args.results_dir.display(),
        args.cluster,
        corpus_size
    );

    let pipeline =
        CalculatePipeline::new(&args.cluster, &args.analysis_dir, &args.results_dir, corpus_size);

    let mut summary = StageSummary::default();
    for dimension in Dimension::ALL {
        let spinner = Spinner::start(format!("Calculating {} stats...", dimension));
        let run = DimensionRun::new(dimension, pipeline.calculate(dimension));
        finish(spinner, &run);
        summary.push(run);
    }

    print_summary("Calculation", &summary);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(temp_dir: &TempDir) -> CalculateArgs {
        CalculateArgs {
            input: temp_dir.path().join("repos.json"),
            analysis_dir: temp_dir.path().join("analysis"),
            results_dir: temp_dir.path().join("results"),
            cluster: "default".to_string(),
        }
    }

    #[test]
    fn test_missing_documents_do_not_abort() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("repos.json"), r#"[{"github_url": "https://github.com/a/b"}]"#)
            .unwrap();

        assert!(execute(args(&temp_dir)).is_ok());
        assert!(!temp_dir.path().join("results").join("rq1").exists());
    }

    #[test]
    fn test_empty_repository_list_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("repos.json"), "[]").unwrap();

        assert!(execute(args(&temp_dir)).is_err());
    }
}
