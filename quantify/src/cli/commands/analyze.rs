//! Analyze command - turn extraction reports into analysis documents

use super::{finish, outcome_line, print_summary};
use crate::cli::app::AnalyzeArgs;
use crate::cli::progress::Spinner;
use anyhow::{Context, Result};
use quantify_core::{
    AnalysisPipeline, ArchiveClient, Dimension, DimensionRun, QuantifyConfig, RepositoryList,
};
use tracing::warn;

pub async fn execute(args: AnalyzeArgs, config: QuantifyConfig) -> Result<()> {
    println!("Running analysis on {}", args.reports_dir.display());

    let client = ArchiveClient::new(&config.archive)?;
    let pipeline = AnalysisPipeline::new(config, &args.cluster, &args.output_dir);

    let loaded = pipeline
        .load_records(&args.reports_dir)
        .with_context(|| format!("Failed to load reports from {}", args.reports_dir.display()))?;

    if !loaded.is_clean() {
        warn!("{} report(s) could not be loaded and were skipped", loaded.failures.len());
        for failure in &loaded.failures {
            println!("  skipped {}: {}", failure.path.display(), failure.error);
        }
    }

    let spinner = Spinner::start(format!("Analyzing {} report(s)...", loaded.records.len()));
    let mut summary = pipeline.run_local(&loaded.records);
    spinner.finish(format!("Analyzed {} dimension(s)", summary.runs.len()));
    for run in &summary.runs {
        println!("  {}", outcome_line(run));
    }

    match &args.input_repos {
        Some(list_path) => {
            let dimension = Dimension::Archival;
            let spinner = Spinner::start(format!("Running {}...", dimension));
            let outcome = match RepositoryList::from_file(list_path) {
                Ok(repositories) => pipeline.analyze_archival(&client, &repositories).await,
                Err(e) => Err(e),
            };
            let run = DimensionRun::new(dimension, outcome);
            finish(spinner, &run);
            summary.push(run);
        }
        None => println!("Skipping RQ2 (needs --input-repos)"),
    }

    print_summary("Analysis", &summary);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_local_dimensions_without_repository_list() {
        let temp_dir = TempDir::new().unwrap();
        let reports = temp_dir.path().join("reports");
        fs::create_dir_all(&reports).unwrap();
        fs::write(reports.join("output_1.json"), r#"{"citation": [{"result": {"format": "cff"}}]}"#)
            .unwrap();

        let output_dir = temp_dir.path().join("analysis");
        let args = AnalyzeArgs {
            reports_dir: reports,
            input_repos: None,
            output_dir: output_dir.clone(),
            cluster: "cli".to_string(),
        };

        execute(args, QuantifyConfig::default()).await.unwrap();

        assert!(output_dir.join("analysis_cli_rq1.json").exists());
        assert!(output_dir.join("class_cli_rq3.json").exists());
        assert!(output_dir.join("analysis_cli_rq5.json").exists());
        assert!(!output_dir.join("analysis_cli_rq2.json").exists());
    }
}
