//! Extract command - run the metadata extractor over a repository list

use crate::cli::app::ExtractArgs;
use crate::cli::progress::Spinner;
use anyhow::{Context, Result};
use quantify_core::{Extractor, QuantifyConfig, RepositoryList};

pub fn execute(args: ExtractArgs, config: QuantifyConfig) -> Result<()> {
    println!("Running extractor with input file: {}", args.input.display());

    let repositories = RepositoryList::from_file(&args.input)
        .with_context(|| format!("Failed to read repository list {}", args.input.display()))?;

    let mut extractor = Extractor::new(config.extractor);
    if let Some(threshold) = args.threshold {
        extractor = extractor.with_threshold(threshold);
    }

    let spinner =
        Spinner::start(format!("Extracting {} repositories...", repositories.corpus_size()));
    let summary = extractor.run(&repositories, &args.output_dir)?;
    spinner.finish(format!(
        "Extraction done: {} written, {} failed",
        summary.succeeded.len(),
        summary.failed.len()
    ));

    for failure in &summary.failed {
        println!("  #{} {}: {}", failure.position, failure.url, failure.reason);
    }

    Ok(())
}
