//! Extraction runner
//!
//! Invokes the external metadata extractor once per listed repository,
//! sequentially, writing `output_{i}.json` where `i` is the 1-based position in
//! the repository list.

use crate::config::ExtractorConfig;
use crate::repos::RepositoryList;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ExtractError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractFailure {
    pub position: usize,
    pub url: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    pub succeeded: Vec<PathBuf>,
    pub failed: Vec<ExtractFailure>,
}

impl ExtractSummary {
    pub fn attempted(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }
}

pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Override the configured confidence threshold
    pub fn with_threshold(mut self, threshold: impl Into<String>) -> Self {
        self.config.threshold = threshold.into();
        self
    }

    pub fn output_path(output_dir: &Path, position: usize) -> PathBuf {
        output_dir.join(format!("output_{}.json", position))
    }

    /// Arguments passed to the extractor for one repository
    pub fn arguments(&self, url: &str, output: &Path) -> Vec<String> {
        vec![
            "describe".to_string(),
            "-r".to_string(),
            url.to_string(),
            "-o".to_string(),
            output.display().to_string(),
            "-t".to_string(),
            self.config.threshold.clone(),
            "-p".to_string(),
            "-m".to_string(),
        ]
    }

    /// Run the extractor over every listed repository
    ///
    /// A non-zero exit fails only that repository. Failing to launch the
    /// program at all aborts the run, since every later call would fail too.
    pub fn run(&self, repositories: &RepositoryList, output_dir: &Path) -> Result<ExtractSummary> {
        fs::create_dir_all(output_dir)
            .map_err(|source| ExtractError::OutputDir { path: output_dir.to_path_buf(), source })?;

        let mut summary = ExtractSummary::default();
        for (position, url) in repositories.urls() {
            info!("Extracting: {}", url);
            let output = Self::output_path(output_dir, position);

            let status = Command::new(&self.config.program)
                .args(self.arguments(url, &output))
                .status()
                .map_err(|source| ExtractError::Launch {
                    program: self.config.program.clone(),
                    source,
                })?;

            if status.success() {
                debug!("Wrote {}", output.display());
                summary.succeeded.push(output);
            } else {
                warn!("Extraction of {} exited with {}", url, status);
                summary.failed.push(ExtractFailure {
                    position,
                    url: url.to_string(),
                    reason: status.to_string(),
                });
            }
        }

        info!(
            "Extraction finished: {} succeeded, {} failed",
            summary.succeeded.len(),
            summary.failed.len()
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_arguments() {
        let extractor = Extractor::new(ExtractorConfig::default()).with_threshold("0.9");
        let args = extractor.arguments("https://github.com/a/b", Path::new("out/output_3.json"));

        assert_eq!(
            args,
            vec!["describe", "-r", "https://github.com/a/b", "-o", "out/output_3.json", "-t", "0.9", "-p", "-m"]
        );
    }

    #[test]
    fn test_missing_program_aborts() {
        let temp_dir = TempDir::new().unwrap();
        let config = ExtractorConfig {
            program: "definitely-not-an-installed-extractor".to_string(),
            ..Default::default()
        };
        let repositories = RepositoryList::from_urls(["https://github.com/a/b"]);

        let result = Extractor::new(config).run(&repositories, &temp_dir.path().join("out"));
        assert!(matches!(result, Err(ExtractError::Launch { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_exit_continues() {
        let temp_dir = TempDir::new().unwrap();
        let config = ExtractorConfig { program: "false".to_string(), ..Default::default() };
        let repositories =
            RepositoryList::from_urls(["https://github.com/a/b", "https://github.com/c/d"]);

        let summary = Extractor::new(config).run(&repositories, temp_dir.path()).unwrap();
        assert_eq!(summary.attempted(), 2);
        assert_eq!(summary.failed[1].position, 2);
        assert!(summary.succeeded.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_exit() {
        let temp_dir = TempDir::new().unwrap();
        let config = ExtractorConfig { program: "true".to_string(), ..Default::default() };
        let repositories = RepositoryList::from_urls(["https://github.com/a/b"]);

        let summary = Extractor::new(config).run(&repositories, temp_dir.path()).unwrap();
        assert_eq!(summary.succeeded, vec![temp_dir.path().join("output_1.json")]);
    }
}
