//! Discovery and decoding of extraction reports on disk

use super::{EvidenceError, EvidenceRecord, Result};
use crate::config::InputConfig;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// A report that could not be turned into a record
#[derive(Debug)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub error: EvidenceError,
}

/// Records decoded from one reports directory
#[derive(Debug, Default)]
pub struct LoadReport {
    pub records: Vec<EvidenceRecord>,
    pub failures: Vec<LoadFailure>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Finds `output_*.json` reports under a directory and decodes them
pub struct EvidenceLoader {
    config: InputConfig,
}

impl EvidenceLoader {
    pub fn new(config: InputConfig) -> Self {
        Self { config }
    }

    /// Whether a file name follows the report naming convention
    pub fn is_report_name(&self, file_name: &str) -> bool {
        file_name.starts_with(&self.config.file_prefix)
            && file_name.ends_with(&self.config.file_suffix)
    }

    /// Report paths below `dir`, sorted by path
    ///
    /// Entries the walk cannot read are logged and skipped.
    pub fn discover(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let (paths, unreadable) = self.walk(dir)?;
        for failure in &unreadable {
            warn!("Skipping {}: {}", failure.path.display(), failure.error);
        }
        Ok(paths)
    }

    fn walk(&self, dir: &Path) -> Result<(Vec<PathBuf>, Vec<LoadFailure>)> {
        if !dir.is_dir() {
            return Err(EvidenceError::MissingDirectory(dir.to_path_buf()));
        }

        let mut paths = Vec::new();
        let mut unreadable = Vec::new();
        for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf());
                    unreadable.push(LoadFailure { path, error: EvidenceError::Walk(e) });
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if self.is_report_name(&name) {
                paths.push(entry.into_path());
            }
        }

        debug!("Discovered {} reports in {}", paths.len(), dir.display());
        Ok((paths, unreadable))
    }

    /// Decode a single report, identified by its file name
    pub fn load_file(&self, path: &Path) -> Result<EvidenceRecord> {
        let id = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        self.decode(id, path)
    }

    fn decode(&self, id: String, path: &Path) -> Result<EvidenceRecord> {
        let content = fs::read_to_string(path)
            .map_err(|source| EvidenceError::Read { path: path.to_path_buf(), source })?;

        let document: Value = serde_json::from_str(&content)
            .map_err(|source| EvidenceError::Parse { path: path.to_path_buf(), source })?;

        EvidenceRecord::from_json(id, &document, &self.config.missing_key)
    }

    /// Decode every report below `dir`; bad files are logged and skipped
    ///
    /// Records are identified by their path relative to `dir`, so equally
    /// named reports in different subdirectories stay distinct.
    pub fn load_dir(&self, dir: &Path) -> Result<LoadReport> {
        let (paths, unreadable) = self.walk(dir)?;
        let mut report = LoadReport { records: Vec::new(), failures: unreadable };
        for failure in &report.failures {
            warn!("Skipping {}: {}", failure.path.display(), failure.error);
        }

        for path in paths {
            match self.decode(relative_id(dir, &path), &path) {
                Ok(record) => report.records.push(record),
                Err(error) => {
                    warn!("Skipping report {}: {}", path.display(), error);
                    report.failures.push(LoadFailure { path, error });
                }
            }
        }

        info!(
            "Loaded {} reports from {} ({} skipped)",
            report.records.len(),
            dir.display(),
            report.failures.len()
        );

        Ok(report)
    }
}

/// `/`-separated path of `path` below `dir`
fn relative_id(dir: &Path, path: &Path) -> String {
    path.strip_prefix(dir)
        .unwrap_or(path)
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
