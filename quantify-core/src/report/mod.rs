//! Analysis and result documents
//!
//! Every document is pretty-printed JSON. Analysis documents hold raw
//! per-dimension counts; result documents hold percentages keyed by cluster.

pub mod results;

pub use results::{
    AdoptionResults, ArchivalResults, CitationResults, ClusterResults, DocumentationResults,
    ReleaseResults,
};

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Document not found: {0}")]
    MissingDocument(PathBuf),

    #[error("{0} needs the repository list")]
    NeedsRepositoryList(Dimension),

    #[error("Repository list {0} is empty")]
    EmptyCorpus(PathBuf),
}

pub type Result<T> = std::result::Result<T, ReportError>;

/// Research dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    Adoption,
    Archival,
    Releases,
    Documentation,
    Citation,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Adoption,
        Dimension::Archival,
        Dimension::Releases,
        Dimension::Documentation,
        Dimension::Citation,
    ];

    /// Short tag used in file names
    pub fn tag(&self) -> &'static str {
        match self {
            Dimension::Adoption => "rq1",
            Dimension::Archival => "rq2",
            Dimension::Releases => "rq3",
            Dimension::Documentation => "rq4",
            Dimension::Citation => "rq5",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Adoption => "adoption",
            Dimension::Archival => "archival",
            Dimension::Releases => "releases",
            Dimension::Documentation => "documentation",
            Dimension::Citation => "citation",
        };
        write!(f, "{} ({})", self.tag().to_uppercase(), name)
    }
}

/// File names of one cluster's documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentNames {
    cluster: String,
}

impl DocumentNames {
    pub fn new(cluster: impl Into<String>) -> Self {
        Self { cluster: cluster.into() }
    }

    pub fn cluster(&self) -> &str {
        &self.cluster
    }

    pub fn analysis(&self, dimension: Dimension) -> String {
        format!("analysis_{}_{}.json", self.cluster, dimension.tag())
    }

    pub fn release_classes(&self) -> String {
        format!("class_{}_rq3.json", self.cluster)
    }

    pub fn release_consistency(&self) -> String {
        format!("const_{}_rq3.json", self.cluster)
    }

    /// Relative path of a result document, `rqN/rqN_results_{cluster}.json`
    pub fn results(&self, dimension: Dimension) -> PathBuf {
        let tag = dimension.tag();
        Path::new(tag).join(format!("{}_results_{}.json", tag, self.cluster))
    }
}

/// Serialize `value` as pretty JSON to `dir/name`, creating parent directories
pub fn write_json<T: Serialize>(dir: &Path, name: impl AsRef<Path>, value: &T) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|source| ReportError::Write { path: parent.to_path_buf(), source })?;
    }

    let content = serde_json::to_string_pretty(value)?;
    fs::write(&path, content).map_err(|source| ReportError::Write { path: path.clone(), source })?;

    debug!("Wrote {}", path.display());
    Ok(path)
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(ReportError::MissingDocument(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)
        .map_err(|source| ReportError::Read { path: path.to_path_buf(), source })?;

    serde_json::from_str(&content)
        .map_err(|source| ReportError::Parse { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::CitationTally;
    use tempfile::TempDir;

    #[test]
    fn test_document_names() {
        let names = DocumentNames::new("cluster_a");
        assert_eq!(names.analysis(Dimension::Adoption), "analysis_cluster_a_rq1.json");
        assert_eq!(names.release_classes(), "class_cluster_a_rq3.json");
        assert_eq!(names.release_consistency(), "const_cluster_a_rq3.json");
        assert_eq!(
            names.results(Dimension::Citation),
            Path::new("rq5").join("rq5_results_cluster_a.json")
        );
    }

    #[test]
    fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let mut tally = CitationTally::default();
        tally.citation.cff = 4;

        let path = write_json(temp_dir.path(), Path::new("nested").join("doc.json"), &tally).unwrap();
        assert!(path.exists());

        let loaded: CitationTally = read_json(&path).unwrap();
        assert_eq!(loaded, tally);
    }

    #[test]
    fn test_missing_document() {
        let temp_dir = TempDir::new().unwrap();
        let result: Result<CitationTally> = read_json(&temp_dir.path().join("absent.json"));
        assert!(matches!(result, Err(ReportError::MissingDocument(_))));
    }

    #[test]
    fn test_dimension_display() {
        assert_eq!(Dimension::Releases.to_string(), "RQ3 (releases)");
    }
}
