//! Repository list input
//!
//! A JSON array of objects with a `github_url` field. Its length is the
//! corpus size every RQ percentage is normalized against.

use crate::report::{ReportError, Result, read_json};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryEntry {
    #[serde(default)]
    pub github_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryList {
    pub entries: Vec<RepositoryEntry>,
}

impl RepositoryList {
    pub fn from_file(path: &Path) -> Result<Self> {
        let entries: Vec<RepositoryEntry> = read_json(path)?;
        info!("Loaded {} repositories from {}", entries.len(), path.display());
        Ok(Self { entries })
    }

    pub fn from_urls<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries =
            urls.into_iter().map(|url| RepositoryEntry { github_url: Some(url.into()) }).collect();
        Self { entries }
    }

    /// Total repositories submitted, including entries without a URL
    pub fn corpus_size(&self) -> u64 {
        self.entries.len() as u64
    }

    /// `(1-based position, url)` for entries that have a URL
    pub fn urls(&self) -> impl Iterator<Item = (usize, &str)> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| entry.github_url.as_deref().map(|url| (index + 1, url)))
    }

    /// Corpus size, rejecting an empty list
    pub fn require_non_empty(&self, path: &Path) -> Result<u64> {
        match self.corpus_size() {
            0 => Err(ReportError::EmptyCorpus(path.to_path_buf())),
            size => Ok(size),
        }
    }
}
