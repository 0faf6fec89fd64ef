//! Archival presence lookup
//!
//! One GET per repository against the archive's origin endpoint. The client
//! never retries: any status other than 200 or 404, and any transport error,
//! is treated as "not archived".

use crate::aggregate::{ArchivalTally, Tally};
use crate::config::ArchiveConfig;
use crate::repos::RepositoryList;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};

/// Answers whether a repository is archived
#[async_trait]
pub trait PresenceCheck {
    async fn is_archived(&self, repository_url: &str) -> bool;
}

pub struct ArchiveClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl ArchiveClient {
    pub fn new(config: &ArchiveConfig) -> Result<Self> {
        let client = Client::builder().build().context("Failed to build HTTP client")?;

        Ok(Self { client, endpoint: config.endpoint.clone(), token: config.resolve_token() })
    }

    /// Origin lookup URL for a repository
    pub fn origin_url(&self, repository_url: &str) -> String {
        format!("{}{}/get/", self.endpoint, repository_url)
    }
}

#[async_trait]
impl PresenceCheck for ArchiveClient {
    async fn is_archived(&self, repository_url: &str) -> bool {
        let url = self.origin_url(repository_url);

        let response = match self.client.get(&url).bearer_auth(&self.token).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Error checking {}: {}", repository_url, e);
                return false;
            }
        };

        debug!("Processing {} - Status: {}", url, response.status());
        match response.status() {
            StatusCode::OK => true,
            StatusCode::NOT_FOUND => false,
            status => {
                warn!("Unexpected status code {} for {}", status, repository_url);
                false
            }
        }
    }
}

/// Check every listed repository in order
pub async fn check_repositories<C>(checker: &C, repositories: &RepositoryList) -> ArchivalTally
where
    C: PresenceCheck + Sync,
{
    let mut tally = ArchivalTally::default();

    for (_, url) in repositories.urls() {
        let in_swh = checker.is_archived(url).await;
        if in_swh {
            debug!("{} is archived", url);
        }
        tally.record(url, &in_swh);
    }

    info!(
        "Processed repositories. Archived: {}, not archived: {}",
        tally.summary.count_in_swh, tally.summary.count_not_in_swh
    );
    tally
}
