//! RQ3 analysis documents: release tags and their version-scheme consistency

use super::{Count, Tally};
use crate::detectors::ReleaseOutcome;
use crate::version::{ClassCounts, ClassifiedTag, RecordClassification, TagConsistency};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseList {
    pub count: u64,
    /// One single-entry map per repository: report id to its tags
    pub versions: Vec<BTreeMap<String, Vec<String>>>,
}

/// Release-bearing repositories and their tags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseTally {
    pub releases: ReleaseList,
    #[serde(rename = "None")]
    pub none: Count,
    /// Filled by [`ReleaseTally::classify`]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classified: Vec<BTreeMap<String, Vec<ClassifiedTag>>>,
}

impl Tally for ReleaseTally {
    type Outcome = ReleaseOutcome;

    fn record(&mut self, id: &str, outcome: &ReleaseOutcome) {
        if !outcome.has_releases {
            self.none.count += 1;
            return;
        }

        self.releases.count += 1;
        self.releases.versions.push(BTreeMap::from([(id.to_string(), outcome.tags.clone())]));
    }
}

impl ReleaseTally {
    /// Number of repositories with at least one release
    pub fn release_count(&self) -> u64 {
        self.releases.count
    }

    /// Classify every repository's tags and check their consistency
    pub fn classify(&mut self) -> ConsistencyTally {
        let mut consistency = ConsistencyTally::default();
        let mut classified = Vec::with_capacity(self.releases.versions.len());

        for (id, tags) in self.releases.versions.iter().flat_map(|entry| entry.iter()) {
            match TagConsistency::check(tags) {
                Some(check) => {
                    consistency.record(id, &check);
                    classified.push(BTreeMap::from([(id.clone(), check.tags)]));
                }
                None => {
                    debug!("{} has releases but no tags; leaving it unclassified", id);
                    consistency.summary.untagged_count += 1;
                }
            }
        }

        self.classified = classified;
        consistency
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConsistency {
    pub is_consistent: bool,
    pub classification: RecordClassification,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencySummary {
    pub consistent_count: u64,
    pub inconsistent_count: u64,
    /// Release-bearing repositories without a single tag
    #[serde(default)]
    pub untagged_count: u64,
    /// Repositories per primary class, inconsistent ones included
    pub class_counts: ClassCounts,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyTally {
    pub files: BTreeMap<String, FileConsistency>,
    pub summary: ConsistencySummary,
}

impl Tally for ConsistencyTally {
    type Outcome = TagConsistency;

    fn record(&mut self, id: &str, check: &TagConsistency) {
        let is_consistent = check.is_consistent();

        self.summary.class_counts.record(check.primary);
        if is_consistent {
            self.summary.consistent_count += 1;
        } else {
            self.summary.inconsistent_count += 1;
        }

        self.files.insert(
            id.to_string(),
            FileConsistency { is_consistent, classification: check.classification() },
        );
    }
}
