//! RQ2 analysis document

use super::Tally;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchivalEntry {
    pub github_link: String,
    pub in_swh: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchivalSummary {
    pub count_in_swh: u64,
    pub count_not_in_swh: u64,
}

/// Archival presence per repository; keyed by repository URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchivalTally {
    pub results: Vec<ArchivalEntry>,
    pub summary: ArchivalSummary,
}

impl Tally for ArchivalTally {
    type Outcome = bool;

    fn record(&mut self, id: &str, in_swh: &bool) {
        self.results.push(ArchivalEntry { github_link: id.to_string(), in_swh: *in_swh });

        if *in_swh {
            self.summary.count_in_swh += 1;
        } else {
            self.summary.count_not_in_swh += 1;
        }
    }
}
