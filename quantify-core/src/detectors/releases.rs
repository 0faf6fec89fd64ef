//! Release tag collection (RQ3)

use super::{Detector, category};
use crate::evidence::EvidenceRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseOutcome {
    pub has_releases: bool,
    /// Non-empty lowercased tags in extraction order
    pub tags: Vec<String>,
}

#[derive(Debug, Default)]
pub struct ReleaseDetector;

impl ReleaseDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Detector for ReleaseDetector {
    type Outcome = ReleaseOutcome;

    fn detect(&self, record: &EvidenceRecord) -> ReleaseOutcome {
        let lookup = record.lookup(category::RELEASES);
        if !lookup.is_present() {
            return ReleaseOutcome::default();
        }

        let tags = lookup
            .findings()
            .iter()
            .filter_map(|finding| finding.result_non_empty("tag"))
            .map(str::to_lowercase)
            .collect();

        ReleaseOutcome { has_releases: true, tags }
    }
}
