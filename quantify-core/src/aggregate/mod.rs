//! Corpus aggregation
//!
//! Tallies fold per-record detector outcomes into counters owned by a single
//! run. Each counter moves at most once per repository; tallies also keep the
//! per-repository lists that end up in the analysis documents.

pub mod adoption;
pub mod archival;
pub mod citation;
pub mod documentation;
pub mod percent;
pub mod releases;

pub use adoption::AdoptionTally;
pub use archival::{ArchivalEntry, ArchivalSummary, ArchivalTally};
pub use citation::CitationTally;
pub use documentation::DocumentationTally;
pub use percent::Percentage;
pub use releases::{ConsistencyTally, ReleaseTally};

use crate::detectors::Detector;
use crate::evidence::EvidenceRecord;
use serde::{Deserialize, Serialize};

/// Accumulates detector outcomes for one research dimension
pub trait Tally: Default {
    type Outcome;

    fn record(&mut self, id: &str, outcome: &Self::Outcome);
}

/// Run `detector` over every record and fold the outcomes into a fresh tally
pub fn fold<D, T>(records: &[EvidenceRecord], detector: &D) -> T
where
    D: Detector,
    T: Tally<Outcome = D::Outcome>,
{
    records.iter().fold(T::default(), |mut tally, record| {
        tally.record(&record.id, &detector.detect(record));
        tally
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Count {
    pub count: u64,
}

impl Count {
    pub fn bump_if(&mut self, condition: bool) {
        if condition {
            self.count += 1;
        }
    }
}

/// Counter that remembers which reports contributed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCount {
    pub count: u64,
    pub files: Vec<String>,
}

impl FileCount {
    pub fn bump(&mut self, id: &str) {
        self.count += 1;
        self.files.push(id.to_string());
    }
}
