//! RQ5 analysis document

use super::{Count, Tally};
use crate::detectors::CitationFormat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatCounts {
    pub bib: u64,
    pub cff: u64,
    pub readme: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationTally {
    pub citation: FormatCounts,
    /// Repositories offering no citation format
    #[serde(rename = "None")]
    pub none: Count,
}

impl Tally for CitationTally {
    type Outcome = Option<CitationFormat>;

    fn record(&mut self, _id: &str, format: &Option<CitationFormat>) {
        match format {
            Some(CitationFormat::Bibtex) => self.citation.bib += 1,
            Some(CitationFormat::Cff) => self.citation.cff += 1,
            Some(CitationFormat::Readme) => self.citation.readme += 1,
            None => self.none.count += 1,
        }
    }
}
