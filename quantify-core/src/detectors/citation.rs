//! Citation format detection

use super::{Detector, category};
use crate::evidence::{EvidenceRecord, Finding};

/// How a repository asks to be cited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CitationFormat {
    Bibtex,
    Cff,
    /// Citation section found in the README
    Readme,
}

impl CitationFormat {
    /// Format a single finding stands for, if any
    pub fn of(finding: &Finding) -> Option<Self> {
        match finding.result_str("format") {
            Some("bibtex") => Some(CitationFormat::Bibtex),
            Some("cff") => Some(CitationFormat::Cff),
            _ => finding.result_non_empty("original_header").map(|_| CitationFormat::Readme),
        }
    }
}

/// Classifies `citation` findings by their `result.format`
///
/// A repository is attributed to one format: the one of its first finding
/// that matches any.
#[derive(Debug, Default)]
pub struct CitationDetector;

impl CitationDetector {
    pub fn new() -> Self {
        Self
    }

    /// Whether any citation finding is a CITATION.cff, regardless of order
    pub fn offers_cff(&self, record: &EvidenceRecord) -> bool {
        record
            .lookup(category::CITATION)
            .findings()
            .iter()
            .any(|finding| finding.result_str("format") == Some("cff"))
    }
}

impl Detector for CitationDetector {
    type Outcome = Option<CitationFormat>;

    fn detect(&self, record: &EvidenceRecord) -> Option<CitationFormat> {
        record.lookup(category::CITATION).findings().iter().find_map(CitationFormat::of)
    }
}
