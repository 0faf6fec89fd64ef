//! Metadata file adoption (RQ1)

use super::citation::CitationDetector;
use super::provenance::{extract_doi, find_authors_file, find_codemeta, find_package_manifest};
use super::{Detector, category};
use crate::config::DetectorConfig;
use crate::evidence::EvidenceRecord;

/// Which metadata artefacts one repository carries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdoptionOutcome {
    pub cff: bool,
    pub readme: bool,
    pub contributors: bool,
    pub license: bool,
    /// Source of the codemeta finding
    pub codemeta: Option<String>,
    /// Source of the AUTHORS finding
    pub authors: Option<String>,
    /// Matched manifest name
    pub package: Option<String>,
    pub doi: Option<String>,
}

impl AdoptionOutcome {
    /// True when no tracked artefact was found; the DOI is not tracked here
    pub fn nothing_detected(&self) -> bool {
        !(self.cff
            || self.readme
            || self.contributors
            || self.license
            || self.codemeta.is_some()
            || self.authors.is_some()
            || self.package.is_some())
    }
}

pub struct AdoptionDetector {
    config: DetectorConfig,
    citation: CitationDetector,
}

impl AdoptionDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config, citation: CitationDetector::new() }
    }
}

impl Detector for AdoptionDetector {
    type Outcome = AdoptionOutcome;

    fn detect(&self, record: &EvidenceRecord) -> AdoptionOutcome {
        AdoptionOutcome {
            cff: self.citation.offers_cff(record),
            readme: record.is_present(category::README_URL),
            contributors: record.is_present(category::CONTRIBUTORS),
            license: record.is_present(category::LICENSE),
            codemeta: find_codemeta(record, &self.config.codemeta_filename),
            authors: find_authors_file(record),
            package: find_package_manifest(record, &self.config.package_files),
            doi: extract_doi(record, &self.config),
        }
    }
}
