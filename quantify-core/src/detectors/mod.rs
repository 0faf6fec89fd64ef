//! Category detectors
//!
//! Each detector inspects one [`EvidenceRecord`] and returns an immutable
//! per-record outcome. Outcomes carry booleans and extracted values only; the
//! aggregation layer decides how they are counted.

pub mod adoption;
pub mod citation;
pub mod documentation;
pub mod provenance;
pub mod releases;

pub use adoption::{AdoptionDetector, AdoptionOutcome};
pub use citation::{CitationDetector, CitationFormat};
pub use documentation::{
    DescriptionOutcome, DocumentationDetector, DocumentationOutcome, LicenseClass,
};
pub use releases::{ReleaseDetector, ReleaseOutcome};

use crate::evidence::EvidenceRecord;

/// Category names as they appear in extraction reports
pub mod category {
    pub const CITATION: &str = "citation";
    pub const README_URL: &str = "readme_url";
    pub const CONTRIBUTORS: &str = "contributors";
    pub const LICENSE: &str = "license";
    pub const BUILD_FILE: &str = "has_build_file";
    pub const IDENTIFIER: &str = "identifier";
    pub const RELEASES: &str = "releases";
    pub const DESCRIPTION: &str = "description";
    pub const INSTALLATION: &str = "installation";
    pub const REQUIREMENTS: &str = "requirements";
    pub const DOWNLOAD: &str = "download";
    pub const DOCUMENTATION: &str = "documentation";
}

/// Per-record evidence inspection for one research dimension
pub trait Detector {
    type Outcome;

    fn detect(&self, record: &EvidenceRecord) -> Self::Outcome;
}
