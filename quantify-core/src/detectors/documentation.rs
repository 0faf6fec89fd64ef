//! Description, license identification and usage documentation (RQ4)

use super::{Detector, category};
use crate::config::DetectorConfig;
use crate::evidence::{CategoryLookup, EvidenceRecord, Finding};

const UNKNOWN_LICENSE: &str = "Unknown License";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionOutcome {
    /// The extractor reported no description
    DeclaredMissing,
    Evidenced { short: bool, long: bool },
    Absent,
}

/// Mutually exclusive license verdict for one repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseClass {
    Spdx { name: String, spdx_id: String },
    NonSpdx { name: String },
    NoLicense,
    /// Neither evidenced nor declared missing
    Unclassified,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentationOutcome {
    pub description: DescriptionOutcome,
    pub license: LicenseClass,
    pub installation: bool,
    pub requirements: bool,
    pub download: bool,
    pub documentation: bool,
}

pub struct DocumentationDetector {
    config: DetectorConfig,
}

impl DocumentationDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    fn description(&self, record: &EvidenceRecord) -> DescriptionOutcome {
        let findings = match record.lookup(category::DESCRIPTION) {
            CategoryLookup::Present(findings) => findings,
            CategoryLookup::DeclaredMissing => return DescriptionOutcome::DeclaredMissing,
            CategoryLookup::Absent => return DescriptionOutcome::Absent,
        };

        // Findings after the first README-sourced one are not inspected
        let mut short = false;
        let mut long = false;
        for finding in findings {
            short |= finding.technique_is(&self.config.short_description_technique);

            let from_readme = finding
                .source
                .as_deref()
                .is_some_and(|source| source.contains(&self.config.readme_filename));
            if from_readme {
                long = true;
                break;
            }
        }

        DescriptionOutcome::Evidenced { short, long }
    }

    fn license(&self, record: &EvidenceRecord) -> LicenseClass {
        let findings = match record.lookup(category::LICENSE) {
            CategoryLookup::Present(findings) => findings,
            CategoryLookup::DeclaredMissing => return LicenseClass::NoLicense,
            CategoryLookup::Absent => return LicenseClass::Unclassified,
        };

        let license_name = |finding: &Finding| {
            finding.result_non_empty("name").unwrap_or(UNKNOWN_LICENSE).to_string()
        };

        if let Some((finding, spdx_id)) = findings
            .iter()
            .find_map(|finding| finding.result_non_empty("spdx_id").map(|id| (finding, id)))
        {
            return LicenseClass::Spdx { name: license_name(finding), spdx_id: spdx_id.to_string() };
        }

        let name = findings.last().map(license_name).unwrap_or_else(|| UNKNOWN_LICENSE.to_string());
        LicenseClass::NonSpdx { name }
    }

    fn installation(&self, record: &EvidenceRecord) -> bool {
        record
            .lookup(category::INSTALLATION)
            .findings()
            .iter()
            .any(|finding| !finding.technique_is(&self.config.low_confidence_technique))
    }
}

impl Detector for DocumentationDetector {
    type Outcome = DocumentationOutcome;

    fn detect(&self, record: &EvidenceRecord) -> DocumentationOutcome {
        DocumentationOutcome {
            description: self.description(record),
            license: self.license(record),
            installation: self.installation(record),
            requirements: record.is_present(category::REQUIREMENTS),
            download: record.is_present(category::DOWNLOAD),
            documentation: record.is_present(category::DOCUMENTATION),
        }
    }
}
