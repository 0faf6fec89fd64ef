//! RQ4 analysis document

use super::{Count, Tally};
use crate::detectors::{DescriptionOutcome, DocumentationOutcome, LicenseClass};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionCounts {
    pub count_short: u64,
    pub count_long: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseEntry {
    pub file: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spdx_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseList {
    pub count: u64,
    pub licenses: Vec<LicenseEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub file: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlicensedList {
    pub count: u64,
    pub files: Vec<FileEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseCounts {
    pub spdx: LicenseList,
    pub no_spdx: LicenseList,
    pub no_license: UnlicensedList,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentationTally {
    pub description: DescriptionCounts,
    pub no_description: Count,
    pub license: LicenseCounts,
    pub installation: Count,
    pub requirements: Count,
    pub download: Count,
    pub documentation: Count,
}

impl DocumentationTally {
    fn record_license(&mut self, id: &str, license: &LicenseClass) {
        match license {
            LicenseClass::Spdx { name, spdx_id } => {
                self.license.spdx.count += 1;
                self.license.spdx.licenses.push(LicenseEntry {
                    file: id.to_string(),
                    name: name.clone(),
                    spdx_id: Some(spdx_id.clone()),
                });
            }
            LicenseClass::NonSpdx { name } => {
                self.license.no_spdx.count += 1;
                self.license.no_spdx.licenses.push(LicenseEntry {
                    file: id.to_string(),
                    name: name.clone(),
                    spdx_id: None,
                });
            }
            LicenseClass::NoLicense => {
                self.license.no_license.count += 1;
                self.license.no_license.files.push(FileEntry { file: id.to_string() });
            }
            LicenseClass::Unclassified => {}
        }
    }
}

impl Tally for DocumentationTally {
    type Outcome = DocumentationOutcome;

    fn record(&mut self, id: &str, outcome: &DocumentationOutcome) {
        match outcome.description {
            DescriptionOutcome::DeclaredMissing => self.no_description.count += 1,
            DescriptionOutcome::Evidenced { short, long } => {
                self.description.count_short += u64::from(short);
                self.description.count_long += u64::from(long);
            }
            DescriptionOutcome::Absent => {}
        }

        self.record_license(id, &outcome.license);

        self.installation.bump_if(outcome.installation);
        self.requirements.bump_if(outcome.requirements);
        self.download.bump_if(outcome.download);
        self.documentation.bump_if(outcome.documentation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(license: LicenseClass) -> DocumentationOutcome {
        DocumentationOutcome {
            description: DescriptionOutcome::Absent,
            license,
            installation: false,
            requirements: false,
            download: false,
            documentation: false,
        }
    }

    #[test]
    fn test_license_outcomes_are_exclusive() {
        let mut tally = DocumentationTally::default();
        tally.record(
            "output_1.json",
            &outcome(LicenseClass::Spdx { name: "MIT License".into(), spdx_id: "MIT".into() }),
        );
        tally.record("output_2.json", &outcome(LicenseClass::NonSpdx { name: "Custom".into() }));
        tally.record("output_3.json", &outcome(LicenseClass::NoLicense));
        tally.record("output_4.json", &outcome(LicenseClass::Unclassified));

        assert_eq!(tally.license.spdx.count, 1);
        assert_eq!(tally.license.no_spdx.count, 1);
        assert_eq!(tally.license.no_license.count, 1);
        assert_eq!(tally.license.spdx.licenses[0].spdx_id.as_deref(), Some("MIT"));
        assert_eq!(tally.license.no_license.files[0].file, "output_3.json");
    }

    #[test]
    fn test_description_counts_both() {
        let mut tally = DocumentationTally::default();
        let mut both = outcome(LicenseClass::Unclassified);
        both.description = DescriptionOutcome::Evidenced { short: true, long: true };
        let mut missing = outcome(LicenseClass::Unclassified);
        missing.description = DescriptionOutcome::DeclaredMissing;

        tally.record("output_1.json", &both);
        tally.record("output_2.json", &missing);

        assert_eq!(tally.description, DescriptionCounts { count_short: 1, count_long: 1 });
        assert_eq!(tally.no_description.count, 1);
    }

    #[test]
    fn test_non_spdx_entry_omits_id() {
        let mut tally = DocumentationTally::default();
        tally.record("output_1.json", &outcome(LicenseClass::NonSpdx { name: "Custom".into() }));

        let json = serde_json::to_value(&tally).unwrap();
        let entry = &json["license"]["no_spdx"]["licenses"][0];
        assert_eq!(entry["name"], "Custom");
        assert!(entry.get("spdx_id").is_none());
    }
}
