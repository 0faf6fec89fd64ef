//! RQ1 analysis document

use super::{Count, FileCount, Tally};
use crate::detectors::AdoptionOutcome;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedValues {
    pub count: u64,
    pub extracted_values: Vec<String>,
}

/// Repositories carrying each metadata artefact
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdoptionTally {
    #[serde(rename = "citation.cff")]
    pub cff: Count,
    pub readme_url: Count,
    pub package: FileCount,
    pub authors: FileCount,
    pub contributors: FileCount,
    pub license: Count,
    #[serde(rename = "codemeta.json")]
    pub codemeta: FileCount,
    #[serde(rename = "identifier_extract")]
    pub doi: ExtractedValues,
    #[serde(rename = "None")]
    pub none: Count,
}

impl Tally for AdoptionTally {
    type Outcome = AdoptionOutcome;

    fn record(&mut self, id: &str, outcome: &AdoptionOutcome) {
        self.cff.bump_if(outcome.cff);
        self.readme_url.bump_if(outcome.readme);
        self.license.bump_if(outcome.license);

        if outcome.contributors {
            self.contributors.bump(id);
        }
        if outcome.package.is_some() {
            self.package.bump(id);
        }
        if outcome.authors.is_some() {
            self.authors.bump(id);
        }
        if outcome.codemeta.is_some() {
            self.codemeta.bump(id);
        }
        if let Some(doi) = &outcome.doi {
            self.doi.count += 1;
            self.doi.extracted_values.push(doi.clone());
        }

        self.none.bump_if(outcome.nothing_detected());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_outcomes() {
        let mut tally = AdoptionTally::default();
        tally.record(
            "output_1.json",
            &AdoptionOutcome {
                cff: true,
                package: Some("setup.py".to_string()),
                doi: Some("10.5281/zenodo.1".to_string()),
                ..Default::default()
            },
        );
        tally.record("output_2.json", &AdoptionOutcome::default());

        assert_eq!(tally.cff.count, 1);
        assert_eq!(tally.package.files, vec!["output_1.json".to_string()]);
        assert_eq!(tally.doi.extracted_values, vec!["10.5281/zenodo.1".to_string()]);
        assert_eq!(tally.none.count, 1);
    }

    #[test]
    fn test_document_keys() {
        let json = serde_json::to_value(AdoptionTally::default()).unwrap();
        for key in [
            "citation.cff",
            "readme_url",
            "package",
            "authors",
            "contributors",
            "license",
            "codemeta.json",
            "identifier_extract",
            "None",
        ] {
            assert!(json.get(key).is_some(), "missing key {}", key);
        }
        assert_eq!(json["identifier_extract"]["extracted_values"], serde_json::json!([]));
    }
}
