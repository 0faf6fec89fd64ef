//! Result documents: analysis counts normalized into percentages
//!
//! Most metrics divide by the corpus size. RQ3 consistency and scheme shares
//! divide by the number of release-bearing repositories instead.

use crate::aggregate::{
    AdoptionTally, ArchivalTally, CitationTally, ConsistencyTally, DocumentationTally,
    Percentage, ReleaseTally,
};
use crate::version::VersionClass;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Result document: one entry per cluster
pub type ClusterResults<T> = BTreeMap<String, T>;

pub fn for_cluster<T>(cluster: &str, results: T) -> ClusterResults<T> {
    BTreeMap::from([(cluster.to_string(), results)])
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdoptionResults {
    pub cff: Percentage,
    pub readme: Percentage,
    pub package: Percentage,
    pub authors: Percentage,
    pub contributors: Percentage,
    pub license: Percentage,
    pub codemeta: Percentage,
    pub zenodo_doi: Percentage,
    pub none: Percentage,
}

impl AdoptionResults {
    pub fn calculate(tally: &AdoptionTally, corpus_size: u64) -> Self {
        let pct = |count| Percentage::of(count, corpus_size);
        Self {
            cff: pct(tally.cff.count),
            readme: pct(tally.readme_url.count),
            package: pct(tally.package.count),
            authors: pct(tally.authors.count),
            contributors: pct(tally.contributors.count),
            license: pct(tally.license.count),
            codemeta: pct(tally.codemeta.count),
            zenodo_doi: pct(tally.doi.count),
            none: pct(tally.none.count),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArchivalResults {
    pub swh: Percentage,
    /// Carried over from the RQ1 results
    pub zenodo_doi: Percentage,
}

impl ArchivalResults {
    pub fn calculate(tally: &ArchivalTally, corpus_size: u64, zenodo_doi: Percentage) -> Self {
        Self { swh: Percentage::of(tally.summary.count_in_swh, corpus_size), zenodo_doi }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReleaseAdoption {
    pub releases: Percentage,
    pub consistency: Percentage,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SchemeShares {
    pub semantic: Percentage,
    pub calendar: Percentage,
    #[serde(rename = "Alphanumeric")]
    pub alphanumeric: Percentage,
    pub other: Percentage,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReleaseResults {
    #[serde(rename = "rq3-1")]
    pub adoption: ReleaseAdoption,
    #[serde(rename = "rq3-2")]
    pub schemes: SchemeShares,
}

impl ReleaseResults {
    pub fn calculate(
        classes: &ReleaseTally,
        consistency: &ConsistencyTally,
        corpus_size: u64,
    ) -> Self {
        let with_releases = classes.release_count();
        let summary = &consistency.summary;
        let share = |class| Percentage::of(summary.class_counts.get(class), with_releases);

        Self {
            adoption: ReleaseAdoption {
                releases: Percentage::of(with_releases, corpus_size),
                consistency: Percentage::of(summary.consistent_count, with_releases),
            },
            schemes: SchemeShares {
                semantic: share(VersionClass::Semantic),
                calendar: share(VersionClass::Calendar),
                alphanumeric: share(VersionClass::Alphanumeric),
                other: share(VersionClass::Other),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DescriptionShares {
    pub long_desc: Percentage,
    pub short_desc: Percentage,
    #[serde(rename = "None")]
    pub none: Percentage,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LicenseShares {
    pub spdx: Percentage,
    pub other: Percentage,
    pub no_license: Percentage,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuidanceShares {
    pub requirements: Percentage,
    pub installation: Percentage,
    pub documentation: Percentage,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DocumentationResults {
    #[serde(rename = "rq4-1")]
    pub description: DescriptionShares,
    #[serde(rename = "rq4-2")]
    pub license: LicenseShares,
    #[serde(rename = "rq4-3")]
    pub guidance: GuidanceShares,
}

impl DocumentationResults {
    pub fn calculate(tally: &DocumentationTally, corpus_size: u64) -> Self {
        let pct = |count| Percentage::of(count, corpus_size);
        Self {
            description: DescriptionShares {
                long_desc: pct(tally.description.count_long),
                short_desc: pct(tally.description.count_short),
                none: pct(tally.no_description.count),
            },
            license: LicenseShares {
                spdx: pct(tally.license.spdx.count),
                other: pct(tally.license.no_spdx.count),
                no_license: pct(tally.license.no_license.count),
            },
            guidance: GuidanceShares {
                requirements: pct(tally.requirements.count),
                installation: pct(tally.installation.count),
                documentation: pct(tally.documentation.count),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CitationResults {
    pub bib: Percentage,
    pub cff: Percentage,
    pub readme: Percentage,
    /// Sum of the format shares; a repository offering several formats counts more than once
    pub total: Percentage,
}

impl CitationResults {
    pub fn calculate(tally: &CitationTally, corpus_size: u64) -> Self {
        let bib = Percentage::of(tally.citation.bib, corpus_size);
        let cff = Percentage::of(tally.citation.cff, corpus_size);
        let readme = Percentage::of(tally.citation.readme, corpus_size);
        Self { bib, cff, readme, total: bib + cff + readme }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::Tally;
    use crate::detectors::ReleaseOutcome;

    #[test]
    fn test_adoption_boundaries() {
        let mut tally = AdoptionTally::default();
        tally.cff.count = 10;

        let results = AdoptionResults::calculate(&tally, 10);
        assert_eq!(results.cff.value(), Some(100.0));
        assert_eq!(results.readme.value(), Some(0.0));
    }

    #[test]
    fn test_zero_corpus_is_undefined() {
        let results = AdoptionResults::calculate(&AdoptionTally::default(), 0);
        assert_eq!(results.cff, Percentage::Undefined);

        let json = serde_json::to_value(results).unwrap();
        assert!(json["cff"].is_null());
    }

    #[test]
    fn test_archival_share() {
        let mut tally = ArchivalTally::default();
        for i in 0..10 {
            tally.record(&format!("https://github.com/org/repo{}", i), &(i < 3));
        }

        let results = ArchivalResults::calculate(&tally, 10, Percentage::of(1, 10));
        assert_eq!(results.swh.value(), Some(30.0));
        assert_eq!(results.zenodo_doi.value(), Some(10.0));
    }

    #[test]
    fn test_release_shares_use_release_count() {
        let mut classes = ReleaseTally::default();
        let tags = |tags: &[&str]| ReleaseOutcome {
            has_releases: true,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        };
        classes.record("output_1.json", &tags(&["v1.0.0", "v1.1.0"]));
        classes.record("output_2.json", &tags(&["v2.0.0", "2024.01"]));
        classes.record("output_3.json", &ReleaseOutcome::default());
        classes.record("output_4.json", &ReleaseOutcome::default());
        let consistency = classes.classify();

        let results = ReleaseResults::calculate(&classes, &consistency, 4);
        assert_eq!(results.adoption.releases.value(), Some(50.0));
        assert_eq!(results.adoption.consistency.value(), Some(50.0));
        assert_eq!(results.schemes.semantic.value(), Some(100.0));
        assert_eq!(results.schemes.calendar.value(), Some(0.0));
    }

    #[test]
    fn test_release_shares_without_releases() {
        let classes = ReleaseTally::default();
        let results = ReleaseResults::calculate(&classes, &ConsistencyTally::default(), 5);

        assert_eq!(results.adoption.releases.value(), Some(0.0));
        assert_eq!(results.adoption.consistency, Percentage::Undefined);
    }

    #[test]
    fn test_result_keys() {
        let results = ReleaseResults::calculate(
            &ReleaseTally::default(),
            &ConsistencyTally::default(),
            1,
        );
        let json = serde_json::to_value(for_cluster("default", results)).unwrap();
        assert!(json["default"]["rq3-1"].get("releases").is_some());
        assert!(json["default"]["rq3-2"].get("Alphanumeric").is_some());
    }

    #[test]
    fn test_citation_total_is_sum() {
        let mut tally = CitationTally::default();
        tally.citation.bib = 1;
        tally.citation.cff = 2;
        tally.citation.readme = 1;

        let results = CitationResults::calculate(&tally, 8);
        assert_eq!(results.total.value(), Some(50.0));
    }

    #[test]
    fn test_documentation_shares() {
        let mut tally = DocumentationTally::default();
        tally.license.spdx.count = 1;
        tally.description.count_long = 2;

        let results = DocumentationResults::calculate(&tally, 4);
        assert_eq!(results.license.spdx.value(), Some(25.0));
        assert_eq!(results.license.other.value(), Some(0.0));
        assert_eq!(results.description.long_desc.value(), Some(50.0));

        let json = serde_json::to_value(results).unwrap();
        assert_eq!(json["rq4-2"]["spdx"], 25.0);
    }
}
