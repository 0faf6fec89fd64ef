//! Detection based on where findings came from
//!
//! These scans look at the `source` of findings across categories, or at the
//! payload of a single category, and stop at the first match.

use super::category;
use crate::config::DetectorConfig;
use crate::evidence::EvidenceRecord;

/// Source of the first finding that points at an AUTHORS file
pub fn find_authors_file(record: &EvidenceRecord) -> Option<String> {
    record.evidenced_findings().find_map(|finding| {
        let source = finding.source_lowercase()?;
        let is_authors = source.ends_with("/authors") || source.contains("/authors.");
        is_authors.then(|| finding.source.clone()).flatten()
    })
}

/// Source of the first finding extracted from a codemeta file
pub fn find_codemeta(record: &EvidenceRecord, filename: &str) -> Option<String> {
    let filename = filename.to_lowercase();

    record.evidenced_findings().find_map(|finding| {
        let source = finding.source_lowercase()?;
        source.contains(&filename).then(|| finding.source.clone()).flatten()
    })
}

/// Name of the first known package manifest among the build-file findings
pub fn find_package_manifest(record: &EvidenceRecord, package_files: &[String]) -> Option<String> {
    record.lookup(category::BUILD_FILE).findings().iter().find_map(|finding| {
        let value = finding.result_str("value").unwrap_or_default().to_lowercase();
        let format = finding.result_str("format").unwrap_or_default().to_lowercase();

        package_files
            .iter()
            .find(|name| {
                let name = name.to_lowercase();
                value.contains(&name) || format == name
            })
            .cloned()
    })
}

/// Canonical DOI from the first qualifying `identifier` finding
pub fn extract_doi(record: &EvidenceRecord, config: &DetectorConfig) -> Option<String> {
    record.lookup(category::IDENTIFIER).findings().iter().find_map(|finding| {
        let value = finding.result_str("value")?;

        if value.contains(&config.doi_registry_infix) {
            if let Some(doi) = value.strip_prefix(&config.doi_resolver_prefix) {
                return Some(doi.to_string());
            }
        }

        value.strip_prefix(&config.doi_badge_prefix).map(str::to_string)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evidence::fixtures::{finding, sourced};
    use serde_json::json;

    #[test]
    fn test_authors_file_variants() {
        for source in [
            "https://raw.githubusercontent.com/org/repo/main/AUTHORS",
            "https://raw.githubusercontent.com/org/repo/main/AUTHORS.md",
            "https://raw.githubusercontent.com/org/repo/main/docs/authors.txt",
        ] {
            let record =
                EvidenceRecord::new("output_1.json").with_findings("authors", vec![sourced(source)]);
            assert_eq!(find_authors_file(&record).as_deref(), Some(source), "{}", source);
        }
    }

    #[test]
    fn test_authors_lookalikes_do_not_match() {
        let record = EvidenceRecord::new("output_1.json").with_findings(
            "contributors",
            vec![
                sourced("https://raw.githubusercontent.com/org/repo/main/CONTRIBUTORS.md"),
                sourced("https://raw.githubusercontent.com/org/repo/main/authorship/README.md"),
                sourced("https://github.com/org/coauthors"),
            ],
        );

        assert_eq!(find_authors_file(&record), None);
    }

    #[test]
    fn test_authors_in_missing_category_ignored() {
        let record = EvidenceRecord::new("output_1.json")
            .with_findings("authors", vec![sourced("https://x/repo/AUTHORS")])
            .with_missing("authors");

        assert_eq!(find_authors_file(&record), None);
    }

    #[test]
    fn test_codemeta_found_in_any_category() {
        let record = EvidenceRecord::new("output_1.json")
            .with_findings("description", vec![sourced("https://x/repo/README.md")])
            .with_findings("name", vec![sourced("https://x/repo/CodeMeta.json")]);

        assert_eq!(
            find_codemeta(&record, "codemeta.json").as_deref(),
            Some("https://x/repo/CodeMeta.json")
        );
    }

    #[test]
    fn test_package_manifest_by_value_or_format() {
        let config = DetectorConfig::default();

        let by_value = EvidenceRecord::new("output_1.json").with_findings(
            "has_build_file",
            vec![finding(json!({"value": "https://x/repo/Package.json", "format": "npm"}))],
        );
        assert_eq!(
            find_package_manifest(&by_value, &config.package_files).as_deref(),
            Some("package.json")
        );

        let by_format = EvidenceRecord::new("output_2.json").with_findings(
            "has_build_file",
            vec![
                finding(json!({"value": "https://x/repo/Dockerfile", "format": "dockerfile"})),
                finding(json!({"value": "https://x/repo/pom", "format": "pom.xml"})),
            ],
        );
        assert_eq!(
            find_package_manifest(&by_format, &config.package_files).as_deref(),
            Some("pom.xml")
        );

        let none = EvidenceRecord::new("output_3.json").with_findings(
            "has_build_file",
            vec![finding(json!({"value": "https://x/repo/Dockerfile"}))],
        );
        assert_eq!(find_package_manifest(&none, &config.package_files), None);
    }

    #[test]
    fn test_doi_extraction() {
        let config = DetectorConfig::default();

        let record = EvidenceRecord::new("output_1.json").with_findings(
            "identifier",
            vec![
                finding(json!({"value": "https://doi.org/10.1000/other.123"})),
                finding(json!({"value": "https://doi.org/10.5281/zenodo.1234567"})),
                finding(json!({"value": "https://doi.org/10.5281/zenodo.7654321"})),
            ],
        );
        assert_eq!(extract_doi(&record, &config).as_deref(), Some("10.5281/zenodo.1234567"));

        let badge = EvidenceRecord::new("output_2.json").with_findings(
            "identifier",
            vec![finding(json!({"value": "https://zenodo.org/badge/latestdoi/98765"}))],
        );
        assert_eq!(extract_doi(&badge, &config).as_deref(), Some("98765"));
    }

    #[test]
    fn test_non_zenodo_doi_rejected() {
        let config = DetectorConfig::default();
        let record = EvidenceRecord::new("output_1.json").with_findings(
            "identifier",
            vec![finding(json!({"value": "https://doi.org/10.1000/xyz"}))],
        );

        assert_eq!(extract_doi(&record, &config), None);
    }
}
