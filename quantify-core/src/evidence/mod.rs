//! Decoded per-repository extraction reports
//!
//! An [`EvidenceRecord`] maps category names to the findings the extractor
//! produced for them, plus the set of categories it declared missing. A
//! declared-missing category is never treated as evidenced, even when the
//! report also carries a key for it.

pub mod loader;

pub use loader::{EvidenceLoader, LoadFailure, LoadReport};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvidenceError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected report shape in {id}: {reason}")]
    Shape { id: String, reason: String },

    #[error("Reports directory not found: {0}")]
    MissingDirectory(PathBuf),

    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, EvidenceError>;

/// One claimed piece of evidence for a category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// How the extractor found it
    pub technique: Option<String>,

    /// Provenance URL or path
    pub source: Option<String>,

    pub confidence: Option<f64>,

    /// Category-specific payload
    pub result: Map<String, Value>,
}

impl Finding {
    /// Decode a finding from a report array element; non-objects are not findings
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;

        Some(Self {
            technique: object.get("technique").and_then(Value::as_str).map(str::to_string),
            source: object.get("source").and_then(Value::as_str).map(str::to_string),
            confidence: object.get("confidence").and_then(Value::as_f64),
            result: object.get("result").and_then(Value::as_object).cloned().unwrap_or_default(),
        })
    }

    /// String field of the result payload
    pub fn result_str(&self, key: &str) -> Option<&str> {
        self.result.get(key).and_then(Value::as_str)
    }

    /// String field of the result payload, `None` when empty
    pub fn result_non_empty(&self, key: &str) -> Option<&str> {
        self.result_str(key).filter(|value| !value.is_empty())
    }

    pub fn technique_is(&self, technique: &str) -> bool {
        self.technique.as_deref() == Some(technique)
    }

    pub fn source_lowercase(&self) -> Option<String> {
        self.source.as_ref().map(|source| source.to_lowercase())
    }
}

/// Outcome of looking up one category in a record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CategoryLookup<'a> {
    Present(&'a [Finding]),
    DeclaredMissing,
    Absent,
}

impl<'a> CategoryLookup<'a> {
    pub fn is_present(&self) -> bool {
        matches!(self, CategoryLookup::Present(_))
    }

    /// Findings when present, empty otherwise
    pub fn findings(&self) -> &'a [Finding] {
        match self {
            CategoryLookup::Present(findings) => findings,
            _ => &[],
        }
    }
}

/// Decoded extraction report for one repository
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvidenceRecord {
    /// Report file name, used as the repository identity in documents
    pub id: String,

    pub categories: BTreeMap<String, Vec<Finding>>,

    pub declared_missing: BTreeSet<String>,
}

impl EvidenceRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), ..Default::default() }
    }

    /// Decode a report document; `missing_key` names the declared-missing list
    pub fn from_json(id: impl Into<String>, document: &Value, missing_key: &str) -> Result<Self> {
        let id = id.into();
        let object = document.as_object().ok_or_else(|| EvidenceError::Shape {
            id: id.clone(),
            reason: "top-level value is not an object".to_string(),
        })?;

        let mut record = Self::new(id);

        for (key, value) in object {
            if key == missing_key {
                record.declared_missing = Self::decode_missing(&record.id, value)?;
                continue;
            }

            let findings = value
                .as_array()
                .map(|items| items.iter().filter_map(Finding::from_value).collect())
                .unwrap_or_default();
            record.categories.insert(key.clone(), findings);
        }

        Ok(record)
    }

    fn decode_missing(id: &str, value: &Value) -> Result<BTreeSet<String>> {
        let items = value.as_array().ok_or_else(|| EvidenceError::Shape {
            id: id.to_string(),
            reason: "declared-missing list is not an array".to_string(),
        })?;

        items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| EvidenceError::Shape {
                    id: id.to_string(),
                    reason: format!("declared-missing entry is not a string: {}", item),
                })
            })
            .collect()
    }

    /// Declared-missing takes precedence over a present key
    pub fn lookup(&self, category: &str) -> CategoryLookup<'_> {
        if self.declared_missing.contains(category) {
            return CategoryLookup::DeclaredMissing;
        }

        match self.categories.get(category) {
            Some(findings) => CategoryLookup::Present(findings),
            None => CategoryLookup::Absent,
        }
    }

    pub fn is_present(&self, category: &str) -> bool {
        self.lookup(category).is_present()
    }

    /// Findings of every category that is not declared missing, in key order
    pub fn evidenced_findings(&self) -> impl Iterator<Item = &Finding> {
        self.categories
            .iter()
            .filter(|(name, _)| !self.declared_missing.contains(*name))
            .flat_map(|(_, findings)| findings.iter())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use serde_json::json;

    /// Finding with the given result payload
    pub fn finding(result: Value) -> Finding {
        Finding::from_value(&json!({ "result": result })).unwrap()
    }

    pub fn sourced(source: &str) -> Finding {
        Finding { source: Some(source.to_string()), ..Default::default() }
    }

    pub fn technique(technique: &str) -> Finding {
        Finding { technique: Some(technique.to_string()), ..Default::default() }
    }

    impl EvidenceRecord {
        pub fn with_findings(mut self, category: &str, findings: Vec<Finding>) -> Self {
            self.categories.insert(category.to_string(), findings);
            self
        }

        pub fn with_missing(mut self, category: &str) -> Self {
            self.declared_missing.insert(category.to_string());
            self
        }
    }
}
