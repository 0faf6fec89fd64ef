//! Release version scheme classification
//!
//! Tags are classified by an ordered rule table: the first predicate that
//! matches decides the class. `Alphanumeric` accepts most strings the stricter
//! rules reject, so it must stay below them.

use regex_utils::version;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Version scheme of a single tag, in matching priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VersionClass {
    Semantic,
    Calendar,
    Alphanumeric,
    Other,
}

impl VersionClass {
    pub const ALL: [VersionClass; 4] = [
        VersionClass::Semantic,
        VersionClass::Calendar,
        VersionClass::Alphanumeric,
        VersionClass::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VersionClass::Semantic => "Semantic",
            VersionClass::Calendar => "Calendar",
            VersionClass::Alphanumeric => "Alphanumeric",
            VersionClass::Other => "Other",
        }
    }
}

impl fmt::Display for VersionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type Rule = (fn(&str) -> bool, VersionClass);

/// Evaluated top to bottom; unmatched tags fall through to `Other`
pub const RULES: [Rule; 3] = [
    (version::is_semantic, VersionClass::Semantic),
    (version::is_calendar, VersionClass::Calendar),
    (version::is_alphanumeric, VersionClass::Alphanumeric),
];

/// Classify one version string
pub fn classify(tag: &str) -> VersionClass {
    let tag = tag.to_lowercase();

    RULES
        .iter()
        .find(|(matches, _)| matches(tag.as_str()))
        .map(|(_, class)| *class)
        .unwrap_or(VersionClass::Other)
}

/// Classification reported for a repository's whole tag list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum RecordClassification {
    Consistent(VersionClass),
    Inconsistent,
}

impl fmt::Display for RecordClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordClassification::Consistent(class) => class.fmt(f),
            RecordClassification::Inconsistent => f.write_str("Inconsistent"),
        }
    }
}

impl From<RecordClassification> for String {
    fn from(value: RecordClassification) -> Self {
        value.to_string()
    }
}

impl FromStr for RecordClassification {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "Inconsistent" {
            return Ok(RecordClassification::Inconsistent);
        }

        VersionClass::ALL
            .iter()
            .find(|class| class.as_str() == s)
            .map(|class| RecordClassification::Consistent(*class))
            .ok_or_else(|| format!("unknown classification: {}", s))
    }
}

impl TryFrom<String> for RecordClassification {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A tag together with its class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedTag {
    pub version: String,
    pub classification: VersionClass,
}

/// Consistency verdict for one repository's tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagConsistency {
    /// Class of the first tag in extraction order
    pub primary: VersionClass,
    pub tags: Vec<ClassifiedTag>,
}

impl TagConsistency {
    /// `None` for an empty tag list, which has no primary class
    pub fn check(tags: &[String]) -> Option<Self> {
        let tags: Vec<ClassifiedTag> = tags
            .iter()
            .map(|tag| ClassifiedTag { version: tag.clone(), classification: classify(tag) })
            .collect();

        let primary = tags.first()?.classification;
        Some(Self { primary, tags })
    }

    pub fn is_consistent(&self) -> bool {
        self.tags.iter().all(|tag| tag.classification == self.primary)
    }

    pub fn classification(&self) -> RecordClassification {
        if self.is_consistent() {
            RecordClassification::Consistent(self.primary)
        } else {
            RecordClassification::Inconsistent
        }
    }
}

/// Repositories per primary class
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassCounts {
    #[serde(rename = "Semantic")]
    pub semantic: u64,
    #[serde(rename = "Calendar")]
    pub calendar: u64,
    #[serde(rename = "Alphanumeric")]
    pub alphanumeric: u64,
    #[serde(rename = "Other")]
    pub other: u64,
}

impl ClassCounts {
    pub fn record(&mut self, class: VersionClass) {
        *self.slot(class) += 1;
    }

    pub fn get(&self, class: VersionClass) -> u64 {
        match class {
            VersionClass::Semantic => self.semantic,
            VersionClass::Calendar => self.calendar,
            VersionClass::Alphanumeric => self.alphanumeric,
            VersionClass::Other => self.other,
        }
    }

    fn slot(&mut self, class: VersionClass) -> &mut u64 {
        match class {
            VersionClass::Semantic => &mut self.semantic,
            VersionClass::Calendar => &mut self.calendar,
            VersionClass::Alphanumeric => &mut self.alphanumeric,
            VersionClass::Other => &mut self.other,
        }
    }
}
