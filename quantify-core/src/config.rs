//! Configuration for report discovery, detectors and external collaborators
//!
//! Every constant the detectors match against lives here so a corpus produced
//! by a differently configured extractor can be analysed without code changes.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct QuantifyConfig {
    pub input: InputConfig,
    pub detectors: DetectorConfig,
    pub archive: ArchiveConfig,
    pub extractor: ExtractorConfig,
}

impl QuantifyConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;

        toml::from_str(&content)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }
}

/// How extraction reports are discovered and decoded
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Reserved report key listing categories the extractor could not resolve
    pub missing_key: String,

    pub file_prefix: String,

    pub file_suffix: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            missing_key: "somef_missing_categories".to_string(),
            file_prefix: "output_".to_string(),
            file_suffix: ".json".to_string(),
        }
    }
}

/// Constants matched by the category detectors
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DetectorConfig {
    /// Manifest names recognised in build-file findings
    pub package_files: Vec<String>,

    pub doi_resolver_prefix: String,

    /// Registry infix a resolver URL must contain to count as a DOI
    pub doi_registry_infix: String,

    pub doi_badge_prefix: String,

    pub codemeta_filename: String,

    pub readme_filename: String,

    /// Technique that marks a description as the short repository blurb
    pub short_description_technique: String,

    /// Technique whose installation findings are too weak to count
    pub low_confidence_technique: String,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            package_files: [
                "description",
                "composer.json",
                "package.json",
                "pom.xml",
                "pyproject.toml",
                "requirements.txt",
                "setup.py",
            ]
            .iter()
            .map(|name| name.to_string())
            .collect(),
            doi_resolver_prefix: "https://doi.org/".to_string(),
            doi_registry_infix: "10.5281/zenodo.".to_string(),
            doi_badge_prefix: "https://zenodo.org/badge/latestdoi/".to_string(),
            codemeta_filename: "codemeta.json".to_string(),
            readme_filename: "README.md".to_string(),
            short_description_technique: "GitHub_API".to_string(),
            low_confidence_technique: "supervised_classification".to_string(),
        }
    }
}

/// Archival presence service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ArchiveConfig {
    pub endpoint: String,

    /// Bearer token; takes precedence over `token_env`
    pub token: Option<String>,

    pub token_env: String,
}

impl ArchiveConfig {
    /// Resolve the bearer token, falling back to the environment
    pub fn resolve_token(&self) -> String {
        self.token
            .clone()
            .or_else(|| std::env::var(&self.token_env).ok())
            .unwrap_or_default()
    }
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://archive.softwareheritage.org/api/1/origin/".to_string(),
            token: None,
            token_env: "SWH_API_TOKEN".to_string(),
        }
    }
}

/// External metadata extraction tool
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExtractorConfig {
    pub program: String,

    pub threshold: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self { program: "somef".to_string(), threshold: "0.8".to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = QuantifyConfig::default();
        assert_eq!(config.input.missing_key, "somef_missing_categories");
        assert_eq!(config.detectors.package_files.len(), 7);
        assert_eq!(config.extractor.threshold, "0.8");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("quantify.toml");
        fs::write(&path, "[input]\nmissing_key = \"missing\"\n").unwrap();

        let config = QuantifyConfig::from_file(&path).unwrap();
        assert_eq!(config.input.missing_key, "missing");
        assert_eq!(config.input.file_prefix, "output_");
        assert_eq!(config.archive, ArchiveConfig::default());
    }

    #[test]
    fn test_load_or_default_reads_given_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("quantify.toml");
        fs::write(&path, "[extractor]\nthreshold = \"0.9\"\n").unwrap();

        let loaded = QuantifyConfig::load_or_default(Some(&path)).unwrap();
        assert_eq!(loaded.extractor.threshold, "0.9");
        assert_eq!(QuantifyConfig::load_or_default(None).unwrap(), QuantifyConfig::default());
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.toml");
        fs::write(&path, "[input\n").unwrap();

        let err = QuantifyConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_explicit_token_wins() {
        let archive = ArchiveConfig {
            token: Some("secret".to_string()),
            token_env: "QUANTIFY_TEST_TOKEN_UNSET".to_string(),
            ..Default::default()
        };
        assert_eq!(archive.resolve_token(), "secret");
    }
}
