//! Core functionality for quantify
//!
//! This crate contains the evidence model, metadata detectors, version
//! classification, corpus aggregation and the analyze/calculate pipelines
//! behind the quantify tool.

pub mod aggregate;
pub mod archive;
pub mod config;
pub mod detectors;
pub mod evidence;
pub mod extract;
pub mod pipeline;
pub mod report;
pub mod repos;
pub mod version;

pub use aggregate::{Percentage, Tally};
pub use archive::{ArchiveClient, PresenceCheck};
pub use config::QuantifyConfig;
pub use detectors::Detector;
pub use evidence::{EvidenceLoader, EvidenceRecord, Finding};
pub use extract::Extractor;
pub use pipeline::{AnalysisPipeline, CalculatePipeline, DimensionRun, StageSummary};
pub use report::{Dimension, DocumentNames};
pub use repos::RepositoryList;
pub use version::{VersionClass, classify};
