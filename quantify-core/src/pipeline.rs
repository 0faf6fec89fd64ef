//! Analyze and calculate stages
//!
//! The analyze stage runs detectors over every evidence record and writes one
//! analysis document per dimension (two for RQ3). The calculate stage reads
//! those documents back and normalizes them into result documents. In both
//! stages a failing dimension is reported and the others still run.

use crate::aggregate::{
    self, AdoptionTally, ArchivalTally, CitationTally, ConsistencyTally, DocumentationTally,
    Percentage, ReleaseTally,
};
use crate::archive::{self, PresenceCheck};
use crate::config::QuantifyConfig;
use crate::detectors::{AdoptionDetector, CitationDetector, DocumentationDetector, ReleaseDetector};
use crate::evidence::{self, EvidenceLoader, EvidenceRecord, LoadReport};
use crate::report::results::for_cluster;
use crate::report::{
    self, AdoptionResults, ArchivalResults, CitationResults, Dimension, DocumentNames,
    DocumentationResults, ReleaseResults, ReportError, read_json, write_json,
};
use crate::repos::RepositoryList;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// What happened to one dimension during a stage
#[derive(Debug)]
pub struct DimensionRun {
    pub dimension: Dimension,
    pub outcome: report::Result<Vec<PathBuf>>,
}

impl DimensionRun {
    pub fn new(dimension: Dimension, outcome: report::Result<Vec<PathBuf>>) -> Self {
        match &outcome {
            Ok(paths) => info!("{} wrote {} document(s)", dimension, paths.len()),
            Err(e) => error!("{} failed: {}", dimension, e),
        }
        Self { dimension, outcome }
    }

    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

#[derive(Debug, Default)]
pub struct StageSummary {
    pub runs: Vec<DimensionRun>,
}

impl StageSummary {
    pub fn push(&mut self, run: DimensionRun) {
        self.runs.push(run);
    }

    pub fn failed(&self) -> impl Iterator<Item = &DimensionRun> {
        self.runs.iter().filter(|run| !run.is_ok())
    }

    pub fn is_clean(&self) -> bool {
        self.failed().next().is_none()
    }
}

/// Evidence records to analysis documents
pub struct AnalysisPipeline {
    config: QuantifyConfig,
    names: DocumentNames,
    output_dir: PathBuf,
}

impl AnalysisPipeline {
    pub fn new(config: QuantifyConfig, cluster: &str, output_dir: impl Into<PathBuf>) -> Self {
        Self { config, names: DocumentNames::new(cluster), output_dir: output_dir.into() }
    }

    pub fn load_records(&self, reports_dir: &Path) -> evidence::Result<LoadReport> {
        EvidenceLoader::new(self.config.input.clone()).load_dir(reports_dir)
    }

    /// Analyze one of the dimensions computed from evidence alone
    pub fn analyze(&self, dimension: Dimension, records: &[EvidenceRecord]) -> report::Result<Vec<PathBuf>> {
        let detectors = &self.config.detectors;
        let dir = self.output_dir.as_path();

        match dimension {
            Dimension::Adoption => {
                let tally: AdoptionTally =
                    aggregate::fold(records, &AdoptionDetector::new(detectors.clone()));
                Ok(vec![write_json(dir, self.names.analysis(dimension), &tally)?])
            }
            Dimension::Releases => {
                let mut classes: ReleaseTally = aggregate::fold(records, &ReleaseDetector::new());
                let consistency = classes.classify();
                Ok(vec![
                    write_json(dir, self.names.release_classes(), &classes)?,
                    write_json(dir, self.names.release_consistency(), &consistency)?,
                ])
            }
            Dimension::Documentation => {
                let tally: DocumentationTally =
                    aggregate::fold(records, &DocumentationDetector::new(detectors.clone()));
                Ok(vec![write_json(dir, self.names.analysis(dimension), &tally)?])
            }
            Dimension::Citation => {
                let tally: CitationTally = aggregate::fold(records, &CitationDetector::new());
                Ok(vec![write_json(dir, self.names.analysis(dimension), &tally)?])
            }
            Dimension::Archival => Err(ReportError::NeedsRepositoryList(dimension)),
        }
    }

    /// RQ2 analysis: archival presence for every listed repository
    pub async fn analyze_archival<C>(
        &self,
        checker: &C,
        repositories: &RepositoryList,
    ) -> report::Result<Vec<PathBuf>>
    where
        C: PresenceCheck + Sync,
    {
        let tally = archive::check_repositories(checker, repositories).await;
        let path = write_json(&self.output_dir, self.names.analysis(Dimension::Archival), &tally)?;
        Ok(vec![path])
    }

    /// Run every evidence-only dimension
    pub fn run_local(&self, records: &[EvidenceRecord]) -> StageSummary {
        let mut summary = StageSummary::default();
        for dimension in Dimension::ALL {
            if dimension == Dimension::Archival {
                continue;
            }
            summary.push(DimensionRun::new(dimension, self.analyze(dimension, records)));
        }
        summary
    }
}

/// Analysis documents to result documents
pub struct CalculatePipeline {
    names: DocumentNames,
    analysis_dir: PathBuf,
    results_dir: PathBuf,
    corpus_size: u64,
}

impl CalculatePipeline {
    pub fn new(
        cluster: &str,
        analysis_dir: impl Into<PathBuf>,
        results_dir: impl Into<PathBuf>,
        corpus_size: u64,
    ) -> Self {
        Self {
            names: DocumentNames::new(cluster),
            analysis_dir: analysis_dir.into(),
            results_dir: results_dir.into(),
            corpus_size,
        }
    }

    fn analysis_path(&self, name: String) -> PathBuf {
        self.analysis_dir.join(name)
    }

    fn write_results<T: serde::Serialize>(&self, dimension: Dimension, results: T) -> report::Result<Vec<PathBuf>> {
        let document = for_cluster(self.names.cluster(), results);
        Ok(vec![write_json(&self.results_dir, self.names.results(dimension), &document)?])
    }

    /// RQ1 DOI share, or zero when the RQ1 document can't be read
    fn zenodo_share(&self) -> Percentage {
        let path = self.analysis_path(self.names.analysis(Dimension::Adoption));
        match read_json::<AdoptionTally>(&path) {
            Ok(tally) => Percentage::of(tally.doi.count, self.corpus_size),
            Err(e) => {
                warn!("Zenodo DOI share unavailable, recording 0.0: {}", e);
                Percentage::Defined(0.0)
            }
        }
    }

    pub fn calculate(&self, dimension: Dimension) -> report::Result<Vec<PathBuf>> {
        let corpus = self.corpus_size;
        let analysis = |dimension: Dimension| self.analysis_path(self.names.analysis(dimension));

        match dimension {
            Dimension::Adoption => {
                let tally: AdoptionTally = read_json(&analysis(dimension))?;
                self.write_results(dimension, AdoptionResults::calculate(&tally, corpus))
            }
            Dimension::Archival => {
                let tally: ArchivalTally = read_json(&analysis(dimension))?;
                let results = ArchivalResults::calculate(&tally, corpus, self.zenodo_share());
                self.write_results(dimension, results)
            }
            Dimension::Releases => {
                let classes: ReleaseTally =
                    read_json(&self.analysis_path(self.names.release_classes()))?;
                let consistency: ConsistencyTally =
                    read_json(&self.analysis_path(self.names.release_consistency()))?;
                info!("Number of repositories with releases: {}", classes.release_count());
                let results = ReleaseResults::calculate(&classes, &consistency, corpus);
                self.write_results(dimension, results)
            }
            Dimension::Documentation => {
                let tally: DocumentationTally = read_json(&analysis(dimension))?;
                self.write_results(dimension, DocumentationResults::calculate(&tally, corpus))
            }
            Dimension::Citation => {
                let tally: CitationTally = read_json(&analysis(dimension))?;
                self.write_results(dimension, CitationResults::calculate(&tally, corpus))
            }
        }
    }

    pub fn run(&self) -> StageSummary {
        let mut summary = StageSummary::default();
        for dimension in Dimension::ALL {
            summary.push(DimensionRun::new(dimension, self.calculate(dimension)));
        }
        summary
    }
}
