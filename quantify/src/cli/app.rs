use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "quantify",
    version,
    about = "Quantify metadata adoption across a corpus of research software repositories",
    long_about = "Quantify runs a metadata extractor over a list of repositories, analyzes the extraction reports along five research dimensions, and turns the resulting counts into corpus percentages."
)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the metadata extractor on a list of repositories
    #[command(about = "Run the metadata extractor on a JSON list of repositories")]
    Extract(ExtractArgs),

    /// Analyze extraction reports
    #[command(about = "Analyze extraction reports along every research dimension")]
    Analyze(AnalyzeArgs),

    /// Turn analysis documents into percentages
    #[command(about = "Calculate corpus percentages from analysis documents")]
    Calculate(CalculateArgs),
}

#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// JSON list of repositories
    #[arg(short, long, help = "Path to JSON file containing the list of repositories")]
    pub input: PathBuf,

    /// Where extraction reports are written
    #[arg(short, long, default_value = "somef_outputs", help = "Directory to store extraction reports")]
    pub output_dir: PathBuf,

    /// Extractor confidence threshold
    #[arg(short, long, help = "Confidence threshold passed to the extractor")]
    pub threshold: Option<String>,
}

#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Directory holding `output_*.json` reports
    #[arg(short = 's', long, help = "Directory containing extraction reports")]
    pub reports_dir: PathBuf,

    /// JSON list of repositories, needed for the archival check
    #[arg(short, long, help = "Path to the repository list (required for RQ2)")]
    pub input_repos: Option<PathBuf>,

    #[arg(short, long, default_value = "rq_results", help = "Directory to store analysis documents")]
    pub output_dir: PathBuf,

    #[arg(long, default_value = "default", help = "Cluster name used in document file names")]
    pub cluster: String,
}

#[derive(Parser, Debug)]
pub struct CalculateArgs {
    /// JSON list of repositories; its length is the corpus size
    #[arg(short, long, help = "Path to the repository list used for the analysis")]
    pub input: PathBuf,

    #[arg(short = 'r', long, help = "Directory containing analysis documents")]
    pub analysis_dir: PathBuf,

    #[arg(short = 'o', long, default_value = "final_results", help = "Directory to store result documents")]
    pub results_dir: PathBuf,

    #[arg(long, default_value = "default", help = "Cluster name used in document file names")]
    pub cluster: String,
}
