//! Command line argument parsing for the Rota CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Rota - TF-IDF intent classification engine
#[derive(Parser, Debug, Clone)]
#[command(name = "rota")]
#[command(about = "TF-IDF intent classification engine with an evaluation harness")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct RotaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Classifier configuration file (JSON); defaults to the built-in
    /// automotive domain configuration
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl RotaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Classify a single input text
    Classify(ClassifyArgs),

    /// Show the strongest keywords of a trained category
    Keywords(KeywordsArgs),

    /// Evaluate classification quality against labeled test data
    Evaluate(EvaluateArgs),
}

/// Arguments for classifying text
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Text to classify
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Training data file (label|text lines)
    #[arg(short, long, value_name = "DATA_FILE", default_value = "data/intents.txt")]
    pub data: PathBuf,

    /// Also list the N highest-scoring intents
    #[arg(short, long, value_name = "N")]
    pub top: Option<usize>,
}

/// Arguments for listing category keywords
#[derive(Parser, Debug, Clone)]
pub struct KeywordsArgs {
    /// Intent label to inspect
    #[arg(value_name = "INTENT")]
    pub intent: String,

    /// Training data file (label|text lines)
    #[arg(short, long, value_name = "DATA_FILE", default_value = "data/intents.txt")]
    pub data: PathBuf,
}

/// Arguments for evaluation
#[derive(Parser, Debug, Clone)]
pub struct EvaluateArgs {
    /// Training data file (label|text lines)
    #[arg(short, long, value_name = "DATA_FILE", default_value = "data/intents.txt")]
    pub data: PathBuf,

    /// Dedicated test file; falls back to a training-data split when the
    /// file does not exist
    #[arg(short, long, value_name = "TEST_FILE", default_value = "data/test_intents.txt")]
    pub test_file: PathBuf,

    /// Fraction of each label's examples used by the fallback split
    #[arg(long, default_value = "0.2")]
    pub ratio: f64,

    /// RNG seed for the fallback split
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Write the full text report to this path
    #[arg(short, long, value_name = "REPORT_FILE")]
    pub report: Option<PathBuf>,

    /// Number of misclassified examples to show
    #[arg(short, long, default_value = "10")]
    pub misclassified: usize,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
