//! Output formatting for CLI commands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, RotaArgs};
use crate::error::Result;
use crate::evaluate::metrics::{EvaluationResults, Prediction};

/// Result structure for the classify command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationOutput {
    pub intent: String,
    pub description: String,
    pub score: f64,
    pub in_domain: bool,
    /// Per-intent similarity scores, sorted by label.
    pub scores: BTreeMap<String, f64>,
    /// Highest-scoring intents, present when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<Vec<IntentScore>>,
}

/// One (intent, score) entry of a ranking.
#[derive(Debug, Serialize, Deserialize)]
pub struct IntentScore {
    pub intent: String,
    pub score: f64,
}

/// Result structure for the keywords command.
#[derive(Debug, Serialize, Deserialize)]
pub struct KeywordsOutput {
    pub intent: String,
    pub description: String,
    pub keywords: Vec<String>,
}

/// Result structure for the evaluate command.
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluationOutput {
    pub results: EvaluationResults,
    pub misclassified: Vec<Prediction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_path: Option<String>,
}

/// Print a serializable result in the selected output format.
pub fn output_json<T: Serialize>(result: &T, args: &RotaArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

/// Print classification output in human-readable form.
pub fn print_classification(output: &ClassificationOutput, args: &RotaArgs) {
    println!("Intent:      {}", output.intent);
    println!("Description: {}", output.description);
    println!("Score:       {:.3}", output.score);
    println!("In domain:   {}", if output.in_domain { "yes" } else { "no" });

    if let Some(top) = &output.top {
        println!();
        println!("Top intents:");
        for entry in top {
            println!("  {:<20} {:.3}", entry.intent, entry.score);
        }
    }

    if args.verbosity() > 1 {
        println!();
        println!("All scores:");
        for (intent, score) in &output.scores {
            println!("  {intent:<20} {score:.3}");
        }
    }
}

/// Print category keywords in human-readable form.
pub fn print_keywords(output: &KeywordsOutput, _args: &RotaArgs) {
    println!("Category: {} ({})", output.intent, output.description);
    if output.keywords.is_empty() {
        println!("  no trained keywords");
        return;
    }
    for keyword in &output.keywords {
        println!("  {keyword}");
    }
}

/// Whether JSON output is selected.
pub fn is_json(args: &RotaArgs) -> bool {
    matches!(args.output_format, OutputFormat::Json)
}
