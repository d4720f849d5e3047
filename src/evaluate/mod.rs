//! Evaluation of intent classification quality.
//!
//! # Example
//!
//! ```rust,no_run
//! use rota::classifier::{ClassifierConfig, VectorSpaceClassifier};
//! use rota::evaluate::IntentEvaluator;
//!
//! # fn main() -> rota::error::Result<()> {
//! let classifier =
//!     VectorSpaceClassifier::from_file("data/intents.txt", ClassifierConfig::default())?;
//!
//! let mut evaluator = IntentEvaluator::new(&classifier);
//! evaluator.prepare_test_data("data/test_intents.txt", "data/intents.txt")?;
//!
//! let results = evaluator.evaluate()?;
//! println!("accuracy: {:.2}%", results.accuracy * 100.0);
//! evaluator.save_report("evaluation_report.txt")?;
//! # Ok(())
//! # }
//! ```

pub mod evaluator;
pub mod metrics;

// Public exports
pub use evaluator::{DEFAULT_SPLIT_SEED, DEFAULT_TEST_RATIO, IntentEvaluator};
pub use metrics::{
    ClassMetrics, EvaluationResults, MacroAverages, Prediction, compute_metrics, confusion_matrix,
};
