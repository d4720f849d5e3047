//! Evaluation harness for a trained intent classifier.
//!
//! Acquires labeled test data (a dedicated test file when present,
//! otherwise a reproducible stratified split of the training file), runs
//! the classifier over it, and derives metrics, the confusion matrix, the
//! misclassified examples, and a formatted text report.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use chrono::Local;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index::sample;

use crate::classifier::corpus::load_labeled_file;
use crate::classifier::types::TrainingExample;
use crate::classifier::vsm::VectorSpaceClassifier;
use crate::error::Result;
use crate::evaluate::metrics::{
    EvaluationResults, Prediction, compute_metrics, confusion_matrix,
};

/// Default fraction of each label's examples carved out as test data.
pub const DEFAULT_TEST_RATIO: f64 = 0.2;

/// Default RNG seed for the reproducible training-data split.
pub const DEFAULT_SPLIT_SEED: u64 = 42;

/// How many misclassified examples the saved report lists.
const REPORT_MISCLASSIFIED_LIMIT: usize = 20;

/// Evaluates a trained [`VectorSpaceClassifier`] against labeled data.
///
/// Accumulates predictions internally; one evaluator instance is meant
/// for one evaluation run. All result accessors trigger evaluation lazily
/// exactly once if [`evaluate`](IntentEvaluator::evaluate) has not run yet.
pub struct IntentEvaluator<'a> {
    classifier: &'a VectorSpaceClassifier,
    test_ratio: f64,
    seed: u64,
    test_data: Vec<TrainingExample>,
    predictions: Vec<Prediction>,
    results: Option<EvaluationResults>,
}

impl std::fmt::Debug for IntentEvaluator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntentEvaluator")
            .field("test_ratio", &self.test_ratio)
            .field("seed", &self.seed)
            .field("test_examples", &self.test_data.len())
            .field("evaluated", &self.results.is_some())
            .finish()
    }
}

impl<'a> IntentEvaluator<'a> {
    /// Create an evaluator with the default split ratio and seed.
    pub fn new(classifier: &'a VectorSpaceClassifier) -> Self {
        IntentEvaluator {
            classifier,
            test_ratio: DEFAULT_TEST_RATIO,
            seed: DEFAULT_SPLIT_SEED,
            test_data: Vec::new(),
            predictions: Vec::new(),
            results: None,
        }
    }

    /// Set the fraction of training examples sampled per label by the
    /// fallback split.
    pub fn with_test_ratio(mut self, test_ratio: f64) -> Self {
        self.test_ratio = test_ratio;
        self
    }

    /// Set the RNG seed for the fallback split.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Acquire test data: load `test_file` if it exists, otherwise carve
    /// a stratified sample out of `training_file`. Returns the number of
    /// test examples.
    pub fn prepare_test_data<P: AsRef<Path>, Q: AsRef<Path>>(
        &mut self,
        test_file: P,
        training_file: Q,
    ) -> Result<usize> {
        if test_file.as_ref().exists() {
            self.load_test_file(test_file)
        } else {
            warn!(
                "test file {} not found, splitting from training data",
                test_file.as_ref().display()
            );
            self.split_from_training(training_file)
        }
    }

    /// Load test data from a dedicated `label|text` file.
    pub fn load_test_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let examples = load_labeled_file(path.as_ref())?;
        info!(
            "loaded {} test examples from {}",
            examples.len(),
            path.as_ref().display()
        );
        self.set_test_data(examples);
        Ok(self.test_data.len())
    }

    /// Carve a stratified test sample out of a training file.
    ///
    /// Examples are grouped by label; for each label,
    /// `max(1, floor(n * test_ratio))` examples are drawn with a fresh
    /// seeded RNG. Re-seeding per label makes each label's sample
    /// independent of label iteration order, so the split is fully
    /// reproducible for a fixed file, ratio, and seed.
    pub fn split_from_training<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let examples = match load_labeled_file(path.as_ref()) {
            Ok(examples) => examples,
            Err(e) => {
                warn!(
                    "training file {} could not be read for the split: {e}",
                    path.as_ref().display()
                );
                Vec::new()
            }
        };

        let mut by_label: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for example in examples {
            by_label.entry(example.intent).or_default().push(example.text);
        }

        let mut test_data = Vec::new();
        for (label, texts) in by_label {
            let n_test = ((texts.len() as f64 * self.test_ratio).floor() as usize).max(1);
            let amount = n_test.min(texts.len());

            let mut rng = StdRng::seed_from_u64(self.seed);
            for idx in sample(&mut rng, texts.len(), amount) {
                test_data.push(TrainingExample::new(label.clone(), texts[idx].clone()));
            }
        }

        info!("prepared {} test examples from training split", test_data.len());
        self.set_test_data(test_data);
        Ok(self.test_data.len())
    }

    /// Replace the test set directly (drops any cached results).
    pub fn set_test_data(&mut self, test_data: Vec<TrainingExample>) {
        self.test_data = test_data;
        self.predictions.clear();
        self.results = None;
    }

    /// The current test set.
    pub fn test_data(&self) -> &[TrainingExample] {
        &self.test_data
    }

    /// Run the classifier over every test example and compute metrics.
    ///
    /// Recomputes when called again; the lazy accessors reuse the cached
    /// results instead.
    pub fn evaluate(&mut self) -> Result<EvaluationResults> {
        if self.test_data.is_empty() {
            warn!("evaluating with an empty test set");
        }

        self.predictions = Vec::with_capacity(self.test_data.len());
        for example in &self.test_data {
            let classification = self.classifier.classify(&example.text)?;
            self.predictions.push(Prediction {
                text: example.text.clone(),
                actual: example.intent.clone(),
                predicted: classification.intent,
            });
        }

        let results = compute_metrics(&self.predictions);
        self.results = Some(results.clone());
        Ok(results)
    }

    /// Cached results, evaluating first if needed.
    pub fn results(&mut self) -> Result<EvaluationResults> {
        self.ensure_evaluated()?;
        if let Some(results) = &self.results {
            return Ok(results.clone());
        }
        self.evaluate()
    }

    /// The recorded predictions, evaluating first if needed.
    pub fn predictions(&mut self) -> Result<&[Prediction]> {
        self.ensure_evaluated()?;
        Ok(&self.predictions)
    }

    /// The confusion matrix (actual -> predicted -> count), evaluating
    /// first if needed.
    pub fn confusion_matrix(&mut self) -> Result<BTreeMap<String, BTreeMap<String, usize>>> {
        self.ensure_evaluated()?;
        Ok(confusion_matrix(&self.predictions))
    }

    /// The first `limit` misclassified predictions, evaluating first if
    /// needed.
    pub fn misclassified(&mut self, limit: usize) -> Result<Vec<Prediction>> {
        self.ensure_evaluated()?;
        Ok(self
            .predictions
            .iter()
            .filter(|p| p.actual != p.predicted)
            .take(limit)
            .cloned()
            .collect())
    }

    /// Render the full evaluation report as text.
    pub fn render_report(&mut self) -> Result<String> {
        let results = self.results()?;
        let matrix = confusion_matrix(&self.predictions);
        let misclassified = self
            .predictions
            .iter()
            .filter(|p| p.actual != p.predicted)
            .take(REPORT_MISCLASSIFIED_LIMIT)
            .cloned()
            .collect::<Vec<_>>();

        Ok(render_report_text(&results, &matrix, &misclassified))
    }

    /// Write the full evaluation report to a file (UTF-8, overwrites).
    pub fn save_report<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let report = self.render_report()?;
        fs::write(path.as_ref(), report)?;
        info!("evaluation report saved to {}", path.as_ref().display());
        Ok(())
    }

    fn ensure_evaluated(&mut self) -> Result<()> {
        if self.results.is_none() {
            self.evaluate()?;
        }
        Ok(())
    }
}

/// Format the report text from already-computed pieces.
fn render_report_text(
    results: &EvaluationResults,
    matrix: &BTreeMap<String, BTreeMap<String, usize>>,
    misclassified: &[Prediction],
) -> String {
    let mut out = String::new();
    let rule = "=".repeat(70);
    let line = "-".repeat(70);

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "INTENT CLASSIFICATION EVALUATION REPORT");
    let _ = writeln!(out, "Generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Overall metrics:");
    let _ = writeln!(out, "  Accuracy:      {:.2}%", results.accuracy * 100.0);
    let _ = writeln!(out, "  Total samples: {}", results.total_samples);
    let _ = writeln!(out);
    let _ = writeln!(out, "Macro average:");
    let _ = writeln!(out, "  Precision: {:.2}%", results.macro_avg.precision * 100.0);
    let _ = writeln!(out, "  Recall:    {:.2}%", results.macro_avg.recall * 100.0);
    let _ = writeln!(out, "  F1 score:  {:.2}%", results.macro_avg.f1 * 100.0);
    let _ = writeln!(out);
    let _ = writeln!(out, "{line}");
    let _ = writeln!(
        out,
        "{:<20} {:>11} {:>11} {:>11} {:>10}",
        "Category", "Precision", "Recall", "F1 score", "Support"
    );
    let _ = writeln!(out, "{line}");
    for (label, metrics) in &results.per_class {
        let _ = writeln!(
            out,
            "{:<20} {:>10.2}% {:>10.2}% {:>10.2}% {:>10}",
            truncate_chars(label, 20),
            metrics.precision * 100.0,
            metrics.recall * 100.0,
            metrics.f1 * 100.0,
            metrics.support
        );
    }
    let _ = writeln!(out, "{line}");

    if !matrix.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Confusion matrix (rows: actual, columns: predicted):");
        let _ = write!(out, "{:>15}", "");
        for predicted in matrix.keys() {
            let _ = write!(out, "{:>10}", truncate_chars(predicted, 8));
        }
        let _ = writeln!(out);
        for (actual, row) in matrix {
            let _ = write!(out, "{:<15}", truncate_chars(actual, 14));
            for count in row.values() {
                if *count > 0 {
                    let _ = write!(out, "{count:>10}");
                } else {
                    let _ = write!(out, "{:>10}", ".");
                }
            }
            let _ = writeln!(out);
        }
    }

    if !misclassified.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Misclassified examples:");
        let _ = writeln!(out, "{line}");
        for prediction in misclassified {
            let _ = writeln!(out, "  Text: {}", truncate_chars(&prediction.text, 50));
            let _ = writeln!(
                out,
                "    actual: {} -> predicted: {}",
                prediction.actual, prediction.predicted
            );
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{rule}");

    out
}

/// Truncate a string to at most `max` characters (char count, not bytes).
fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
