//! Classification quality metrics.
//!
//! Per-class precision/recall/F1/support, macro averages, overall
//! accuracy, and the confusion matrix. Every metric whose denominator is
//! zero is defined as 0.0; nothing here can divide by zero.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// One recorded prediction: the input text, its ground-truth label, and
/// the label the classifier chose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// Input text.
    pub text: String,
    /// Ground-truth label.
    pub actual: String,
    /// Predicted label.
    pub predicted: String,
}

/// Precision/recall/F1 and support for a single class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    /// TP / (TP + FP); 0.0 when the class was never predicted.
    pub precision: f64,
    /// TP / (TP + FN); 0.0 when the class has no true examples.
    pub recall: f64,
    /// Harmonic mean of precision and recall; 0.0 when both are 0.
    pub f1: f64,
    /// Number of test examples whose true label is this class.
    pub support: usize,
}

/// Unweighted means of the per-class metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroAverages {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// Full metrics record for one evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResults {
    /// Metrics per observed label (union of actual and predicted labels).
    pub per_class: BTreeMap<String, ClassMetrics>,
    /// Macro-averaged precision/recall/F1.
    pub macro_avg: MacroAverages,
    /// Fraction of predictions where actual == predicted.
    pub accuracy: f64,
    /// Total number of test examples.
    pub total_samples: usize,
}

/// Compute per-class metrics, macro averages, and accuracy over a set of
/// recorded predictions.
pub fn compute_metrics(predictions: &[Prediction]) -> EvaluationResults {
    let mut labels: BTreeSet<&str> = BTreeSet::new();
    for prediction in predictions {
        labels.insert(&prediction.actual);
        labels.insert(&prediction.predicted);
    }

    let mut per_class: BTreeMap<String, ClassMetrics> = BTreeMap::new();
    for label in labels {
        let mut tp = 0usize;
        let mut fp = 0usize;
        let mut fn_ = 0usize;

        for prediction in predictions {
            let actual_match = prediction.actual == label;
            let predicted_match = prediction.predicted == label;
            match (actual_match, predicted_match) {
                (true, true) => tp += 1,
                (false, true) => fp += 1,
                (true, false) => fn_ += 1,
                (false, false) => {}
            }
        }

        let precision = ratio(tp, tp + fp);
        let recall = ratio(tp, tp + fn_);
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        per_class.insert(
            label.to_string(),
            ClassMetrics {
                precision,
                recall,
                f1,
                support: tp + fn_,
            },
        );
    }

    let n_classes = per_class.len();
    let macro_avg = if n_classes > 0 {
        let n = n_classes as f64;
        MacroAverages {
            precision: per_class.values().map(|m| m.precision).sum::<f64>() / n,
            recall: per_class.values().map(|m| m.recall).sum::<f64>() / n,
            f1: per_class.values().map(|m| m.f1).sum::<f64>() / n,
        }
    } else {
        MacroAverages {
            precision: 0.0,
            recall: 0.0,
            f1: 0.0,
        }
    };

    let correct = predictions
        .iter()
        .filter(|p| p.actual == p.predicted)
        .count();
    let accuracy = ratio(correct, predictions.len());

    EvaluationResults {
        per_class,
        macro_avg,
        accuracy,
        total_samples: predictions.len(),
    }
}

/// Build the square confusion matrix (actual -> predicted -> count) over
/// the sorted union of observed labels, zero-filled.
pub fn confusion_matrix(predictions: &[Prediction]) -> BTreeMap<String, BTreeMap<String, usize>> {
    let mut labels: BTreeSet<&str> = BTreeSet::new();
    for prediction in predictions {
        labels.insert(&prediction.actual);
        labels.insert(&prediction.predicted);
    }

    let mut matrix: BTreeMap<String, BTreeMap<String, usize>> = BTreeMap::new();
    for actual in &labels {
        let row: BTreeMap<String, usize> =
            labels.iter().map(|predicted| (predicted.to_string(), 0)).collect();
        matrix.insert(actual.to_string(), row);
    }

    for prediction in predictions {
        if let Some(row) = matrix.get_mut(&prediction.actual)
            && let Some(cell) = row.get_mut(&prediction.predicted)
        {
            *cell += 1;
        }
    }

    matrix
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator > 0 {
        numerator as f64 / denominator as f64
    } else {
        0.0
    }
}
