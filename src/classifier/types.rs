//! Common types for intent classification.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single labeled training (or test) example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingExample {
    /// Intent label (lower-cased).
    pub intent: String,
    /// Example sentence text.
    pub text: String,
}

impl TrainingExample {
    /// Create a new training example.
    pub fn new<I: Into<String>, T: Into<String>>(intent: I, text: T) -> Self {
        TrainingExample {
            intent: intent.into(),
            text: text.into(),
        }
    }
}

/// The result of classifying one input text.
///
/// `score` is the cosine similarity of the best-matching intent as
/// originally selected, even when the predicted label was overridden by
/// the low-confidence greeting fallback. `scores` holds the similarity of
/// every trained intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    /// Predicted intent label.
    pub intent: String,
    /// Confidence score of the originally selected best match.
    pub score: f64,
    /// Similarity score per trained intent.
    pub scores: HashMap<String, f64>,
}
