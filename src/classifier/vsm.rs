//! Vector space model intent classifier.
//!
//! Maps free-form input text to one of a fixed set of learned categories
//! using TF-IDF centroid vectors and cosine similarity, with two reserved
//! pseudo-categories: the greeting label (null-signal or low-confidence
//! input) and the out-of-scope label (no trained intents at all).

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use log::{info, warn};

use crate::analysis::analyzer::{Analyzer, standard_analyzer};
use crate::classifier::config::ClassifierConfig;
use crate::classifier::corpus::load_labeled_file;
use crate::classifier::tfidf::{SparseVector, TfIdfModel, cosine_similarity};
use crate::classifier::types::{Classification, TrainingExample};
use crate::error::Result;

/// TF-IDF + cosine-similarity intent classifier.
///
/// Read-only after construction; safe to share across threads.
pub struct VectorSpaceClassifier {
    config: ClassifierConfig,
    model: TfIdfModel,
    examples: Vec<TrainingExample>,
    /// Centroid per intent, in first-seen label order. This ordering is
    /// the tie-break for max-score selection.
    intent_vectors: Vec<(String, SparseVector)>,
}

impl std::fmt::Debug for VectorSpaceClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorSpaceClassifier")
            .field("examples", &self.examples.len())
            .field("intents", &self.intent_vectors.len())
            .field("model", &self.model)
            .finish()
    }
}

impl VectorSpaceClassifier {
    /// Train a classifier from a `label|text` file with the standard
    /// analysis pipeline.
    ///
    /// A missing or unreadable file is logged as a warning and yields a
    /// classifier with empty state; every subsequent [`classify`] call
    /// then returns the greeting fallback.
    ///
    /// [`classify`]: VectorSpaceClassifier::classify
    pub fn from_file<P: AsRef<Path>>(path: P, config: ClassifierConfig) -> Result<Self> {
        let examples = match load_labeled_file(path.as_ref()) {
            Ok(examples) => examples,
            Err(e) => {
                warn!(
                    "training file {} could not be read: {e}; starting with empty state",
                    path.as_ref().display()
                );
                Vec::new()
            }
        };

        Self::from_examples(examples, config)
    }

    /// Train a classifier from already-loaded examples with the standard
    /// analysis pipeline.
    pub fn from_examples(examples: Vec<TrainingExample>, config: ClassifierConfig) -> Result<Self> {
        let analyzer: Arc<dyn Analyzer> = Arc::new(standard_analyzer()?);
        Self::with_analyzer(examples, config, analyzer)
    }

    /// Train a classifier with a caller-provided analyzer.
    ///
    /// The same analyzer instance drives training and inference, keeping
    /// the token filter symmetric between the two.
    pub fn with_analyzer(
        examples: Vec<TrainingExample>,
        config: ClassifierConfig,
        analyzer: Arc<dyn Analyzer>,
    ) -> Result<Self> {
        let documents: Vec<String> = examples.iter().map(|e| e.text.clone()).collect();

        let mut model = TfIdfModel::new(analyzer);
        model.fit(&documents)?;

        // Group example texts by label, preserving first-seen label order.
        let mut intent_docs: Vec<(String, Vec<&str>)> = Vec::new();
        for example in &examples {
            match intent_docs.iter_mut().find(|(label, _)| *label == example.intent) {
                Some((_, docs)) => docs.push(&example.text),
                None => intent_docs.push((example.intent.clone(), vec![&example.text])),
            }
        }

        let mut intent_vectors: Vec<(String, SparseVector)> = Vec::with_capacity(intent_docs.len());
        for (label, docs) in intent_docs {
            let mut combined = SparseVector::new();
            for doc in &docs {
                for (token, weight) in model.transform(doc)? {
                    *combined.entry(token).or_insert(0.0) += weight;
                }
            }

            let num_docs = docs.len() as f64;
            for weight in combined.values_mut() {
                *weight /= num_docs;
            }

            intent_vectors.push((label, combined));
        }

        info!(
            "trained intent classifier: {} examples, {} categories, {} vocabulary entries",
            examples.len(),
            intent_vectors.len(),
            model.vocabulary_size()
        );

        Ok(VectorSpaceClassifier {
            config,
            model,
            examples,
            intent_vectors,
        })
    }

    /// Classify input text.
    ///
    /// Returns the best-matching intent, its cosine similarity, and the
    /// full per-intent score map. Policy:
    ///
    /// - input producing no tokens at all classifies as the greeting
    ///   label with a fixed score of 0.5;
    /// - with no trained intents, the out-of-scope label with score 0.0;
    /// - a best score below the greeting threshold is overridden to the
    ///   greeting label, while the original best score and the full score
    ///   map are preserved.
    ///
    /// Ties resolve to the earliest trained label (first-seen order), so
    /// results are deterministic for a fixed training file.
    pub fn classify(&self, text: &str) -> Result<Classification> {
        let input_vector = self.model.transform(text)?;

        if input_vector.is_empty() {
            // Null-signal input is conversational noise, not a query.
            let mut scores = HashMap::with_capacity(1);
            scores.insert(self.config.greeting_label.clone(), 0.5);
            return Ok(Classification {
                intent: self.config.greeting_label.clone(),
                score: 0.5,
                scores,
            });
        }

        if self.intent_vectors.is_empty() {
            return Ok(Classification {
                intent: self.config.out_of_scope_label.clone(),
                score: 0.0,
                scores: HashMap::new(),
            });
        }

        let mut scores: HashMap<String, f64> = HashMap::with_capacity(self.intent_vectors.len());
        let mut best_label = self.config.out_of_scope_label.as_str();
        let mut best_score = f64::NEG_INFINITY;

        for (label, centroid) in &self.intent_vectors {
            let similarity = cosine_similarity(&input_vector, centroid);
            scores.insert(label.clone(), similarity);
            if similarity > best_score {
                best_label = label.as_str();
                best_score = similarity;
            }
        }

        let intent = if best_score < self.config.greeting_threshold {
            // Weak signal is treated as non-informative rather than as a
            // confident out-of-scope classification.
            self.config.greeting_label.clone()
        } else {
            best_label.to_string()
        };

        Ok(Classification {
            intent,
            score: best_score,
            scores,
        })
    }

    /// Whether the text classifies into the configured domain allow-list
    /// with a score above the domain threshold.
    ///
    /// The threshold here (default 0.15) is stricter than the greeting
    /// fallback threshold (default 0.10); both are kept independent.
    pub fn is_in_domain(&self, text: &str) -> Result<bool> {
        let classification = self.classify(text)?;
        Ok(self.config.domain_labels.contains(&classification.intent)
            && classification.score > self.config.domain_threshold)
    }

    /// The `n` highest-scoring intents, descending by score. Ties keep
    /// first-seen label order.
    pub fn top_intents(&self, text: &str, n: usize) -> Result<Vec<(String, f64)>> {
        let classification = self.classify(text)?;

        let mut ranked: Vec<(String, f64)> = Vec::with_capacity(classification.scores.len());
        for (label, _) in &self.intent_vectors {
            if let Some(&score) = classification.scores.get(label) {
                ranked.push((label.clone(), score));
            }
        }
        // Fallback pseudo-scores (e.g. the greeting entry for null-signal
        // input) have no centroid; append them after the trained labels.
        for (label, score) in &classification.scores {
            if !self.intent_vectors.iter().any(|(l, _)| l == label) {
                ranked.push((label.clone(), *score));
            }
        }

        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(n);

        Ok(ranked)
    }

    /// Up to 20 strongest centroid tokens for a category, by descending
    /// weight. Empty for labels without a centroid.
    pub fn category_keywords(&self, intent: &str) -> Vec<String> {
        let Some((_, centroid)) = self.intent_vectors.iter().find(|(label, _)| label == intent)
        else {
            return Vec::new();
        };

        let mut weighted: Vec<(&String, f64)> =
            centroid.iter().map(|(token, weight)| (token, *weight)).collect();
        weighted.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });

        weighted.into_iter().take(20).map(|(token, _)| token.clone()).collect()
    }

    /// Display description for an intent label.
    pub fn intent_description(&self, intent: &str) -> &str {
        self.config.description(intent)
    }

    /// The trained intent labels, in first-seen order.
    pub fn labels(&self) -> Vec<&str> {
        self.intent_vectors.iter().map(|(label, _)| label.as_str()).collect()
    }

    /// The training examples this classifier was built from.
    pub fn examples(&self) -> &[TrainingExample] {
        &self.examples
    }

    /// Size of the trained vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.model.vocabulary_size()
    }

    /// The configuration in effect.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier_from(lines: &[(&str, &str)]) -> VectorSpaceClassifier {
        let examples: Vec<TrainingExample> = lines
            .iter()
            .map(|(intent, text)| TrainingExample::new(*intent, *text))
            .collect();
        VectorSpaceClassifier::from_examples(examples, ClassifierConfig::default()).unwrap()
    }

    #[test]
    fn test_empty_input_greeting_fallback() {
        let classifier = classifier_from(&[
            ("motor", "motor calismiyor"),
            ("fren", "fren sertlesti"),
        ]);

        let result = classifier.classify("").unwrap();
        assert_eq!(result.intent, "selamlama");
        assert_eq!(result.score, 0.5);
        assert_eq!(result.scores.len(), 1);
        assert_eq!(result.scores["selamlama"], 0.5);
    }

    #[test]
    fn test_single_char_input_is_null_signal() {
        let classifier = classifier_from(&[("motor", "motor calismiyor")]);

        // Tokens of length 1 are filtered, leaving an empty vector.
        let result = classifier.classify("a b c").unwrap();
        assert_eq!(result.intent, "selamlama");
        assert_eq!(result.score, 0.5);
    }

    #[test]
    fn test_exact_training_text_scores_near_one() {
        let classifier = classifier_from(&[
            ("motor", "motor calismiyor"),
            ("fren", "fren sertlesti"),
        ]);

        let result = classifier.classify("motor calismiyor").unwrap();
        assert_eq!(result.intent, "motor");
        assert!(result.score > 0.99, "self-similarity was {}", result.score);
        assert_eq!(result.scores.len(), 2);
    }

    #[test]
    fn test_no_overlap_falls_back_to_greeting_with_original_score() {
        let classifier = classifier_from(&[
            ("motor", "motor calismiyor"),
            ("fren", "fren sertlesti"),
        ]);

        let result = classifier.classify("bugun hava cok guzel").unwrap();
        assert_eq!(result.intent, "selamlama");
        // The original best score is preserved, not replaced with 0.5.
        assert_eq!(result.score, 0.0);
        assert_eq!(result.scores["motor"], 0.0);
        assert_eq!(result.scores["fren"], 0.0);
    }

    #[test]
    fn test_empty_classifier_greeting_fallback() {
        let classifier =
            VectorSpaceClassifier::from_examples(Vec::new(), ClassifierConfig::default()).unwrap();

        let result = classifier.classify("motor calismiyor").unwrap();
        // No trained centroids: every token-bearing input is out of scope.
        assert_eq!(result.intent, "kapsam_disi");
        assert_eq!(result.score, 0.0);
        assert!(result.scores.is_empty());
    }

    #[test]
    fn test_missing_file_degrades_to_empty_state() {
        let classifier = VectorSpaceClassifier::from_file(
            "/nonexistent/intents.txt",
            ClassifierConfig::default(),
        )
        .unwrap();

        assert!(classifier.examples().is_empty());
        let result = classifier.classify("").unwrap();
        assert_eq!(result.intent, "selamlama");
        assert_eq!(result.score, 0.5);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let classifier = classifier_from(&[
            ("motor", "motor calismiyor"),
            ("motor", "motor yag yakiyor"),
            ("fren", "fren sertlesti"),
        ]);

        let first = classifier.classify("motor yag problemi").unwrap();
        for _ in 0..5 {
            let again = classifier.classify("motor yag problemi").unwrap();
            assert_eq!(again.intent, first.intent);
            assert_eq!(again.score, first.score);
            assert_eq!(again.scores, first.scores);
        }
    }

    #[test]
    fn test_tie_breaks_to_first_seen_label() {
        // Two labels with identical token sets: both centroids score
        // identically against the shared text.
        let classifier = classifier_from(&[
            ("motor", "ortak kelime"),
            ("fren", "ortak kelime"),
        ]);

        let result = classifier.classify("ortak kelime").unwrap();
        assert_eq!(result.intent, "motor");
        assert_eq!(result.scores["motor"], result.scores["fren"]);
    }

    #[test]
    fn test_is_in_domain() {
        let classifier = classifier_from(&[
            ("motor", "motor calismiyor"),
            ("fren", "fren sertlesti"),
        ]);

        assert!(classifier.is_in_domain("motor calismiyor").unwrap());
        assert!(!classifier.is_in_domain("bugun hava cok guzel").unwrap());
        assert!(!classifier.is_in_domain("").unwrap());
    }

    #[test]
    fn test_greeting_label_never_in_domain() {
        let classifier = classifier_from(&[("selamlama", "merhaba nasilsin")]);

        // Classifies as the trained greeting label with a high score, but
        // the label is not in the domain allow-list.
        let result = classifier.classify("merhaba nasilsin").unwrap();
        assert_eq!(result.intent, "selamlama");
        assert!(!classifier.is_in_domain("merhaba nasilsin").unwrap());
    }

    #[test]
    fn test_top_intents_ordering() {
        let classifier = classifier_from(&[
            ("motor", "motor calismiyor"),
            ("fren", "fren sertlesti"),
            ("klima", "klima sogutmuyor"),
        ]);

        let top = classifier.top_intents("motor calismiyor", 2).unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].0, "motor");
        assert!(top[0].1 >= top[1].1);
    }

    #[test]
    fn test_top_intents_empty_input() {
        let classifier = classifier_from(&[("motor", "motor calismiyor")]);

        let top = classifier.top_intents("", 3).unwrap();
        assert_eq!(top, vec![("selamlama".to_string(), 0.5)]);
    }

    #[test]
    fn test_category_keywords() {
        let classifier = classifier_from(&[
            ("motor", "motor calismiyor motor yag"),
            ("fren", "fren sertlesti"),
        ]);

        let keywords = classifier.category_keywords("motor");
        assert!(!keywords.is_empty());
        assert!(keywords.len() <= 20);
        // "motor" has the highest combined weight in its own centroid.
        assert_eq!(keywords[0], "motor");

        assert!(classifier.category_keywords("bilinmeyen").is_empty());
    }

    #[test]
    fn test_intent_description() {
        let classifier = classifier_from(&[("motor", "motor calismiyor")]);
        assert_eq!(classifier.intent_description("motor"), "Motor Sorunları");
        assert_eq!(classifier.intent_description("uzay"), "Bilinmeyen");
    }

    #[test]
    fn test_labels_first_seen_order() {
        let classifier = classifier_from(&[
            ("fren", "fren sertlesti"),
            ("motor", "motor calismiyor"),
            ("fren", "fren pedali titriyor"),
        ]);

        assert_eq!(classifier.labels(), vec!["fren", "motor"]);
    }
}
