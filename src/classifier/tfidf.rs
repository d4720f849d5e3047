//! Sparse TF-IDF model for text feature extraction.

use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use log::debug;

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;

/// A sparse vector mapping tokens to weights.
pub type SparseVector = AHashMap<String, f64>;

/// TF-IDF model: vocabulary plus inverse document frequencies, fixed
/// after [`fit`](TfIdfModel::fit).
pub struct TfIdfModel {
    /// Vocabulary: token -> stable index in first-seen order.
    vocabulary: AHashMap<String, usize>,
    /// Inverse document frequency per token.
    idf: AHashMap<String, f64>,
    /// Total number of documents seen during training.
    n_documents: usize,
    /// Analyzer for tokenization, shared by training and inference.
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TfIdfModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfModel")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl TfIdfModel {
    /// Create a new, unfitted model with the given analyzer.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        TfIdfModel {
            vocabulary: AHashMap::new(),
            idf: AHashMap::new(),
            n_documents: 0,
            analyzer,
        }
    }

    /// Fit the model on training documents.
    ///
    /// Vocabulary indices are assigned in first-seen token order across
    /// the whole corpus. IDF uses the smoothed form
    /// `ln(N / (df + 1)) + 1`, where `df` counts documents containing the
    /// token at least once.
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        self.n_documents = documents.len();

        let mut vocabulary: AHashMap<String, usize> = AHashMap::new();
        let mut document_frequency: AHashMap<String, usize> = AHashMap::new();

        for doc in documents {
            let tokens = self.tokenize(doc)?;

            for token in &tokens {
                if !vocabulary.contains_key(token) {
                    let idx = vocabulary.len();
                    vocabulary.insert(token.clone(), idx);
                }
            }

            let unique_tokens: AHashSet<&String> = tokens.iter().collect();
            for token in unique_tokens {
                *document_frequency.entry(token.clone()).or_insert(0) += 1;
            }
        }

        let n = self.n_documents as f64;
        let mut idf: AHashMap<String, f64> = AHashMap::with_capacity(document_frequency.len());
        for (token, df) in document_frequency {
            idf.insert(token, (n / (df as f64 + 1.0)).ln() + 1.0);
        }

        debug!(
            "fitted tf-idf model: {} documents, {} vocabulary entries",
            self.n_documents,
            vocabulary.len()
        );

        self.vocabulary = vocabulary;
        self.idf = idf;

        Ok(())
    }

    /// Transform text into a sparse TF-IDF vector.
    ///
    /// Term frequency is L1-normalized (raw count / token total). Tokens
    /// unseen at fit time get a neutral IDF of 1.0, so they contribute to
    /// the vector's magnitude but can never match a trained centroid.
    pub fn transform(&self, text: &str) -> Result<SparseVector> {
        let tokens = self.tokenize(text)?;

        let total = tokens.len() as f64;
        if tokens.is_empty() {
            return Ok(SparseVector::new());
        }

        let mut tf: SparseVector = SparseVector::new();
        for token in tokens {
            *tf.entry(token).or_insert(0.0) += 1.0;
        }

        let mut tfidf = SparseVector::with_capacity(tf.len());
        for (token, count) in tf {
            let idf = self.idf.get(&token).copied().unwrap_or(1.0);
            tfidf.insert(token, (count / total) * idf);
        }

        Ok(tfidf)
    }

    /// Tokenize text through the shared analyzer.
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let tokens: Vec<String> = self.analyzer.analyze(text)?.map(|token| token.text).collect();
        Ok(tokens)
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Get the number of training documents seen during fit.
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    /// Get the IDF weight of a token, if it was seen during fit.
    pub fn idf(&self, token: &str) -> Option<f64> {
        self.idf.get(token).copied()
    }
}

/// Cosine similarity between two sparse vectors.
///
/// The dot product runs over the key intersection only; magnitudes are
/// Euclidean norms over all entries of each vector. Returns 0.0 when there
/// is no token overlap or either magnitude is zero.
pub fn cosine_similarity(vec1: &SparseVector, vec2: &SparseVector) -> f64 {
    let (small, large) = if vec1.len() <= vec2.len() {
        (vec1, vec2)
    } else {
        (vec2, vec1)
    };

    let mut dot_product = 0.0;
    let mut overlap = false;
    for (token, weight) in small {
        if let Some(other) = large.get(token) {
            dot_product += weight * other;
            overlap = true;
        }
    }

    if !overlap {
        return 0.0;
    }

    let mag1 = vec1.values().map(|v| v * v).sum::<f64>().sqrt();
    let mag2 = vec2.values().map(|v| v * v).sum::<f64>().sqrt();

    if mag1 == 0.0 || mag2 == 0.0 {
        return 0.0;
    }

    dot_product / (mag1 * mag2)
}
