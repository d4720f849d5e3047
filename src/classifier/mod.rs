//! TF-IDF vector space intent classifier.
//!
//! # Architecture
//!
//! - [`corpus`]: parsing of `label|text` training/test files
//! - [`tfidf`]: sparse TF-IDF model and cosine similarity
//! - [`config`]: injected label and threshold configuration
//! - [`vsm`]: the classifier built on per-intent centroid vectors
//!
//! # Example
//!
//! ```rust,no_run
//! use rota::classifier::{ClassifierConfig, VectorSpaceClassifier};
//!
//! # fn main() -> rota::error::Result<()> {
//! let classifier =
//!     VectorSpaceClassifier::from_file("data/intents.txt", ClassifierConfig::default())?;
//!
//! let result = classifier.classify("arabamın motoru çalışmıyor")?;
//! println!("{} ({:.3})", result.intent, result.score);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod corpus;
pub mod tfidf;
pub mod types;
pub mod vsm;

// Public exports
pub use config::ClassifierConfig;
pub use corpus::{load_labeled_file, parse_labeled_line};
pub use tfidf::{SparseVector, TfIdfModel, cosine_similarity};
pub use types::{Classification, TrainingExample};
pub use vsm::VectorSpaceClassifier;
