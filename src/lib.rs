//! # Rota
//!
//! A TF-IDF + cosine-similarity intent classification engine with an
//! evaluation harness, for routing user text in a domain-restricted
//! conversational assistant.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Flat `label|text` training/test file format
//! - Centroid-based vector space classification with deterministic
//!   tie-breaking and greeting/out-of-scope fallbacks
//! - Precision/recall/F1, macro averages, accuracy, and confusion matrix
//!   evaluation with reproducible train/test splitting
//! - Text analysis pipeline with pluggable tokenizers and filters

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod error;
pub mod evaluate;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
