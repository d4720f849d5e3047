//! Tokenizer implementations for text analysis.

use std::sync::Arc;

use regex::Regex;

use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, RotaError};

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A tokenizer for Turkish (and other Latin-derived) text.
///
/// Every character that is not a word character, whitespace, or a Turkish
/// diacritic is replaced with a space, and the result is split on
/// whitespace. Case is left untouched; lowercasing is a filter concern.
#[derive(Clone, Debug)]
pub struct TurkishTokenizer {
    /// Matches characters that do not carry token content.
    strip_pattern: Arc<Regex>,
}

impl TurkishTokenizer {
    /// Create a new Turkish tokenizer.
    pub fn new() -> Result<Self> {
        let regex = Regex::new(r"[^\w\sğüşıöçĞÜŞİÖÇ]")
            .map_err(|e| RotaError::analysis(format!("Invalid strip pattern: {e}")))?;

        Ok(TurkishTokenizer {
            strip_pattern: Arc::new(regex),
        })
    }

    /// Get the strip pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.strip_pattern.as_str()
    }
}

impl Tokenizer for TurkishTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let stripped = self.strip_pattern.replace_all(text, " ");
        let tokens: Vec<Token> = stripped
            .split_whitespace()
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "turkish"
    }
}
