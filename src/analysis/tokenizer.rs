//! Sentence tokenizer used by the spell checker.
//!
//! Sentences are split on whitespace plus a configurable set of punctuation
//! delimiters, every token is lowercased, and empty tokens are dropped.
//!
//! # Examples
//!
//! ```
//! use verba::analysis::tokenizer::DelimiterTokenizer;
//!
//! let tokenizer = DelimiterTokenizer::new();
//! assert_eq!(tokenizer.tokenize("Hello, world!"), vec!["hello", "world"]);
//! ```

use std::sync::Arc;

use regex::Regex;

use crate::error::{Result, VerbaError};

/// Punctuation that separates words in addition to whitespace.
pub const DEFAULT_DELIMITERS: &str = " ,;:!.";

/// A regex-backed tokenizer that splits text on a set of delimiter characters.
#[derive(Clone, Debug)]
pub struct DelimiterTokenizer {
    /// Compiled `[\s<delimiters>]+` pattern
    pattern: Arc<Regex>,
    /// The delimiter characters the pattern was built from
    delimiters: String,
}

impl DelimiterTokenizer {
    /// Create a tokenizer with the default delimiter set.
    pub fn new() -> Self {
        Self::with_delimiters(DEFAULT_DELIMITERS)
            .expect("Default delimiter pattern should be valid")
    }

    /// Create a tokenizer that splits on whitespace and the given characters.
    pub fn with_delimiters(delimiters: &str) -> Result<Self> {
        let pattern = Self::pattern_for(delimiters);
        let regex = Regex::new(&pattern).map_err(|e| {
            VerbaError::config(format!("Invalid delimiter set {delimiters:?}: {e}"))
        })?;

        Ok(DelimiterTokenizer {
            pattern: Arc::new(regex),
            delimiters: delimiters.to_string(),
        })
    }

    /// Get the delimiter characters used by this tokenizer.
    pub fn delimiters(&self) -> &str {
        &self.delimiters
    }

    /// Split a sentence into lowercase, non-empty tokens in their original order.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.pattern
            .split(text)
            .filter(|token| !token.is_empty())
            .map(|token| token.to_lowercase())
            .collect()
    }

    fn pattern_for(delimiters: &str) -> String {
        let escaped: String = delimiters
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| regex::escape(&c.to_string()))
            .collect();
        format!(r"[\s{escaped}]+")
    }
}

impl Default for DelimiterTokenizer {
    fn default() -> Self {
        Self::new()
    }
}
