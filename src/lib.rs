//! # Verba
//!
//! A dictionary-backed spell checker for Rust.
//!
//! ## Features
//!
//! - Immutable, sorted word dictionary with linear and binary lookup
//! - Search strategy that can be swapped at runtime
//! - Single-edit corrections: removal, substitution, adjacent swap, insertion
//! - Sentence tokenization and per-word correction reports
//!
//! ## Example
//!
//! ```
//! use verba::spelling::{Dictionary, SearchAlgorithm, SpellChecker};
//!
//! let dictionary = Dictionary::from_words(["cat", "cot", "cart"]);
//! let mut checker = SpellChecker::with_dictionary(dictionary);
//!
//! assert!(checker.word_is_correct("cot"));
//! checker.set_search_algorithm(SearchAlgorithm::Linear);
//! assert_eq!(checker.correct_by_removing("cart").into_vec(), vec!["cat"]);
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod spelling;

pub mod prelude {
    pub use crate::error::{Result, VerbaError};
    pub use crate::spelling::{
        CandidateSet, CheckerConfig, CorrectionReport, Dictionary, EditMethod, SearchAlgorithm,
        SpellChecker, Verdict,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
