//! Spell checking for Verba.
//!
//! This module provides the dictionary store, the pluggable membership
//! strategies, single-edit correction generation and the [`SpellChecker`]
//! facade that ties them together.

pub mod candidates;
pub mod checker;
pub mod dictionary;
pub mod edits;
pub mod search;

// Re-export commonly used types
pub use candidates::*;
pub use checker::*;
pub use dictionary::*;
pub use edits::*;
pub use search::*;
