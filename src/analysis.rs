//! Text analysis for Verba.
//!
//! Turns raw sentences into the lowercase word tokens the spell checker works on.

pub mod tokenizer;
