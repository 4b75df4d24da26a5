//! The spell checker facade.
//!
//! [`SpellChecker`] owns an immutable [`Dictionary`], a [`SearchAlgorithm`]
//! that can be swapped at any time, a [`CorrectionGenerator`] and the sentence
//! tokenizer. Every query is a pure function of the word, the current
//! algorithm and the dictionary contents.

use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Instant;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::{DEFAULT_DELIMITERS, DelimiterTokenizer};
use crate::error::Result;
use crate::spelling::candidates::CandidateSet;
use crate::spelling::dictionary::Dictionary;
use crate::spelling::edits::{Alphabet, CorrectionGenerator, EditMethod};
use crate::spelling::search::SearchAlgorithm;

/// Configuration for the spell checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Strategy used for membership tests.
    pub search_algorithm: SearchAlgorithm,
    /// Letters tried by substitution and insertion.
    pub alphabet: Alphabet,
    /// Characters that separate words in addition to whitespace.
    pub delimiters: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        CheckerConfig {
            search_algorithm: SearchAlgorithm::default(),
            alphabet: Alphabet::english(),
            delimiters: DEFAULT_DELIMITERS.to_string(),
        }
    }
}

impl CheckerConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: CheckerConfig = serde_json::from_str(&content)?;
        debug!("Loaded checker config from {}", path.as_ref().display());
        Ok(config)
    }
}

/// Outcome of checking one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "status", content = "candidates")]
pub enum Verdict {
    /// The word is in the dictionary.
    Ok,
    /// The word is unknown; these are its single-edit corrections.
    Corrections(CandidateSet),
}

impl Verdict {
    pub fn is_ok(&self) -> bool {
        matches!(self, Verdict::Ok)
    }
}

/// A word and its verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordReport {
    pub word: String,
    pub verdict: Verdict,
}

impl fmt::Display for WordReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.verdict {
            Verdict::Ok => write!(f, "{} - OK", self.word),
            Verdict::Corrections(candidates) => write!(
                f,
                "Possible corrections for '{}' : [{}]",
                self.word,
                candidates.as_slice().join(", ")
            ),
        }
    }
}

/// Verdicts for every word of a sentence, in sentence order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionReport {
    pub entries: Vec<WordReport>,
}

impl CorrectionReport {
    /// Number of words found in the dictionary.
    pub fn correct_count(&self) -> usize {
        self.entries.iter().filter(|e| e.verdict.is_ok()).count()
    }

    /// Words that were not found in the dictionary.
    pub fn misspelled(&self) -> impl Iterator<Item = &WordReport> {
        self.entries.iter().filter(|e| !e.verdict.is_ok())
    }

    /// One rendered line per word.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

/// Dictionary-backed spell checker.
#[derive(Debug, Clone)]
pub struct SpellChecker {
    dictionary: Dictionary,
    search_algorithm: SearchAlgorithm,
    generator: CorrectionGenerator,
    tokenizer: DelimiterTokenizer,
}

impl SpellChecker {
    /// Create a spell checker over `dictionary`.
    pub fn new(dictionary: Dictionary, config: CheckerConfig) -> Result<Self> {
        let tokenizer = DelimiterTokenizer::with_delimiters(&config.delimiters)?;

        Ok(SpellChecker {
            dictionary,
            search_algorithm: config.search_algorithm,
            generator: CorrectionGenerator::with_alphabet(config.alphabet),
            tokenizer,
        })
    }

    /// Create a spell checker with the default configuration.
    pub fn with_dictionary(dictionary: Dictionary) -> Self {
        SpellChecker {
            dictionary,
            search_algorithm: SearchAlgorithm::default(),
            generator: CorrectionGenerator::new(),
            tokenizer: DelimiterTokenizer::new(),
        }
    }

    /// Load the word list at `path` and build a spell checker over it.
    ///
    /// Fails with [`VerbaError::Load`](crate::error::VerbaError::Load) if the word list cannot be read.
    pub fn from_path<P: AsRef<Path>>(path: P, search_algorithm: SearchAlgorithm) -> Result<Self> {
        let dictionary = Dictionary::load_from_file(path)?;
        let mut checker = Self::with_dictionary(dictionary);
        checker.set_search_algorithm(search_algorithm);
        Ok(checker)
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn search_algorithm(&self) -> SearchAlgorithm {
        self.search_algorithm
    }

    /// Switch the membership strategy. The dictionary is left untouched.
    pub fn set_search_algorithm(&mut self, search_algorithm: SearchAlgorithm) {
        self.search_algorithm = search_algorithm;
    }

    pub fn alphabet(&self) -> &Alphabet {
        self.generator.alphabet()
    }

    /// Check whether `word` is in the dictionary using the current strategy.
    pub fn word_is_correct(&self, word: &str) -> bool {
        self.search_algorithm.contains(&self.dictionary, word)
    }

    pub fn correct_by_removing(&self, word: &str) -> CandidateSet {
        self.generator.by_removing(word, |w| self.word_is_correct(w))
    }

    pub fn correct_by_substituting(&self, word: &str) -> CandidateSet {
        self.generator.by_substituting(word, |w| self.word_is_correct(w))
    }

    pub fn correct_by_swapping(&self, word: &str) -> CandidateSet {
        self.generator.by_swapping(word, |w| self.word_is_correct(w))
    }

    pub fn correct_by_adding(&self, word: &str) -> CandidateSet {
        self.generator.by_adding(word, |w| self.word_is_correct(w))
    }

    /// All single-edit corrections: removals, substitutions, swaps, then insertions.
    pub fn correct_using_all_methods(&self, word: &str) -> CandidateSet {
        self.generator.all_methods(word, |w| self.word_is_correct(w))
    }

    /// Corrections for the selected edit family.
    pub fn correct_with(&self, method: EditMethod, word: &str) -> CandidateSet {
        self.generator
            .generate(method, word, |w| self.word_is_correct(w))
    }

    /// Split a sentence into lowercase words.
    pub fn tokenize(&self, sentence: &str) -> Vec<String> {
        let words = self.tokenizer.tokenize(sentence);
        debug!("Tokenized sentence into {words:?}");
        words
    }

    /// Count the words of `sentence` found in the dictionary.
    ///
    /// The time taken by the counting pass is logged at info level.
    pub fn count_correct_words(&self, sentence: &str) -> usize {
        let words = self.tokenize(sentence);

        let start = Instant::now();
        let count = words.iter().filter(|w| self.word_is_correct(w)).count();
        let elapsed = start.elapsed();

        info!(
            "Counted {count}/{} correct words with {} search in {:?}",
            words.len(),
            self.search_algorithm,
            elapsed
        );
        count
    }

    /// Check every word of `sentence`, collecting corrections for unknown ones.
    pub fn check_sentence(&self, sentence: &str) -> CorrectionReport {
        let entries = self
            .tokenize(sentence)
            .into_iter()
            .map(|word| {
                let verdict = if self.word_is_correct(&word) {
                    Verdict::Ok
                } else {
                    Verdict::Corrections(self.correct_using_all_methods(&word))
                };
                WordReport { word, verdict }
            })
            .collect();

        CorrectionReport { entries }
    }

    /// Rendered report lines for `sentence`, one per word.
    pub fn display_corrections(&self, sentence: &str) -> Vec<String> {
        self.check_sentence(sentence).lines()
    }
}
