//! Dictionary storage for spell checking.
//!
//! A [`Dictionary`] is an immutable, sorted and deduplicated list of lowercase
//! words. It is built once from an already materialized word list and exposes
//! two membership tests: a linear scan and a binary search.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};

use crate::error::{Result, VerbaError};

/// An immutable, sorted collection of unique lowercase words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    /// Words in strictly ascending byte order
    words: Vec<String>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Dictionary { words: Vec::new() }
    }

    /// Build a dictionary from a list of words.
    ///
    /// Words are lowercased, sorted and deduplicated, so binary search is
    /// valid regardless of the order of the input.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        let input_len = normalized.len();
        let was_sorted = normalized.windows(2).all(|pair| pair[0] < pair[1]);

        normalized.sort_unstable();
        normalized.dedup();

        if !was_sorted {
            warn!(
                "Word list was not in strict ascending order; sorted {} entries ({} duplicates removed)",
                input_len,
                input_len - normalized.len()
            );
        }
        debug!("Built dictionary with {} words", normalized.len());

        Dictionary { words: normalized }
    }

    /// Load a dictionary from a text file with one word per line.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let words = WordListLoader::new().load(path)?;
        Ok(Self::from_words(words))
    }

    /// Check membership by scanning every entry in order.
    pub fn contains_linear(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.words.iter().any(|entry| *entry == word)
    }

    /// Check membership by halving the sorted entries.
    pub fn contains_binary(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.words
            .binary_search_by(|entry| entry.as_str().cmp(word.as_str()))
            .is_ok()
    }

    /// Get the sorted words.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Iterate over the words in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Get the number of unique words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the dictionary has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Dictionary::from_words(iter)
    }
}

/// Reads word lists from disk.
///
/// Blank lines and lines starting with `#` are skipped. Every other line is
/// trimmed and lowercased.
#[derive(Debug, Clone)]
pub struct WordListLoader {
    comment_prefix: Option<char>,
}

impl WordListLoader {
    /// Create a loader that treats `#` lines as comments.
    pub fn new() -> Self {
        WordListLoader {
            comment_prefix: Some('#'),
        }
    }

    /// Create a loader that keeps every non-blank line.
    pub fn without_comments() -> Self {
        WordListLoader {
            comment_prefix: None,
        }
    }

    /// Read the word list at `path`.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Vec<String>> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| VerbaError::load(format!("{}: {e}", path.display())))?;

        let words = self
            .read(BufReader::new(file))
            .map_err(|e| VerbaError::load(format!("{}: {e}", path.display())))?;

        info!("Loaded {} words from {}", words.len(), path.display());
        Ok(words)
    }

    /// Read a word list from any buffered reader.
    pub fn read<R: BufRead>(&self, reader: R) -> std::io::Result<Vec<String>> {
        let mut words = Vec::new();

        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            if let Some(prefix) = self.comment_prefix
                && word.starts_with(prefix)
            {
                continue;
            }
            words.push(word.to_lowercase());
        }

        Ok(words)
    }
}

impl Default for WordListLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// A small built-in English word list.
pub struct BuiltinDictionary;

impl BuiltinDictionary {
    /// Create a minimal dictionary for demos and testing.
    pub fn minimal() -> Dictionary {
        Dictionary::from_words([
            "hello",
            "world",
            "search",
            "query",
            "text",
            "word",
            "words",
            "spell",
            "correct",
            "suggestion",
            "dictionary",
            "language",
            "english",
            "computer",
            "program",
            "software",
            "system",
            "data",
            "information",
            "process",
            "result",
            "value",
            "number",
            "string",
            "character",
            "the",
            "cat",
            "sat",
            "on",
            "mat",
            "a",
            "is",
            "this",
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_dictionary_basic_operations() {
        let dict = Dictionary::from_words(["cat", "cot", "cart"]);

        assert_eq!(dict.len(), 3);
        assert!(!dict.is_empty());
        assert_eq!(dict.words(), &["cart", "cat", "cot"]);

        assert!(dict.contains_linear("cot"));
        assert!(dict.contains_binary("cot"));
        assert!(!dict.contains_linear("dog"));
        assert!(!dict.contains_binary("dog"));
    }

    #[test]
    fn test_unsorted_input_is_sorted_and_deduplicated() {
        let dict = Dictionary::from_words(["pear", "Apple", "apple", "fig", "pear", ""]);

        assert_eq!(dict.words(), &["apple", "fig", "pear"]);
        for word in ["apple", "fig", "pear"] {
            assert!(dict.contains_binary(word));
            assert!(dict.contains_linear(word));
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let dict = Dictionary::from_words(["Hello"]);

        assert!(dict.contains_linear("HELLO"));
        assert!(dict.contains_binary("hElLo"));
    }

    #[test]
    fn test_empty_dictionary() {
        let dict = Dictionary::new();

        assert!(dict.is_empty());
        assert!(!dict.contains_linear("anything"));
        assert!(!dict.contains_binary("anything"));
        assert!(!dict.contains_linear(""));
        assert!(!dict.contains_binary(""));
    }

    #[test]
    fn test_collect_into_dictionary() {
        let dict: Dictionary = vec!["b", "a"].into_iter().collect();
        assert_eq!(dict.iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_loader_skips_comments_and_blank_lines() {
        let input = "# header\nCat\n\n  dog  \n#cow\n";
        let words = WordListLoader::new().read(Cursor::new(input)).unwrap();
        assert_eq!(words, vec!["cat", "dog"]);

        let words = WordListLoader::without_comments()
            .read(Cursor::new(input))
            .unwrap();
        assert_eq!(words, vec!["# header", "cat", "dog", "#cow"]);
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "world").unwrap();
        writeln!(temp_file, "hello").unwrap();
        writeln!(temp_file, "hello").unwrap();
        temp_file.flush().unwrap();

        let dict = Dictionary::load_from_file(temp_file.path()).unwrap();
        assert_eq!(dict.words(), &["hello", "world"]);
    }

    #[test]
    fn test_load_missing_file_is_load_error() {
        let err = Dictionary::load_from_file("/nonexistent/verba/words.txt").unwrap_err();
        assert!(err.is_load_error());
        assert!(err.to_string().contains("words.txt"));
    }

    #[test]
    fn test_builtin_dictionary() {
        let dict = BuiltinDictionary::minimal();
        assert!(dict.contains_binary("hello"));
        assert!(dict.contains_linear("search"));
        assert!(dict.len() > 10);
    }
}
