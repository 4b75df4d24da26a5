//! Insertion-ordered, duplicate-free candidate collection.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// Corrections produced for one misspelled word.
///
/// Candidates keep the order in which they were accepted; pushing a word
/// that is already present is a no-op.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct CandidateSet {
    words: Vec<String>,
    seen: AHashSet<String>,
}

impl CandidateSet {
    /// Create an empty candidate set.
    pub fn new() -> Self {
        CandidateSet {
            words: Vec::new(),
            seen: AHashSet::new(),
        }
    }

    /// Add a candidate. Returns `false` if it was already present.
    pub fn push(&mut self, word: String) -> bool {
        if self.seen.contains(&word) {
            return false;
        }
        self.seen.insert(word.clone());
        self.words.push(word);
        true
    }

    /// Append every candidate from `other` that is not yet present.
    pub fn extend_from(&mut self, other: CandidateSet) {
        for word in other.words {
            self.push(word);
        }
    }

    /// Check whether `word` has already been accepted.
    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(word)
    }

    /// Get the candidates in acceptance order.
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    /// Iterate over the candidates in acceptance order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Consume the set, returning the ordered candidates.
    pub fn into_vec(self) -> Vec<String> {
        self.words
    }
}

impl PartialEq for CandidateSet {
    fn eq(&self, other: &Self) -> bool {
        self.words == other.words
    }
}

impl Eq for CandidateSet {}

impl Extend<String> for CandidateSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for word in iter {
            self.push(word);
        }
    }
}

impl FromIterator<String> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = CandidateSet::new();
        set.extend(iter);
        set
    }
}

impl From<Vec<String>> for CandidateSet {
    fn from(words: Vec<String>) -> Self {
        words.into_iter().collect()
    }
}

impl From<CandidateSet> for Vec<String> {
    fn from(set: CandidateSet) -> Self {
        set.words
    }
}

impl IntoIterator for CandidateSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_first_occurrence() {
        let mut set = CandidateSet::new();

        assert!(set.push("cat".to_string()));
        assert!(set.push("bat".to_string()));
        assert!(!set.push("cat".to_string()));

        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice(), &["cat", "bat"]);
        assert!(set.contains("bat"));
        assert!(!set.contains("rat"));
    }

    #[test]
    fn test_extend_from_drops_duplicates() {
        let mut first: CandidateSet = vec!["a".to_string(), "b".to_string()].into();
        let second: CandidateSet = vec!["b".to_string(), "c".to_string(), "a".to_string()].into();

        first.extend_from(second);
        assert_eq!(first.into_vec(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_serializes_as_list() {
        let set: CandidateSet = vec!["x".to_string(), "y".to_string(), "x".to_string()].into();
        assert!(!set.is_empty());

        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["x","y"]"#);

        let back: CandidateSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
