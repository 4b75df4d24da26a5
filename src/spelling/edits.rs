//! Single-edit candidate generation.
//!
//! A misspelled word of `L` characters is turned into four families of
//! variants, always in this order:
//!
//! 1. deletions: `L` variants, one per removed position
//! 2. substitutions: `L * |A|` variants, position-major then letter order
//! 3. transpositions: `L - 1` variants, one per adjacent pair
//! 4. insertions: `(L + 1) * |A|` variants, position-major then letter order
//!
//! The raw generators here know nothing about dictionaries. The
//! [`CorrectionGenerator`] filters their output through a membership test and
//! collects the survivors into a [`CandidateSet`].
//!
//! All edits operate on `char`s, never on bytes.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VerbaError};
use crate::spelling::candidates::CandidateSet;

/// An ordered set of letters used for substitution and insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    /// The 26 lowercase ASCII letters.
    pub fn english() -> Self {
        Alphabet {
            letters: ('a'..='z').collect(),
        }
    }

    /// Build an alphabet from arbitrary letters.
    ///
    /// Letters are lowercased and deduplicated, keeping first occurrence order.
    /// Whitespace is ignored. An alphabet with no letters is rejected.
    pub fn new(letters: &str) -> Result<Self> {
        let mut out: Vec<char> = Vec::new();
        for c in letters.chars().filter(|c| !c.is_whitespace()) {
            for lower in c.to_lowercase() {
                if !out.contains(&lower) {
                    out.push(lower);
                }
            }
        }

        if out.is_empty() {
            return Err(VerbaError::config("Alphabet must contain at least one letter"));
        }

        Ok(Alphabet { letters: out })
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.letters {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Alphabet {
    type Error = VerbaError;

    fn try_from(value: String) -> Result<Self> {
        Alphabet::new(&value)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.to_string()
    }
}

/// Every word obtained by removing one character, in position order.
pub fn deletions(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    (0..chars.len())
        .map(|i| chars[..i].iter().chain(&chars[i + 1..]).collect())
        .collect()
}

/// Every word obtained by replacing one character with a letter of `alphabet`.
///
/// Includes the no-op replacement where the letter equals the original.
pub fn substitutions(word: &str, alphabet: &Alphabet) -> Vec<String> {
    let mut chars: Vec<char> = word.chars().collect();
    let mut out = Vec::with_capacity(chars.len() * alphabet.len());

    for i in 0..chars.len() {
        let original = chars[i];
        for &letter in alphabet.letters() {
            chars[i] = letter;
            out.push(chars.iter().collect());
        }
        chars[i] = original;
    }

    out
}

/// Every word obtained by swapping two adjacent characters.
pub fn transpositions(word: &str) -> Vec<String> {
    let mut chars: Vec<char> = word.chars().collect();
    let mut out = Vec::with_capacity(chars.len().saturating_sub(1));

    for i in 0..chars.len().saturating_sub(1) {
        chars.swap(i, i + 1);
        out.push(chars.iter().collect());
        chars.swap(i, i + 1);
    }

    out
}

/// Every word obtained by inserting a letter of `alphabet` before position
/// `i` for `i` in `0..=len`.
pub fn insertions(word: &str, alphabet: &Alphabet) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut out = Vec::with_capacity((chars.len() + 1) * alphabet.len());

    for i in 0..=chars.len() {
        for &letter in alphabet.letters() {
            let mut variant = String::with_capacity(word.len() + letter.len_utf8());
            variant.extend(&chars[..i]);
            variant.push(letter);
            variant.extend(&chars[i..]);
            out.push(variant);
        }
    }

    out
}

/// Which family of single edits to try.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditMethod {
    /// Delete one character
    Removing,
    /// Replace one character
    Substituting,
    /// Swap two adjacent characters
    Swapping,
    /// Insert one character
    Adding,
    /// All four families in order
    #[default]
    All,
}

impl EditMethod {
    pub fn name(self) -> &'static str {
        match self {
            EditMethod::Removing => "removing",
            EditMethod::Substituting => "substituting",
            EditMethod::Swapping => "swapping",
            EditMethod::Adding => "adding",
            EditMethod::All => "all",
        }
    }
}

impl fmt::Display for EditMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EditMethod {
    type Err = VerbaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "removing" => Ok(EditMethod::Removing),
            "substituting" => Ok(EditMethod::Substituting),
            "swapping" => Ok(EditMethod::Swapping),
            "adding" => Ok(EditMethod::Adding),
            "all" => Ok(EditMethod::All),
            other => Err(VerbaError::invalid_argument(format!(
                "Unknown edit method: {other}"
            ))),
        }
    }
}

/// Produces dictionary-filtered single-edit corrections.
#[derive(Debug, Clone, Default)]
pub struct CorrectionGenerator {
    alphabet: Alphabet,
}

impl CorrectionGenerator {
    /// Create a generator over the English alphabet.
    pub fn new() -> Self {
        CorrectionGenerator {
            alphabet: Alphabet::english(),
        }
    }

    /// Create a generator over a custom alphabet.
    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        CorrectionGenerator { alphabet }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Corrections found by deleting one character.
    pub fn by_removing<F>(&self, word: &str, is_known: F) -> CandidateSet
    where
        F: Fn(&str) -> bool,
    {
        Self::accept(deletions(&word.to_lowercase()), &is_known)
    }

    /// Corrections found by replacing one character.
    pub fn by_substituting<F>(&self, word: &str, is_known: F) -> CandidateSet
    where
        F: Fn(&str) -> bool,
    {
        Self::accept(substitutions(&word.to_lowercase(), &self.alphabet), &is_known)
    }

    /// Corrections found by swapping two adjacent characters.
    pub fn by_swapping<F>(&self, word: &str, is_known: F) -> CandidateSet
    where
        F: Fn(&str) -> bool,
    {
        Self::accept(transpositions(&word.to_lowercase()), &is_known)
    }

    /// Corrections found by inserting one character.
    pub fn by_adding<F>(&self, word: &str, is_known: F) -> CandidateSet
    where
        F: Fn(&str) -> bool,
    {
        Self::accept(insertions(&word.to_lowercase(), &self.alphabet), &is_known)
    }

    /// Removals, then substitutions, then swaps, then insertions, deduplicated
    /// across the whole sequence.
    pub fn all_methods<F>(&self, word: &str, is_known: F) -> CandidateSet
    where
        F: Fn(&str) -> bool,
    {
        let mut out = self.by_removing(word, &is_known);
        out.extend_from(self.by_substituting(word, &is_known));
        out.extend_from(self.by_swapping(word, &is_known));
        out.extend_from(self.by_adding(word, &is_known));
        out
    }

    /// Corrections for one selected family.
    pub fn generate<F>(&self, method: EditMethod, word: &str, is_known: F) -> CandidateSet
    where
        F: Fn(&str) -> bool,
    {
        match method {
            EditMethod::Removing => self.by_removing(word, is_known),
            EditMethod::Substituting => self.by_substituting(word, is_known),
            EditMethod::Swapping => self.by_swapping(word, is_known),
            EditMethod::Adding => self.by_adding(word, is_known),
            EditMethod::All => self.all_methods(word, is_known),
        }
    }

    fn accept<F>(variants: Vec<String>, is_known: &F) -> CandidateSet
    where
        F: Fn(&str) -> bool,
    {
        let mut out = CandidateSet::new();
        for variant in variants {
            // Skip the lookup for variants already accepted
            if !out.contains(&variant) && is_known(&variant) {
                out.push(variant);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn known(words: &[&str]) -> impl Fn(&str) -> bool + use<> {
        let set: HashSet<String> = words.iter().map(|w| w.to_string()).collect();
        move |w: &str| set.contains(w)
    }

    #[test]
    fn test_alphabet() {
        let english = Alphabet::english();
        assert_eq!(english.len(), 26);
        assert_eq!(english.letters()[0], 'a');
        assert_eq!(english.letters()[25], 'z');

        let custom = Alphabet::new("CabA é").unwrap();
        assert_eq!(custom.letters(), &['c', 'a', 'b', 'é']);
        assert_eq!(custom.to_string(), "cabé");

        assert!(Alphabet::new("").is_err());
        assert!(Alphabet::new("  ").is_err());
    }

    #[test]
    fn test_raw_generator_counts() {
        let abc = Alphabet::new("abc").unwrap();

        assert_eq!(deletions("cart"), vec!["art", "crt", "cat", "car"]);
        assert_eq!(substitutions("cart", &abc).len(), 4 * 3);
        assert_eq!(transpositions("dgo"), vec!["gdo", "dog"]);
        assert_eq!(insertions("cart", &abc).len(), 5 * 3);
    }

    #[test]
    fn test_raw_generator_order() {
        let ab = Alphabet::new("ab").unwrap();

        assert_eq!(substitutions("xy", &ab), vec!["ay", "by", "xa", "xb"]);
        assert_eq!(insertions("x", &ab), vec!["ax", "bx", "xa", "xb"]);
    }

    #[test]
    fn test_raw_generators_on_empty_word() {
        let alphabet = Alphabet::english();

        assert!(deletions("").is_empty());
        assert!(substitutions("", &alphabet).is_empty());
        assert!(transpositions("").is_empty());
        assert!(transpositions("a").is_empty());
        // Only position 0 exists for insertion
        assert_eq!(insertions("", &alphabet).len(), 26);
    }

    #[test]
    fn test_raw_generators_are_char_based() {
        assert_eq!(deletions("né"), vec!["é", "n"]);
        assert_eq!(transpositions("né"), vec!["én"]);
    }

    #[test]
    fn test_by_removing() {
        let generator = CorrectionGenerator::new();
        let result = generator.by_removing("cart", known(&["cat", "cot", "cart"]));

        assert_eq!(result.into_vec(), vec!["cat"]);
    }

    #[test]
    fn test_by_removing_dedups_repeated_letters() {
        let generator = CorrectionGenerator::new();
        // Deleting either 'l' gives "helo"
        let result = generator.by_removing("hello", known(&["helo"]));

        assert_eq!(result.into_vec(), vec!["helo"]);
    }

    #[test]
    fn test_by_swapping() {
        let generator = CorrectionGenerator::new();
        let result = generator.by_swapping("dgo", known(&["dog"]));

        assert_eq!(result.into_vec(), vec!["dog"]);
    }

    #[test]
    fn test_by_substituting() {
        let generator = CorrectionGenerator::new();
        let result = generator.by_substituting("cet", known(&["cat", "cot", "bet", "cart"]));

        assert_eq!(result.into_vec(), vec!["bet", "cat", "cot"]);
    }

    #[test]
    fn test_by_adding_includes_end_position() {
        let generator = CorrectionGenerator::new();
        let result = generator.by_adding("car", known(&["cart", "scar", "card"]));

        assert_eq!(result.into_vec(), vec!["scar", "card", "cart"]);
    }

    #[test]
    fn test_all_methods_order_and_dedup() {
        let generator = CorrectionGenerator::new();
        let is_known = known(&["ab", "ba", "abc", "b", "bb"]);

        let all = generator.all_methods("ba", &is_known);
        // removing -> ["b"], substituting -> ["ba", "bb"], swapping -> ["ab"]
        assert_eq!(all.clone().into_vec(), vec!["b", "ba", "bb", "ab"]);

        let mut expected = CandidateSet::new();
        expected.extend(generator.by_removing("ba", &is_known));
        expected.extend(generator.by_substituting("ba", &is_known));
        expected.extend(generator.by_swapping("ba", &is_known));
        expected.extend(generator.by_adding("ba", &is_known));
        assert_eq!(all, expected);
    }

    #[test]
    fn test_cross_family_duplicates_are_dropped() {
        let generator = CorrectionGenerator::new();
        let is_known = known(&["a", "aa"]);

        // Swapping "aa" reproduces the substitution no-op "aa"
        assert_eq!(generator.by_substituting("aa", &is_known).into_vec(), vec!["aa"]);
        assert_eq!(generator.by_swapping("aa", &is_known).into_vec(), vec!["aa"]);

        let all = generator.all_methods("aa", &is_known);
        assert_eq!(all.into_vec(), vec!["a", "aa"]);
    }

    #[test]
    fn test_empty_dictionary_yields_nothing() {
        let generator = CorrectionGenerator::new();
        let nothing = |_: &str| false;

        for method in [
            EditMethod::Removing,
            EditMethod::Substituting,
            EditMethod::Swapping,
            EditMethod::Adding,
            EditMethod::All,
        ] {
            assert!(generator.generate(method, "word", nothing).is_empty());
            assert!(generator.generate(method, "", nothing).is_empty());
        }
    }

    #[test]
    fn test_custom_alphabet() {
        let generator = CorrectionGenerator::with_alphabet(Alphabet::new("é").unwrap());
        let result = generator.by_adding("cafe", known(&["caféé", "cafée"]));

        assert_eq!(result.into_vec(), vec!["cafée"]);
    }

    #[test]
    fn test_edit_method_parse() {
        assert_eq!("Swapping".parse::<EditMethod>().unwrap(), EditMethod::Swapping);
        assert_eq!(EditMethod::default(), EditMethod::All);
        assert_eq!(EditMethod::Adding.to_string(), "adding");
        assert!("teleporting".parse::<EditMethod>().is_err());
    }
}
