//! Search strategies for dictionary membership.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::VerbaError;
use crate::spelling::dictionary::Dictionary;

/// The algorithm used to test whether a word is in a [`Dictionary`].
///
/// Both variants give the same answer for every word; they differ only in cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchAlgorithm {
    /// Scan every entry in order, O(n)
    Linear,
    /// Halve the sorted entries, O(log n)
    #[default]
    Binary,
}

impl SearchAlgorithm {
    /// Test `word` for membership in `dictionary` using this strategy.
    pub fn contains(self, dictionary: &Dictionary, word: &str) -> bool {
        match self {
            SearchAlgorithm::Linear => dictionary.contains_linear(word),
            SearchAlgorithm::Binary => dictionary.contains_binary(word),
        }
    }

    /// Lowercase name of the strategy.
    pub fn name(self) -> &'static str {
        match self {
            SearchAlgorithm::Linear => "linear",
            SearchAlgorithm::Binary => "binary",
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchAlgorithm {
    type Err = VerbaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(SearchAlgorithm::Linear),
            "binary" => Ok(SearchAlgorithm::Binary),
            other => Err(VerbaError::invalid_argument(format!(
                "Unknown search algorithm: {other}"
            ))),
        }
    }
}
