//! The word pair produced by the search.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TailswapError};

/// Two distinct words that turn into each other when their trailing
/// fragment is reversed.
///
/// The pair is unordered in meaning; `first` is whichever word the search
/// reached first. Serialized as a two-element array.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "(String, String)", from = "(String, String)")]
pub struct WordPair {
    /// The word encountered first.
    pub first: String,
    /// Its reversed-suffix counterpart.
    pub second: String,
}

impl WordPair {
    /// Create a pair of two distinct words.
    pub fn new<S: Into<String>>(first: S, second: S) -> Result<Self> {
        let (first, second) = (first.into(), second.into());
        if first == second {
            return Err(TailswapError::invalid_argument(format!(
                "a pair needs two distinct words, got \"{first}\" twice"
            )));
        }
        Ok(WordPair { first, second })
    }

    /// Borrow the pair as a tuple in recorded order.
    pub fn as_tuple(&self) -> (&str, &str) {
        (&self.first, &self.second)
    }

    /// Check if either side of the pair is `word`.
    pub fn contains(&self, word: &str) -> bool {
        self.first == word || self.second == word
    }

    /// Check if this pair joins `a` and `b`, in either order.
    pub fn matches(&self, a: &str, b: &str) -> bool {
        (self.first == a && self.second == b) || (self.first == b && self.second == a)
    }
}

impl From<(String, String)> for WordPair {
    fn from((first, second): (String, String)) -> Self {
        WordPair { first, second }
    }
}

impl From<WordPair> for (String, String) {
    fn from(pair: WordPair) -> Self {
        (pair.first, pair.second)
    }
}

impl fmt::Display for WordPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.first, self.second)
    }
}
