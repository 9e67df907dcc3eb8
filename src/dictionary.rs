//! Word list loading.
//!
//! A word list is an ordered sequence of trimmed words, one per line of the
//! source text. Nothing is filtered or normalized here; length filtering is
//! part of the pair search itself.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};

use crate::error::Result;

/// An ordered, immutable list of words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Create an empty word list.
    pub fn new() -> Self {
        WordList { words: Vec::new() }
    }

    /// Build a word list from text with one word per line.
    pub fn from_lines(text: &str) -> Self {
        text.lines().map(|line| line.trim().to_string()).collect()
    }

    /// Load a word list from a text file with one word per line.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);

        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line?;
            words.push(line.trim().to_string());
        }

        debug!(
            "Loaded {} words from {}",
            words.len(),
            path.as_ref().display()
        );
        Ok(WordList { words })
    }

    /// Load a word list, falling back to an empty list when the source is unusable.
    ///
    /// A path that is not a regular file, or a file that cannot be read, is
    /// reported through a warning and yields an empty list rather than an error.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.is_file() {
            warn!(
                "Provided {} is not a filepath or such file doesn't exist",
                path.display()
            );
            return WordList::new();
        }

        match Self::load(path) {
            Ok(list) => list,
            Err(e) => {
                warn!("Failed to read word list {}: {e}", path.display());
                WordList::new()
            }
        }
    }

    /// Number of words, duplicates and blank lines included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the list holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    /// Borrow the words as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    /// Consume the list and return the words.
    pub fn into_inner(self) -> Vec<String> {
        self.words
    }
}

impl From<Vec<String>> for WordList {
    fn from(words: Vec<String>) -> Self {
        WordList { words }
    }
}

impl From<Vec<&str>> for WordList {
    fn from(words: Vec<&str>) -> Self {
        words.into_iter().map(str::to_string).collect()
    }
}

impl FromIterator<String> for WordList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        WordList {
            words: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for WordList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::{NamedTempFile, TempDir};

    use super::*;
    use crate::error::TailswapError;

    #[test]
    fn test_from_lines_trims_words() {
        let list = WordList::from_lines("  alpha\nbeta  \r\n\tgamma\n");
        assert_eq!(list.as_slice(), &["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_from_lines_keeps_order_and_blanks() {
        let list = WordList::from_lines("b\n\na\n");
        assert_eq!(list.len(), 3);
        assert_eq!(list.as_slice(), &["b", "", "a"]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "abcde").unwrap();
        writeln!(file, "  abced  ").unwrap();

        let list = WordList::load(file.path()).unwrap();
        assert_eq!(list.into_inner(), vec!["abcde", "abced"]);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let result = WordList::load("/nonexistent/words.txt");
        assert!(matches!(result, Err(TailswapError::Io(_))));
    }

    #[test]
    fn test_load_or_empty_missing_file() {
        let list = WordList::load_or_empty("/nonexistent/words.txt");
        assert!(list.is_empty());
    }

    #[test]
    fn test_load_or_empty_directory() {
        let dir = TempDir::new().unwrap();
        let list = WordList::load_or_empty(dir.path());
        assert!(list.is_empty());
    }

    #[test]
    fn test_conversions() {
        let list = WordList::from(vec!["one", "two"]);
        let collected: Vec<&String> = list.iter().collect();
        assert_eq!(collected, vec!["one", "two"]);

        let owned: WordList = vec!["x".to_string()].into_iter().collect();
        assert_eq!(owned.len(), 1);
    }
}
