//! The word pair search entry point.
//!
//! [`WordPairFinder`] runs the whole search once, at construction, and keeps
//! the result read-only afterwards. Searching with another suffix length or
//! word list means building a new finder.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::FinderConfig;
use crate::dictionary::WordList;
use crate::error::Result;
use crate::pairs::extractor::extract_pairs;
use crate::pairs::grouping::{filter_eligible, partition_groups};
use crate::pairs::pair::WordPair;

/// Counts gathered while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinderStats {
    /// Words supplied, duplicates and blank lines included.
    pub total_words: usize,
    /// Words strictly longer than the suffix length.
    pub eligible_words: usize,
    /// Groups with at least two members.
    pub groups: usize,
    /// Pairs found.
    pub pairs: usize,
}

/// Finds word pairs whose trailing fragments are reversals of each other.
///
/// # Examples
///
/// ```
/// use tailswap::config::FinderConfig;
/// use tailswap::pairs::finder::WordPairFinder;
///
/// let finder = WordPairFinder::new(vec!["abcde", "abced", "xyzed"], FinderConfig::default())?;
/// assert_eq!(finder.len(), 1);
/// assert_eq!(finder.pairs()[0].as_tuple(), ("abcde", "abced"));
/// # Ok::<(), tailswap::error::TailswapError>(())
/// ```
#[derive(Debug, Clone)]
pub struct WordPairFinder {
    config: FinderConfig,
    pairs: Vec<WordPair>,
    stats: FinderStats,
}

impl WordPairFinder {
    /// Search `words` for pairs using `config`.
    ///
    /// Fails only if the configuration is invalid. An empty word list yields
    /// an empty result.
    pub fn new<W: Into<WordList>>(words: W, config: FinderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::search(words.into(), config))
    }

    /// Search `words` with the default suffix length.
    pub fn with_default_config<W: Into<WordList>>(words: W) -> Self {
        Self::search(words.into(), FinderConfig::default())
    }

    /// Search the word list stored at `path`.
    ///
    /// An unusable source is reported as a warning and searched as an empty
    /// list.
    pub fn from_file<P: AsRef<Path>>(path: P, config: FinderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::search(WordList::load_or_empty(path), config))
    }

    fn search(words: WordList, config: FinderConfig) -> Self {
        let suffix_length = config.suffix_length;
        let total_words = words.len();

        let eligible = filter_eligible(words, suffix_length);
        let eligible_words = eligible.len();
        debug!(
            "{eligible_words} of {total_words} words are longer than {suffix_length} characters"
        );

        let groups = partition_groups(eligible, suffix_length);
        let pairs = extract_pairs(&groups, suffix_length);

        let stats = FinderStats {
            total_words,
            eligible_words,
            groups: groups.len(),
            pairs: pairs.len(),
        };

        WordPairFinder {
            config,
            pairs,
            stats,
        }
    }

    /// The pairs found, in discovery order.
    pub fn pairs(&self) -> &[WordPair] {
        &self.pairs
    }

    /// Iterate over the pairs found.
    pub fn iter(&self) -> std::slice::Iter<'_, WordPair> {
        self.pairs.iter()
    }

    /// Number of pairs found.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if no pairs were found.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Check if `a` and `b` were paired, in either order.
    pub fn contains(&self, a: &str, b: &str) -> bool {
        self.pairs.iter().any(|pair| pair.matches(a, b))
    }

    /// The suffix length used for this search.
    pub fn suffix_length(&self) -> usize {
        self.config.suffix_length
    }

    /// The configuration used for this search.
    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Counts gathered while searching.
    pub fn stats(&self) -> &FinderStats {
        &self.stats
    }

    /// Serialize the pairs as a JSON array of two-element arrays.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(&self.pairs)?
        } else {
            serde_json::to_string(&self.pairs)?
        };
        Ok(json)
    }

    /// Consume the finder and return the pairs.
    pub fn into_pairs(self) -> Vec<WordPair> {
        self.pairs
    }
}

impl<'a> IntoIterator for &'a WordPairFinder {
    type Item = &'a WordPair;
    type IntoIter = std::slice::Iter<'a, WordPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::error::TailswapError;

    #[test]
    fn test_basic_search() {
        let finder = WordPairFinder::with_default_config(vec!["abcde", "abced"]);
        assert_eq!(finder.len(), 1);
        assert!(finder.contains("abced", "abcde"));
        assert_eq!(finder.suffix_length(), 2);
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let config = FinderConfig { suffix_length: 0 };
        let result = WordPairFinder::new(vec!["abcde", "abced"], config);
        assert!(matches!(result, Err(TailswapError::Config(_))));

        let result = WordPairFinder::from_file("/nonexistent/words.txt", config);
        assert!(matches!(result, Err(TailswapError::Config(_))));
    }

    #[test]
    fn test_empty_input() {
        let finder = WordPairFinder::with_default_config(WordList::new());
        assert!(finder.is_empty());
        assert_eq!(finder.stats(), &FinderStats::default());
    }

    #[test]
    fn test_stats() {
        let finder = WordPairFinder::with_default_config(vec![
            "ab", "abcde", "abced", "xyzed", "star", "stra", "",
        ]);
        assert_eq!(
            finder.stats(),
            &FinderStats {
                total_words: 7,
                eligible_words: 5,
                groups: 2,
                pairs: 2,
            }
        );
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "star").unwrap();
        writeln!(file, " stra ").unwrap();
        writeln!(file, "tsar").unwrap();

        let finder = WordPairFinder::from_file(file.path(), FinderConfig::default()).unwrap();
        let pairs: Vec<(&str, &str)> = finder.iter().map(WordPair::as_tuple).collect();
        assert_eq!(pairs, vec![("star", "stra")]);
    }

    #[test]
    fn test_from_missing_file_is_empty() {
        let finder =
            WordPairFinder::from_file("/nonexistent/words.txt", FinderConfig::default()).unwrap();
        assert!(finder.is_empty());
    }

    #[test]
    fn test_to_json() {
        let finder = WordPairFinder::with_default_config(vec!["abced", "abcde", "star", "stra"]);
        assert_eq!(
            finder.to_json(false).unwrap(),
            r#"[["star","stra"],["abcde","abced"]]"#
        );
    }

    #[test]
    fn test_into_pairs() {
        let finder = WordPairFinder::with_default_config(vec!["abcde", "abced"]);
        let pairs = finder.into_pairs();
        assert_eq!(pairs, vec![WordPair::new("abcde", "abced").unwrap()]);
    }
}
