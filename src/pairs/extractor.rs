//! Matching words against their reversed-suffix candidates within a group.

use ahash::AHashSet;
use log::debug;

use crate::pairs::grouping::Group;
use crate::pairs::pair::WordPair;
use crate::pairs::transform::transform;

/// Collects deduplicated pairs across a sequence of groups.
///
/// Pairs are recorded in the order they are found. An unordered pair is
/// recorded once, oriented by whichever of its words was visited first.
#[derive(Debug, Clone)]
pub struct PairExtractor {
    suffix_length: usize,
    pairs: Vec<WordPair>,
    seen: AHashSet<(String, String)>,
}

impl PairExtractor {
    /// Create an extractor for the given suffix length.
    pub fn new(suffix_length: usize) -> Self {
        PairExtractor {
            suffix_length,
            pairs: Vec::new(),
            seen: AHashSet::new(),
        }
    }

    /// Scan one group and record every new pair found in it.
    pub fn extract(&mut self, group: &Group) {
        for word in group.words() {
            let Some(candidate) = transform(word, self.suffix_length) else {
                continue;
            };
            if candidate == *word || !group.contains(&candidate) {
                continue;
            }

            let key = unordered_key(word, &candidate);
            if self.seen.contains(&key) {
                continue;
            }
            self.seen.insert(key);
            self.pairs.push(WordPair {
                first: word.clone(),
                second: candidate,
            });
        }
    }

    /// Pairs recorded so far.
    pub fn pairs(&self) -> &[WordPair] {
        &self.pairs
    }

    /// Consume the extractor and return the recorded pairs.
    pub fn finish(self) -> Vec<WordPair> {
        debug!("Extracted {} word pairs", self.pairs.len());
        self.pairs
    }
}

fn unordered_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

/// Extract pairs from every group, in group order.
pub fn extract_pairs(groups: &[Group], suffix_length: usize) -> Vec<WordPair> {
    let mut extractor = PairExtractor::new(suffix_length);
    for group in groups {
        extractor.extract(group);
    }
    extractor.finish()
}
