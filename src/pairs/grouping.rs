//! Grouping words into small classes of pairing candidates.
//!
//! Two words can only form a pair if they have the same length and agree on
//! everything before their trailing fragment. Grouping by those two keys
//! means each candidate only has to be looked up among a handful of words
//! instead of the whole list.

use log::debug;

use crate::pairs::transform::{is_eligible, shared_prefix};
use crate::partition::{PartitionOptions, partition_runs};

/// Words sharing a length and a prefix, in byte order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    words: Vec<String>,
    suffix_length: usize,
}

impl Group {
    fn new(words: Vec<String>, suffix_length: usize) -> Self {
        Group {
            words,
            suffix_length,
        }
    }

    /// Members in byte order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of members, duplicates included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the group has no members.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check if `word` is a member of this group.
    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|member| member.as_str().cmp(word))
            .is_ok()
    }

    /// The prefix shared by every member.
    pub fn prefix(&self) -> &str {
        self.words
            .first()
            .and_then(|word| shared_prefix(word, self.suffix_length))
            .unwrap_or("")
    }

    /// Character length shared by every member.
    pub fn word_length(&self) -> usize {
        self.words
            .first()
            .map(|word| word.chars().count())
            .unwrap_or(0)
    }
}

/// Keep only words strictly longer than `suffix_length`, in input order.
pub fn filter_eligible<I>(words: I, suffix_length: usize) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    words
        .into_iter()
        .filter(|word| is_eligible(word, suffix_length))
        .collect()
}

/// Group already-filtered words by length, then by shared prefix.
///
/// Groups come out ordered by ascending word length, then by prefix in byte
/// order. Groups with a single member are dropped.
pub fn partition_groups(mut words: Vec<String>, suffix_length: usize) -> Vec<Group> {
    let options = PartitionOptions::default();

    words.sort_by_key(|word| word.chars().count());
    let same_length = |a: &String, b: &String| a.chars().count() == b.chars().count();
    let length_runs = partition_runs(words, &same_length, options);
    debug!("Partitioned words into {} length runs", length_runs.len());

    let same_prefix = |a: &String, b: &String| {
        shared_prefix(a, suffix_length) == shared_prefix(b, suffix_length)
    };

    let groups: Vec<Group> = length_runs
        .into_iter()
        .flat_map(|mut run| {
            run.sort();
            partition_runs(run, &same_prefix, options)
        })
        .map(|words| Group::new(words, suffix_length))
        .collect();

    debug!("Partitioned words into {} prefix groups", groups.len());
    groups
}

/// Filter, then group, a raw word sequence.
pub fn group_words<I>(words: I, suffix_length: usize) -> Vec<Group>
where
    I: IntoIterator<Item = String>,
{
    partition_groups(filter_eligible(words, suffix_length), suffix_length)
}
