//! Trailing-fragment reversal.
//!
//! Lengths are counted in characters, so a multi-byte character is never
//! split between the prefix and the suffix.

/// Byte offset where the trailing `suffix_length` characters begin.
///
/// Returns `None` unless the word is strictly longer than `suffix_length`
/// characters and `suffix_length` is positive.
fn suffix_start(word: &str, suffix_length: usize) -> Option<usize> {
    if suffix_length == 0 {
        return None;
    }
    word.char_indices()
        .rev()
        .nth(suffix_length - 1)
        .map(|(index, _)| index)
        .filter(|&index| index > 0)
}

/// Check if a word is long enough to take part in matching.
pub fn is_eligible(word: &str, suffix_length: usize) -> bool {
    suffix_start(word, suffix_length).is_some()
}

/// Split a word into its shared prefix and its trailing fragment.
pub fn split_suffix(word: &str, suffix_length: usize) -> Option<(&str, &str)> {
    suffix_start(word, suffix_length).map(|index| word.split_at(index))
}

/// The part of a word left untouched by [`transform`].
pub fn shared_prefix(word: &str, suffix_length: usize) -> Option<&str> {
    split_suffix(word, suffix_length).map(|(prefix, _)| prefix)
}

/// Reverse the trailing `suffix_length` characters of `word`.
///
/// ```
/// use tailswap::pairs::transform::transform;
///
/// assert_eq!(transform("abcde", 2).as_deref(), Some("abced"));
/// assert_eq!(transform("abcde", 3).as_deref(), Some("abedc"));
/// assert_eq!(transform("ab", 2), None);
/// ```
pub fn transform(word: &str, suffix_length: usize) -> Option<String> {
    let (prefix, suffix) = split_suffix(word, suffix_length)?;
    let mut candidate = String::with_capacity(word.len());
    candidate.push_str(prefix);
    candidate.extend(suffix.chars().rev());
    Some(candidate)
}
