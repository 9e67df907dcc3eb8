//! Reversed-suffix word pair search.
//!
//! Words are filtered by length, grouped by length and shared prefix, and
//! each group is scanned for words whose reversed trailing fragment is
//! another member of the same group.

pub mod extractor;
pub mod finder;
pub mod grouping;
pub mod pair;
pub mod transform;

// Re-export commonly used types
pub use extractor::{PairExtractor, extract_pairs};
pub use finder::{FinderStats, WordPairFinder};
pub use grouping::{Group, group_words};
pub use pair::WordPair;
pub use transform::transform;
