//! # Tailswap
//!
//! Finds pairs of words in a word list where reversing the last few
//! characters of one word yields the other, e.g. `form` / `fomr`.
//!
//! ## Features
//!
//! - Configurable length of the reversed trailing fragment
//! - Sort-and-partition grouping instead of whole-list lookups
//! - Deterministic, deduplicated output order
//! - Lenient word list loading

pub mod config;
pub mod dictionary;
pub mod error;
pub mod pairs;
pub mod partition;

pub mod prelude {
    pub use crate::config::{DEFAULT_SUFFIX_LENGTH, FinderConfig};
    pub use crate::dictionary::WordList;
    pub use crate::error::{Result, TailswapError};
    pub use crate::pairs::{FinderStats, WordPair, WordPairFinder};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
