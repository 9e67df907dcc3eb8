//! Configuration for word pair search.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TailswapError};

/// Number of trailing characters reversed when no length is configured.
pub const DEFAULT_SUFFIX_LENGTH: usize = 2;

/// Configuration for a [`WordPairFinder`](crate::pairs::finder::WordPairFinder).
///
/// The suffix length is fixed for the lifetime of one computation. Searching
/// with a different length means building a new finder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderConfig {
    /// How many trailing characters are reversed to form a candidate.
    /// Only words strictly longer than this take part in matching.
    pub suffix_length: usize,
}

impl Default for FinderConfig {
    fn default() -> Self {
        FinderConfig {
            suffix_length: DEFAULT_SUFFIX_LENGTH,
        }
    }
}

impl FinderConfig {
    /// Create a validated configuration.
    pub fn new(suffix_length: usize) -> Result<Self> {
        let config = FinderConfig { suffix_length };
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration describes a computable search.
    pub fn validate(&self) -> Result<()> {
        if self.suffix_length == 0 {
            return Err(TailswapError::invalid_config(
                "suffix_length must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: FinderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
