//! Error types for the Tailswap library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`TailswapError`] enum.
//!
//! # Examples
//!
//! ```
//! use tailswap::error::{TailswapError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TailswapError::invalid_config("suffix length must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Tailswap operations.
#[derive(Error, Debug)]
pub enum TailswapError {
    /// I/O errors (reading word lists or configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid configuration, raised as soon as the configuration is built
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TailswapError.
pub type Result<T> = std::result::Result<T, TailswapError>;

impl TailswapError {
    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        TailswapError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TailswapError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TailswapError::Other(msg.into())
    }
}
