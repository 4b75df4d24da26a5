//! Error types for the Verba library.
//!
//! Only two things in Verba can fail: reading a word list and reading a
//! checker configuration. Every spelling operation is total over its input
//! and therefore returns plain values rather than [`Result`].
//!
//! # Examples
//!
//! ```
//! use verba::error::{Result, VerbaError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(VerbaError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Verba operations.
#[derive(Error, Debug)]
pub enum VerbaError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The dictionary word list could not be loaded
    #[error("Load error: {0}")]
    Load(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with VerbaError.
pub type Result<T> = std::result::Result<T, VerbaError>;

impl VerbaError {
    /// Create a new load error.
    pub fn load<S: Into<String>>(msg: S) -> Self {
        VerbaError::Load(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        VerbaError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        VerbaError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        VerbaError::Other(msg.into())
    }

    /// Whether this error came from loading a dictionary.
    pub fn is_load_error(&self) -> bool {
        matches!(self, VerbaError::Load(_))
    }
}
