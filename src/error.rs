//! Error types for the smsguard library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`SmsGuardError`] enum.
//!
//! # Examples
//!
//! ```
//! use smsguard::error::{Result, SmsGuardError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SmsGuardError::invalid_argument("test fraction must be in (0, 1)"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for smsguard operations.
#[derive(Error, Debug)]
pub enum SmsGuardError {
    /// I/O errors (artifact files, datasets)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, vocabulary construction)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Dataset-related errors (missing columns, nothing left after cleaning)
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Model errors (unfittable training data, vocabulary mismatch)
    #[error("Model error: {0}")]
    Model(String),

    /// Invalid argument or configuration value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with SmsGuardError.
pub type Result<T> = std::result::Result<T, SmsGuardError>;

impl SmsGuardError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SmsGuardError::Analysis(msg.into())
    }

    /// Create a new dataset error.
    pub fn dataset<S: Into<String>>(msg: S) -> Self {
        SmsGuardError::Dataset(msg.into())
    }

    /// Create a new model error.
    pub fn model<S: Into<String>>(msg: S) -> Self {
        SmsGuardError::Model(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SmsGuardError::InvalidArgument(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SmsGuardError::InvalidArgument(format!("invalid configuration: {}", msg.into()))
    }
}
