//! # Error Types
//!
//! This module defines the error types for the acquisition-maximization
//! library. It provides specific error variants for the failure scenarios
//! that can occur while ranking and proposing candidate configurations.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use acqmax::error::{MaximizerError, Result};
//!
//! fn some_function() -> Result<()> {
//!     // Function implementation
//!     Ok(())
//! }
//!
//! fn caller() {
//!     match some_function() {
//!         Ok(_) => println!("Success!"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! Using the `ResultExt` trait to add context to errors:
//!
//! ```rust
//! use acqmax::error::{Result, ResultExt};
//! use std::fs::File;
//!
//! fn read_space_definition(path: &str) -> Result<()> {
//!     File::open(path).context("Failed to open space definition")?;
//!     Ok(())
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while maximizing an acquisition function.
///
/// The taxonomy is deliberately small: `Unsupported` signals a programming
/// contract violation (invoking the ranking primitive on a strategy that does
/// not provide it) and is fatal, never retried. The collaborator variants
/// exist so that acquisition-function and search-space implementations can
/// surface their own failures; the strategies propagate them unmodified.
#[derive(Error, Debug)]
pub enum MaximizerError {
    /// Error that occurs when an operation is invoked on a strategy that does
    /// not support it.
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an acquisition function evaluation fails.
    #[error("Acquisition error: {0}")]
    Acquisition(String),

    /// Error that occurs when the search space fails to produce configurations.
    #[error("Search space error: {0}")]
    Space(String),

    /// Error that occurs when a batch evaluation returns the wrong number of
    /// scores for its inputs.
    #[error("Score count mismatch: expected {expected} scores, got {actual}")]
    ScoreCountMismatch { expected: usize, actual: usize },

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for acquisition-maximization operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `MaximizerError`.
///
/// ## Examples
///
/// ```rust
/// use acqmax::error::{MaximizerError, Result};
///
/// fn may_fail() -> Result<i32> {
///     // Some operation that might fail
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, MaximizerError>;

/// Extension trait for Result to add context to errors.
///
/// This trait provides a convenient way to add context to errors when
/// converting from another error type to `MaximizerError`.
///
/// ## Examples
///
/// ```rust
/// use acqmax::error::ResultExt;
/// use std::fs::File;
///
/// fn read_file(path: &str) -> acqmax::error::Result<()> {
///     File::open(path).context("Failed to open file")?;
///     Ok(())
/// }
/// ```
pub trait ResultExt<T, E> {
    /// Adds context to an error.
    ///
    /// This method converts the error to a `MaximizerError` with the provided
    /// context.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| MaximizerError::Other(format!("{}: {}", context, e)))
    }
}
