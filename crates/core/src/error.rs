//! Error types for value construction
//!
//! This module defines the validation errors raised when a raw input is
//! rejected by a value constructor. We use `thiserror` for automatic
//! `Display` and `Error` trait implementations.
//!
//! All errors here are user-facing and non-retryable: the SQL layer surfaces
//! them as a rejected statement or value. Nothing at this layer is fatal to
//! the process, and nothing is silently defaulted.

use thiserror::Error;

/// Result type alias for value-layer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Validation errors raised at value construction time
///
/// Length is always checked before character class, so a too-short input
/// containing non-digits reports `InvalidLength`, not `InvalidCharacter`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Raw input does not have the required number of characters
    #[error("invalid SSN value: expected exactly 9 characters, got {actual}")]
    InvalidLength {
        /// Actual length of the rejected input, in characters
        actual: usize,
    },

    /// Raw input contains a character that is not an ASCII decimal digit
    #[error("invalid SSN value: character '{found}' at position {position} is not a digit")]
    InvalidCharacter {
        /// The offending character
        found: char,
        /// Zero-based position of the offending character
        position: usize,
    },
}
