//! Canonicalization of raw identity-number input
//!
//! A social security number enters the engine as a raw 9-digit string and is
//! stored in one canonical form only: `DDD-DD-DDDD` (11 characters, separators
//! after the third and fifth digit). The stored form, separators included, is
//! the value's identity for equality, ordering and hashing.
//!
//! ## Validation Rules
//!
//! - Exactly 9 characters (checked first)
//! - Every character an ASCII decimal digit
//!
//! Validation is purely byte/character-level; there is no locale-sensitive
//! behavior anywhere in this path.

use relic_core::{Error, Result};

/// Number of logical digits in a social security number
pub const RAW_DIGITS: usize = 9;

/// Length of the canonical stored encoding, separators included
pub const ENCODED_LEN: usize = 11;

/// Encoding of the EMPTY sentinel value
///
/// Returned for empty raw input when the caller asked for empty-means-empty
/// semantics rather than NULL.
pub const EMPTY_ENCODING: &str = "000-00-0000";

/// Canonicalize a raw 9-digit string into the stored `DDD-DD-DDDD` form
///
/// Length is checked strictly before character class, so a too-short input
/// containing non-digits reports [`Error::InvalidLength`].
///
/// # Errors
///
/// - [`Error::InvalidLength`] if the input is not exactly 9 characters
/// - [`Error::InvalidCharacter`] if any character is not an ASCII digit
pub fn canonicalize(raw: &str) -> Result<String> {
    let len = raw.chars().count();
    if len != RAW_DIGITS {
        return Err(Error::InvalidLength { actual: len });
    }
    if let Some((position, found)) = raw.chars().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
        return Err(Error::InvalidCharacter { found, position });
    }
    // All-ASCII after validation, so byte slicing is character slicing.
    Ok(format!("{}-{}-{}", &raw[..3], &raw[3..5], &raw[5..9]))
}
