//! Core types and traits for the Relic value layer
//!
//! This crate defines the foundational pieces shared by every value kind:
//! - Error: validation error hierarchy for value construction
//! - CompareMode: mode-parameterized string ordering used by string-family values
//! - BindSlot: trait seam for the driver's output-parameter binding layer
//! - sql: SQL string-literal quoting helpers

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bind;
pub mod compare;
pub mod error;
pub mod sql;

// Re-export commonly used types and traits
pub use bind::BindSlot;
pub use compare::CompareMode;
pub use error::{Error, Result};
pub use sql::quote_string;
