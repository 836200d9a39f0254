//! Typed value subsystem for the Relic SQL engine
//!
//! This crate implements the engine's polymorphic value representation for
//! the social-security-number column types:
//! - canonical: raw-input validation and the canonical `DDD-DD-DDDD` encoding
//! - cache: process-wide, size-bounded value interning
//! - ssn: the SSN value storage (plain and masked display kinds)
//! - value: the closed `Value` enum and the dispatch surface the rest of the
//!   engine consumes
//!
//! Data flow: raw external input → canonicalizer → interning cache → callers
//! interact only through [`Value`], never the concrete kind.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cache;
pub mod canonical;
pub mod ssn;
pub mod value;

// Re-export commonly used types
pub use cache::{CacheConfig, ValueCache};
pub use canonical::{canonicalize, EMPTY_ENCODING, ENCODED_LEN, RAW_DIGITS};
pub use ssn::{SsnKind, SsnValue, SSN_PRECISION, VALUE_OVERHEAD_BYTES};
pub use value::{StorageClass, Value};
