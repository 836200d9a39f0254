//! RelicDB typed value layer
//!
//! The strongly-typed value representation used by the Relic SQL engine's
//! storage and execution layers: a closed [`Value`] enum whose social
//! security number kinds enforce a canonical `DDD-DD-DDDD` encoding, share a
//! process-wide interning cache, and expose the uniform contract (equality,
//! ordering, hashing, display, precision truncation, SQL rendering, driver
//! binding) the engine consumes.
//!
//! # Quick Start
//!
//! ```
//! use relicdb::Value;
//!
//! let v = relicdb::Value::ssn("078051120")?;
//! assert_eq!(v.as_encoding(), Some("078-05-1120"));
//! assert_eq!(v.display_text(), "1120");
//!
//! let masked = Value::ssn_masked("078051120")?;
//! assert_eq!(masked.display_text(), "***-***-1120");
//! # Ok::<(), relicdb::Error>(())
//! ```
//!
//! # Architecture
//!
//! `relic-core` holds the cross-cutting pieces (errors, compare modes, the
//! driver binding seam, SQL quoting); `relic-value` holds the canonicalizer,
//! the interning cache and the value kinds. This crate re-exports both.

// Re-export the public API from the member crates
pub use relic_core::*;
pub use relic_value::*;
