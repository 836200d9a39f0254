//! Social-security-number value storage
//!
//! [`SsnValue`] wraps one canonical `DDD-DD-DDDD` encoding behind an
//! `Arc<str>`, so interned values are cheap handles onto shared storage.
//! The plain and masked forms are one struct with a [`SsnKind`] tag rather
//! than two near-identical types: they share encoding, equality, ordering and
//! hashing, and diverge only in display-text extraction.

use std::fmt;
use std::sync::Arc;

/// Fixed per-object bookkeeping cost charged by the memory accountant
pub const VALUE_OVERHEAD_BYTES: usize = 48;

/// Logical precision of a social security number, in digits
///
/// This is the 9-digit identity, independent of the 11-character stored
/// encoding.
pub const SSN_PRECISION: u64 = 9;

/// Which display behavior an SSN value carries
///
/// The kind is part of value identity: a plain and a masked value built from
/// the same digits are never equal. It does not affect storage, ordering,
/// hashing, SQL rendering or binding — masking protects interactive display
/// only, and the full canonical encoding still leaves the process through
/// [`bind`](relic_core::BindSlot) and SQL literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SsnKind {
    /// Display shows the trailing digit group as-is
    Plain,
    /// Display redacts everything before the trailing digit group
    Masked,
}

impl SsnKind {
    /// Human-readable kind name, as reported to the engine's type catalog
    pub fn type_name(&self) -> &'static str {
        match self {
            SsnKind::Plain => "Ssn",
            SsnKind::Masked => "SsnMasked",
        }
    }
}

/// An immutable social-security-number value
///
/// Holds the canonical encoding (separators included). Instances are
/// immutable and freely shareable across threads; cloning shares the
/// underlying string storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SsnValue {
    kind: SsnKind,
    encoding: Arc<str>,
}

impl SsnValue {
    /// Wrap an encoding without touching the interning cache
    ///
    /// Callers go through `ValueCache::intern` or the `Value` constructors;
    /// this is the raw allocation those paths share.
    pub(crate) fn new_uncached(kind: SsnKind, encoding: &str) -> Self {
        SsnValue {
            kind,
            encoding: Arc::from(encoding),
        }
    }

    /// The display-behavior kind of this value
    pub fn kind(&self) -> SsnKind {
        self.kind
    }

    /// The canonical stored encoding, separators included
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// Display-layer string extraction
    ///
    /// Returns the trailing digit group (the portion after the last
    /// separator), not the full canonical string. The masked kind prefixes
    /// the redaction marker. An encoding with no separator (possible after
    /// precision truncation) yields itself as the trailing group.
    pub fn display_text(&self) -> String {
        let tail = match self.encoding.rfind('-') {
            Some(idx) => &self.encoding[idx + 1..],
            None => &self.encoding[..],
        };
        match self.kind {
            SsnKind::Plain => tail.to_string(),
            SsnKind::Masked => format!("***-***-{}", tail),
        }
    }

    /// Logical precision in digits (always 9, independent of stored length)
    pub fn precision(&self) -> u64 {
        SSN_PRECISION
    }

    /// Display width of the stored encoding
    pub fn display_size(&self) -> usize {
        self.encoding.len()
    }

    /// Estimated memory cost for the engine's memory accountant
    pub fn memory_size(&self) -> usize {
        2 * self.encoding.len() + VALUE_OVERHEAD_BYTES
    }

    /// Whether two handles share the same interned storage
    ///
    /// Equality compares content; this observes interning. Two equal values
    /// may still report `false` here when one of them bypassed the cache.
    pub fn shares_storage_with(&self, other: &SsnValue) -> bool {
        Arc::ptr_eq(&self.encoding, &other.encoding)
    }
}

impl fmt::Display for SsnValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}
