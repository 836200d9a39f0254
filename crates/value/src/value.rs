//! The engine's typed value representation
//!
//! This module defines:
//! - Value: closed enum over the value kinds this subsystem carries
//! - StorageClass: the storage-family tag reported to the type system
//!
//! ## Value Model
//!
//! - Values are immutable once constructed; sharing needs no synchronization
//! - Different kinds are NEVER equal, even over identical encodings
//!   (plain vs masked SSN included — masking is part of identity)
//! - Every operation matches exhaustively; adding a value kind is a
//!   compile-checked extension, not a runtime cast
//!
//! Construction is a straight-line pipeline: raw input is canonicalized,
//! then routed through the interning cache. Both failure exits are
//! validation errors; nothing loops or retries.

use crate::cache::ValueCache;
use crate::canonical::{canonicalize, EMPTY_ENCODING};
use crate::ssn::{SsnKind, SsnValue, VALUE_OVERHEAD_BYTES};
use relic_core::{quote_string, BindSlot, CompareMode, Result};
use std::cmp::Ordering;
use std::fmt;

/// Storage-family tag reported to the engine's type system
///
/// Plain and masked SSN values share one storage class: their stored layout
/// is identical and masking is a display-only distinction layered on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageClass {
    /// SQL NULL
    Null,
    /// String-layout storage (shared by all string-family kinds)
    StringFamily,
}

/// A typed SQL value
///
/// The closed set of value kinds carried by this subsystem. The engine's
/// comparison, hashing, storage-size estimation and literal-rendering
/// machinery consume values only through the methods here, never through the
/// concrete kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// SQL NULL
    Null,
    /// Social security number (plain or masked, per its kind tag)
    Ssn(SsnValue),
}

impl Value {
    // === Construction ===

    /// Build a plain SSN value from a raw 9-digit string
    ///
    /// Uses the process-wide default cache; see [`Value::ssn_in`] to inject
    /// one.
    ///
    /// # Errors
    ///
    /// Returns [`relic_core::Error`] if the input is not exactly 9 ASCII
    /// digits.
    pub fn ssn(raw: &str) -> Result<Value> {
        Self::ssn_in(raw, ValueCache::global())
    }

    /// Build a masked SSN value from a raw 9-digit string
    ///
    /// Identical validation and storage as [`Value::ssn`]; only display-text
    /// extraction differs.
    pub fn ssn_masked(raw: &str) -> Result<Value> {
        Self::ssn_masked_in(raw, ValueCache::global())
    }

    /// Build a plain SSN value through a caller-provided cache
    pub fn ssn_in(raw: &str, cache: &ValueCache) -> Result<Value> {
        let canonical = canonicalize(raw)?;
        // Empty input cannot reach the canonical path from here: length was
        // just validated as exactly 9, so the empty-means-empty flag is moot.
        Ok(Self::ssn_canonical(SsnKind::Plain, &canonical, false, cache))
    }

    /// Build a masked SSN value through a caller-provided cache
    pub fn ssn_masked_in(raw: &str, cache: &ValueCache) -> Result<Value> {
        let canonical = canonicalize(raw)?;
        Ok(Self::ssn_canonical(SsnKind::Masked, &canonical, false, cache))
    }

    /// Wrap an already-canonical encoding as an SSN value
    ///
    /// Empty input returns [`Value::Null`] when `treat_empty_as_null` is set,
    /// the EMPTY sentinel (encoding `000-00-0000`) otherwise. Non-empty input
    /// is wrapped as-is — this entry point trusts the caller's encoding and
    /// performs no format validation — and routed through the interning
    /// cache.
    pub fn ssn_canonical(
        kind: SsnKind,
        encoding: &str,
        treat_empty_as_null: bool,
        cache: &ValueCache,
    ) -> Value {
        if encoding.is_empty() {
            if treat_empty_as_null {
                return Value::Null;
            }
            return Value::Ssn(cache.intern(kind, EMPTY_ENCODING));
        }
        Value::Ssn(cache.intern(kind, encoding))
    }

    /// Truncate this value to at most `precision` characters of stored form
    ///
    /// Identity when `precision` is zero or already covers the encoding.
    /// Otherwise the encoding's prefix is re-wrapped through the canonical
    /// construction path. Truncation is total: the result's encoding may no
    /// longer match the `DDD-DD-DDDD` pattern (it can end mid-group), which
    /// is the generic precision contract shared with free-text kinds.
    pub fn convert_precision(&self, precision: u64) -> Value {
        self.convert_precision_in(precision, ValueCache::global())
    }

    /// [`Value::convert_precision`] through a caller-provided cache
    pub fn convert_precision_in(&self, precision: u64, cache: &ValueCache) -> Value {
        match self {
            Value::Null => Value::Null,
            Value::Ssn(v) => {
                let encoding = v.encoding();
                if precision == 0 || encoding.len() as u64 <= precision {
                    return self.clone();
                }
                let prefix = &encoding[..precision as usize];
                Self::ssn_canonical(v.kind(), prefix, false, cache)
            }
        }
    }

    // === Dispatch surface ===

    /// Kind name for error messages and the type catalog
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Ssn(v) => v.kind().type_name(),
        }
    }

    /// Storage-family tag for the type system
    pub fn storage_class(&self) -> StorageClass {
        match self {
            Value::Null => StorageClass::Null,
            Value::Ssn(_) => StorageClass::StringFamily,
        }
    }

    /// Compare two values under the given mode
    ///
    /// String-family kinds delegate to the mode's string comparison over
    /// their canonical encodings, so they sort consistently with general
    /// text under the active collation. NULL sorts before every non-null
    /// value.
    pub fn compare_in(&self, other: &Value, mode: CompareMode) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Null, _) => Ordering::Less,
            (_, Value::Null) => Ordering::Greater,
            (Value::Ssn(a), Value::Ssn(b)) => mode.compare_str(a.encoding(), b.encoding()),
        }
    }

    /// Display-layer text for this value
    ///
    /// SSN values show only the trailing digit group; the masked kind
    /// prefixes the redaction marker.
    pub fn display_text(&self) -> String {
        match self {
            Value::Null => "NULL".to_string(),
            Value::Ssn(v) => v.display_text(),
        }
    }

    /// Logical precision of this value
    pub fn precision(&self) -> u64 {
        match self {
            Value::Null => 0,
            Value::Ssn(v) => v.precision(),
        }
    }

    /// Display width of the stored form
    pub fn display_size(&self) -> usize {
        match self {
            Value::Null => 0,
            Value::Ssn(v) => v.display_size(),
        }
    }

    /// Estimated memory cost for the engine's memory accountant
    pub fn memory_size(&self) -> usize {
        match self {
            Value::Null => VALUE_OVERHEAD_BYTES,
            Value::Ssn(v) => v.memory_size(),
        }
    }

    /// Push this value into a driver output-parameter slot
    ///
    /// SSN values bind their full canonical encoding verbatim — masking is a
    /// display concern and does not apply at the binding boundary.
    pub fn bind_to(&self, slot: &mut dyn BindSlot) {
        match self {
            Value::Null => slot.bind_null(),
            Value::Ssn(v) => slot.bind_string(v.encoding()),
        }
    }

    /// Render this value as a SQL literal
    ///
    /// The literal reconstructs the value through the SQL text layer; SSN
    /// values render their full canonical encoding as a quoted string for
    /// both kinds.
    pub fn to_sql(&self) -> String {
        match self {
            Value::Null => "NULL".to_string(),
            Value::Ssn(v) => quote_string(v.encoding()),
        }
    }

    // === Accessors ===

    /// Check if this is SQL NULL
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the SSN value if this is an SSN kind
    pub fn as_ssn(&self) -> Option<&SsnValue> {
        match self {
            Value::Ssn(v) => Some(v),
            Value::Null => None,
        }
    }

    /// Get the canonical stored encoding if this value has one
    pub fn as_encoding(&self) -> Option<&str> {
        self.as_ssn().map(|v| v.encoding())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheConfig;
    use relic_core::Error;

    fn fresh_cache() -> ValueCache {
        ValueCache::new(CacheConfig::default())
    }

    // === Construction ===

    #[test]
    fn test_ssn_from_raw_digits() {
        let cache = fresh_cache();
        let v = Value::ssn_in("078051120", &cache).unwrap();
        assert_eq!(v.as_encoding(), Some("078-05-1120"));
        assert_eq!(v.type_name(), "Ssn");
    }

    #[test]
    fn test_ssn_masked_from_raw_digits() {
        let cache = fresh_cache();
        let v = Value::ssn_masked_in("078051120", &cache).unwrap();
        assert_eq!(v.as_encoding(), Some("078-05-1120"));
        assert_eq!(v.type_name(), "SsnMasked");
    }

    #[test]
    fn test_construction_rejects_bad_length() {
        let cache = fresh_cache();
        let result = Value::ssn_in("12345", &cache);
        assert_eq!(result, Err(Error::InvalidLength { actual: 5 }));
    }

    #[test]
    fn test_construction_rejects_non_digit() {
        let cache = fresh_cache();
        let result = Value::ssn_masked_in("12345678x", &cache);
        assert_eq!(
            result,
            Err(Error::InvalidCharacter {
                found: 'x',
                position: 8
            })
        );
    }

    #[test]
    fn test_empty_canonical_input_null_semantics() {
        let cache = fresh_cache();
        let v = Value::ssn_canonical(SsnKind::Plain, "", true, &cache);
        assert!(v.is_null());
    }

    #[test]
    fn test_empty_canonical_input_empty_semantics() {
        let cache = fresh_cache();
        let v = Value::ssn_canonical(SsnKind::Plain, "", false, &cache);
        assert_eq!(v.as_encoding(), Some(EMPTY_ENCODING));
        assert_eq!(v.as_encoding(), Some("000-00-0000"));
    }

    #[test]
    fn test_empty_sentinel_is_interned() {
        let cache = fresh_cache();
        let a = Value::ssn_canonical(SsnKind::Plain, "", false, &cache);
        let b = Value::ssn_canonical(SsnKind::Plain, "", false, &cache);
        assert!(a
            .as_ssn()
            .unwrap()
            .shares_storage_with(b.as_ssn().unwrap()));
    }

    #[test]
    fn test_interning_idempotence() {
        let cache = fresh_cache();
        let a = Value::ssn_in("123456789", &cache).unwrap();
        let b = Value::ssn_in("123456789", &cache).unwrap();
        assert_eq!(a, b);
        assert!(a
            .as_ssn()
            .unwrap()
            .shares_storage_with(b.as_ssn().unwrap()));
    }

    // === Equality ===

    #[test]
    fn test_cross_kind_equality_is_false() {
        let cache = fresh_cache();
        let plain = Value::ssn_in("123456789", &cache).unwrap();
        let masked = Value::ssn_masked_in("123456789", &cache).unwrap();
        assert_eq!(plain.as_encoding(), masked.as_encoding());
        assert_ne!(plain, masked);
    }

    #[test]
    fn test_null_not_equal_to_ssn() {
        let cache = fresh_cache();
        let v = Value::ssn_in("123456789", &cache).unwrap();
        assert_ne!(Value::Null, v);
    }

    #[test]
    fn test_equality_is_reflexive_symmetric_transitive() {
        let cache = fresh_cache();
        let a = Value::ssn_in("123456789", &cache).unwrap();
        let b = Value::ssn_in("123456789", &cache).unwrap();
        let c = Value::ssn_in("123456789", &cache).unwrap();
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_eq!(b, c);
        assert_eq!(a, c);
    }

    // === Ordering ===

    #[test]
    fn test_compare_delegates_to_mode_over_encodings() {
        let cache = fresh_cache();
        let low = Value::ssn_in("078051120", &cache).unwrap();
        let high = Value::ssn_in("123456789", &cache).unwrap();
        assert_eq!(low.compare_in(&high, CompareMode::Binary), Ordering::Less);
        assert_eq!(high.compare_in(&low, CompareMode::Binary), Ordering::Greater);
        assert_eq!(low.compare_in(&low, CompareMode::Binary), Ordering::Equal);
    }

    #[test]
    fn test_null_sorts_first() {
        let cache = fresh_cache();
        let v = Value::ssn_in("078051120", &cache).unwrap();
        assert_eq!(Value::Null.compare_in(&v, CompareMode::Binary), Ordering::Less);
        assert_eq!(v.compare_in(&Value::Null, CompareMode::Binary), Ordering::Greater);
        assert_eq!(
            Value::Null.compare_in(&Value::Null, CompareMode::Binary),
            Ordering::Equal
        );
    }

    #[test]
    fn test_cross_kind_ordering_is_encoding_pure() {
        // Ordering ignores the kind tag; only equality is kind-sensitive.
        let cache = fresh_cache();
        let plain = Value::ssn_in("123456789", &cache).unwrap();
        let masked = Value::ssn_masked_in("123456789", &cache).unwrap();
        assert_eq!(plain.compare_in(&masked, CompareMode::Binary), Ordering::Equal);
    }

    // === Truncation ===

    #[test]
    fn test_convert_precision_zero_is_identity() {
        let cache = fresh_cache();
        let v = Value::ssn_in("123456789", &cache).unwrap();
        assert_eq!(v.convert_precision_in(0, &cache), v);
    }

    #[test]
    fn test_convert_precision_covering_length_is_identity() {
        let cache = fresh_cache();
        let v = Value::ssn_in("123456789", &cache).unwrap();
        assert_eq!(v.convert_precision_in(11, &cache), v);
        assert_eq!(v.convert_precision_in(100, &cache), v);
    }

    #[test]
    fn test_convert_precision_truncates_stored_form() {
        let cache = fresh_cache();
        let v = Value::ssn_in("123456789", &cache).unwrap();
        let t = v.convert_precision_in(5, &cache);
        // Truncation cuts the stored form mid-group without re-validating.
        assert_eq!(t.as_encoding(), Some("123-4"));
        assert_eq!(t.display_text(), "4");
    }

    #[test]
    fn test_convert_precision_preserves_kind() {
        let cache = fresh_cache();
        let v = Value::ssn_masked_in("123456789", &cache).unwrap();
        let t = v.convert_precision_in(5, &cache);
        assert_eq!(t.type_name(), "SsnMasked");
        assert_eq!(t.display_text(), "***-***-4");
    }

    #[test]
    fn test_convert_precision_on_null() {
        assert_eq!(Value::Null.convert_precision(5), Value::Null);
    }

    #[test]
    fn test_truncated_value_is_interned_like_any_other() {
        let cache = fresh_cache();
        let v = Value::ssn_in("123456789", &cache).unwrap();
        let a = v.convert_precision_in(5, &cache);
        let b = v.convert_precision_in(5, &cache);
        assert!(a
            .as_ssn()
            .unwrap()
            .shares_storage_with(b.as_ssn().unwrap()));
    }

    // === Display / sizing / rendering ===

    #[test]
    fn test_display_text_per_kind() {
        let cache = fresh_cache();
        let plain = Value::ssn_in("078051120", &cache).unwrap();
        let masked = Value::ssn_masked_in("078051120", &cache).unwrap();
        assert_eq!(plain.display_text(), "1120");
        assert_eq!(masked.display_text(), "***-***-1120");
        assert_eq!(Value::Null.display_text(), "NULL");
    }

    #[test]
    fn test_display_trait_delegates() {
        let cache = fresh_cache();
        let masked = Value::ssn_masked_in("078051120", &cache).unwrap();
        assert_eq!(format!("{}", masked), "***-***-1120");
        assert_eq!(format!("{}", Value::Null), "NULL");
    }

    #[test]
    fn test_precision_and_sizes() {
        let cache = fresh_cache();
        let v = Value::ssn_in("078051120", &cache).unwrap();
        assert_eq!(v.precision(), 9);
        assert_eq!(v.display_size(), 11);
        assert_eq!(v.memory_size(), 2 * 11 + VALUE_OVERHEAD_BYTES);
        assert_eq!(Value::Null.precision(), 0);
        assert_eq!(Value::Null.memory_size(), VALUE_OVERHEAD_BYTES);
    }

    #[test]
    fn test_storage_class_is_shared_by_both_kinds() {
        let cache = fresh_cache();
        let plain = Value::ssn_in("078051120", &cache).unwrap();
        let masked = Value::ssn_masked_in("078051120", &cache).unwrap();
        assert_eq!(plain.storage_class(), StorageClass::StringFamily);
        assert_eq!(masked.storage_class(), StorageClass::StringFamily);
        assert_eq!(Value::Null.storage_class(), StorageClass::Null);
    }

    #[test]
    fn test_to_sql_renders_full_encoding_for_both_kinds() {
        let cache = fresh_cache();
        let plain = Value::ssn_in("078051120", &cache).unwrap();
        let masked = Value::ssn_masked_in("078051120", &cache).unwrap();
        assert_eq!(plain.to_sql(), "'078-05-1120'");
        assert_eq!(masked.to_sql(), "'078-05-1120'");
        assert_eq!(Value::Null.to_sql(), "NULL");
    }

    // === Binding ===

    #[derive(Default)]
    struct RecordingSlot {
        bound: Option<Option<String>>,
    }

    impl BindSlot for RecordingSlot {
        fn bind_string(&mut self, value: &str) {
            self.bound = Some(Some(value.to_string()));
        }

        fn bind_null(&mut self) {
            self.bound = Some(None);
        }
    }

    #[test]
    fn test_bind_passes_canonical_encoding_unmasked() {
        let cache = fresh_cache();
        let masked = Value::ssn_masked_in("078051120", &cache).unwrap();
        let mut slot = RecordingSlot::default();
        masked.bind_to(&mut slot);
        assert_eq!(slot.bound, Some(Some("078-05-1120".to_string())));
    }

    #[test]
    fn test_bind_null() {
        let mut slot = RecordingSlot::default();
        Value::Null.bind_to(&mut slot);
        assert_eq!(slot.bound, Some(None));
    }
}
