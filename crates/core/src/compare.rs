//! Comparison modes for string-family values
//!
//! Every string-family value kind delegates ordering to a [`CompareMode`] so
//! that all of them sort consistently under the active collation. The engine
//! picks one mode per session; individual value kinds never hard-code their
//! own ordering rules.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Ordering rules applied uniformly across string-family values
///
/// `Binary` is the default mode and compares raw byte sequences. The
/// case-insensitive mode exists for collations that fold ASCII case; it only
/// folds ASCII (no locale tables), matching the engine's byte-level contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CompareMode {
    /// Byte-wise comparison of the stored encodings
    #[default]
    Binary,
    /// ASCII case-insensitive comparison
    CaseInsensitive,
}

impl CompareMode {
    /// Compare two strings under this mode
    pub fn compare_str(&self, a: &str, b: &str) -> Ordering {
        match self {
            CompareMode::Binary => a.cmp(b),
            CompareMode::CaseInsensitive => {
                let folded = a
                    .bytes()
                    .map(|c| c.to_ascii_lowercase())
                    .cmp(b.bytes().map(|c| c.to_ascii_lowercase()));
                if folded != Ordering::Equal {
                    return folded;
                }
                // Stable tie-break so equal-under-fold strings still order
                // deterministically.
                a.cmp(b)
            }
        }
    }
}
