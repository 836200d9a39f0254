//! Output-parameter binding seam
//!
//! The driver layer hands the engine opaque parameter slots; value kinds push
//! their canonical form into a slot through [`BindSlot`]. This trait is the
//! only contact point between the value layer and the driver protocol, so
//! tests can substitute a recording implementation.

/// One output-parameter slot in the external driver layer
///
/// Implementations are side-effecting: each call overwrites whatever the slot
/// previously held. String-family values always bind their canonical stored
/// encoding verbatim; no display-layer transformation (such as masking) is
/// applied at bind time.
pub trait BindSlot {
    /// Bind a string parameter
    fn bind_string(&mut self, value: &str);

    /// Bind SQL NULL
    fn bind_null(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_bind_string_records_value() {
        let mut slot = RecordingSlot::default();
        slot.bind_string("078-05-1120");
        assert_eq!(slot.bound, Some(Some("078-05-1120".to_string())));
    }

    #[test]
    fn test_bind_null_records_null() {
        let mut slot = RecordingSlot::default();
        slot.bind_null();
        assert_eq!(slot.bound, Some(None));
    }

    #[test]
    fn test_rebind_overwrites() {
        let mut slot = RecordingSlot::default();
        slot.bind_string("first");
        slot.bind_null();
        assert_eq!(slot.bound, Some(None));
    }
}
