//! Map handling policies.

// =============================================================================
// MissingKeyPolicy
// =============================================================================

/// What the last segment of a path does when it names a key the map lacks.
///
/// With `Insert`, `["sessions", "abc"]` on an empty `sessions` map leaves it
/// holding `"abc"` mapped to the zero value, matching what a plain assignment
/// of the zero value would do.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum MissingKeyPolicy {
    /// Insert the zero value of the map's value type under the key.
    #[default]
    Insert,
    /// Fail with `RedactError::NoSuchKey`.
    Reject,
}

// =============================================================================
// MapEntryPolicy
// =============================================================================

/// Whether a path may continue below a map entry stored by value.
///
/// Under `ByReference` only entries that are references (`Box`, `Option`,
/// `Rc<RefCell<_>>`, `Arc<Mutex<_>>`, ...), sequences or nested maps can be
/// walked into. Record and leaf entries fail with
/// `RedactError::Unaddressable`; they can still be zeroed as a whole by
/// ending the path at their key.
///
/// `InPlace` walks into any entry, since Rust maps hand out mutable borrows of
/// their values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum MapEntryPolicy {
    #[default]
    ByReference,
    InPlace,
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::{MapEntryPolicy, MissingKeyPolicy};

    #[test]
    fn policies_use_snake_case_names() {
        assert_eq!(
            serde_json::to_value(MapEntryPolicy::ByReference).unwrap(),
            "by_reference"
        );
        let policy: MissingKeyPolicy = serde_json::from_str("\"reject\"").unwrap();
        assert_eq!(policy, MissingKeyPolicy::Reject);
    }
}
