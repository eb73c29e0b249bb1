//! The option bundle carried by a `Redactor`.

use super::policies::{MapEntryPolicy, MissingKeyPolicy};

/// Options controlling how paths are applied to keyed maps.
///
/// The defaults insert zero values for missing terminal keys and only walk
/// through map entries that are references.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RedactOptions {
    pub missing_keys: MissingKeyPolicy,
    pub map_entries: MapEntryPolicy,
}

impl RedactOptions {
    pub const fn new() -> Self {
        Self {
            missing_keys: MissingKeyPolicy::Insert,
            map_entries: MapEntryPolicy::ByReference,
        }
    }

    #[must_use]
    pub const fn with_missing_keys(mut self, policy: MissingKeyPolicy) -> Self {
        self.missing_keys = policy;
        self
    }

    #[must_use]
    pub const fn with_map_entries(mut self, policy: MapEntryPolicy) -> Self {
        self.map_entries = policy;
        self
    }
}
