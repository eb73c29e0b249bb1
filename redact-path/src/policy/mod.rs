//! Redaction options: how the walker treats keyed maps.
//!
//! This module provides:
//!
//! - **Policies** (`policies`): [`MissingKeyPolicy`] for the last segment of a
//!   path that lands on a map, and [`MapEntryPolicy`] for descending through
//!   map entries.
//!
//! - **Options** (`options`): [`RedactOptions`], the bundle a `Redactor`
//!   carries.
//!
//! # Example
//!
//! ```rust
//! use redact_path::{MapEntryPolicy, MissingKeyPolicy, RedactOptions};
//!
//! let options = RedactOptions::new()
//!     .with_missing_keys(MissingKeyPolicy::Reject)
//!     .with_map_entries(MapEntryPolicy::InPlace);
//! assert_eq!(options.missing_keys, MissingKeyPolicy::Reject);
//! ```

pub mod options;
pub mod policies;

pub use options::RedactOptions;
pub use policies::{MapEntryPolicy, MissingKeyPolicy};
