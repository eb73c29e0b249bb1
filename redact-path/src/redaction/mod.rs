//! Path traversal and entrypoints.
//!
//! This module provides the machinery for applying a path:
//!
//! - **`traits`**: `Redactable` and the capability traits (`Record`,
//!   `KeyedMap`, `Sequence`, `Reference`, `MapKey`)
//! - **`redact`**: the walker, `Redactor` and the `redact` entrypoint
//! - **`error`**: `RedactError` and the path prefix it reports
//! - **`containers`**: `Redactable` implementations for std types
//! - **`json`**: `serde_json::Value` documents (behind the `json` feature)
//!
//! Options controlling map handling live in `crate::policy`.

mod containers;
mod error;
#[cfg(feature = "json")]
mod json;
mod redact;
mod traits;

pub use error::{PathPrefix, RedactError, Result};
pub use redact::{Cursor, RedactPathExt, Redactor, redact};
pub use traits::{KeyedMap, Kind, MapKey, Record, Redactable, Reference, Sequence, Shape};
