//! Path-directed, in-place redaction of nested data.
//!
//! A path is a list of segments. [`redact`] walks the path into a value and
//! resets whatever it addresses to its zero value:
//!
//! - **Records** (structs with `#[derive(Redactable)]`) consume a segment as a
//!   field name.
//! - **Keyed maps** consume a segment as a key. The last segment resets the
//!   whole entry.
//! - **Sequences** apply the remaining path to every element.
//! - **References** (`Option`, `Box`, cells, locks) are followed without
//!   consuming a segment.
//!
//! An empty path resets the root value itself. A path that does not match the
//! shape of the value fails with a [`RedactError`]; mutations already applied
//! are kept.
//!
//! What this crate does:
//! - defines the [`Redactable`] trait and the capability traits the walker uses
//! - implements them for standard library types (and `serde_json::Value`, chrono,
//!   time and uuid types behind feature flags)
//! - provides logging integrations behind feature flags (`slog`, `tracing`)
//!
//! What it does not do:
//! - copy values: redaction always mutates in place
//! - redact map keys or set elements
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use redact_path::{RedactError, Redactable, redact};
//!
//! #[derive(Redactable)]
//! struct Login {
//!     user: String,
//!     password: String,
//! }
//!
//! # fn main() -> Result<(), RedactError> {
//! let mut logins = vec![Login { user: "john".into(), password: "letmein".into() }];
//! redact(&["password"], &mut logins)?;
//! assert_eq!(logins[0].password, "");
//! assert_eq!(logins[0].user, "john");
//!
//! let mut by_id = HashMap::from([("a".to_string(), vec![Login { user: "mary".into(), password: "123456".into() }])]);
//! redact(&["a", "password"], &mut by_id)?;
//! assert_eq!(by_id["a"][0].password, "");
//! # Ok(())
//! # }
//! ```
//!
//! The `Redactable` derive macro lives in `redact-path-derive` and is
//! re-exported from this crate.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use redact_path_derive::Redactable;

#[allow(unused_extern_crates)]
extern crate self as redact_path;

// Module declarations
pub mod policy;
mod redaction;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "tracing")]
pub mod tracing;

// Re-exports from policy module
pub use policy::{MapEntryPolicy, MissingKeyPolicy, RedactOptions};
// Re-exports from redaction module
pub use redaction::{
    Cursor, KeyedMap, Kind, MapKey, PathPrefix, Record, RedactError, RedactPathExt, Redactable,
    Redactor, Reference, Result, Sequence, Shape, redact,
};
