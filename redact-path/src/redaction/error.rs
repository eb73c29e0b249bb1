//! Errors raised when a path does not match the shape of a value.
//!
//! Every variant records where the walk stopped ([`PathPrefix`]), the Rust
//! type found there and, through [`RedactError::kind`], its structural kind.

use std::fmt;

use thiserror::Error;

use super::traits::Kind;

// =============================================================================
// PathPrefix - the consumed part of a path
// =============================================================================

/// The path segments consumed before a failure.
///
/// Displays as the segments joined with `.`, or `<root>` when no segment was
/// consumed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize), serde(transparent))]
pub struct PathPrefix(Vec<String>);

impl PathPrefix {
    pub(crate) fn new(segments: &[&str]) -> Self {
        Self(segments.iter().map(|segment| (*segment).to_owned()).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PathPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        f.write_str(&self.0.join("."))
    }
}

// =============================================================================
// RedactError
// =============================================================================

/// Failure of a redaction call.
///
/// Mutations applied before the failure (for example to earlier elements of a
/// sequence) are kept.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RedactError {
    #[error("cannot borrow {type_name} mutably at `{path}`: {reason}")]
    NotAReference {
        path: PathPrefix,
        type_name: &'static str,
        reason: &'static str,
    },

    #[error(
        "record {type_name} has no field `{field}` at `{path}` (fields: {})",
        .available.join(", ")
    )]
    NoSuchField {
        path: PathPrefix,
        field: String,
        type_name: &'static str,
        available: &'static [&'static str],
    },

    #[error("map {type_name} has no key `{key}` at `{path}`")]
    NoSuchKey {
        path: PathPrefix,
        key: String,
        type_name: &'static str,
    },

    #[error("nil reference {type_name} at `{path}`")]
    NilReference {
        path: PathPrefix,
        type_name: &'static str,
    },

    #[error(
        "entry `{key}` of map {type_name} is stored by value ({entry_type}) and cannot be \
         mutated below `{path}`"
    )]
    Unaddressable {
        path: PathPrefix,
        key: String,
        type_name: &'static str,
        entry_type: &'static str,
    },

    #[error("{type_name} at `{path}` has no children but the path continues with `{}`", .remaining.join("."))]
    UnsupportedType {
        path: PathPrefix,
        type_name: &'static str,
        remaining: Vec<String>,
    },
}

pub type Result<T> = std::result::Result<T, RedactError>;

impl RedactError {
    /// Stable identifier of the failure, suitable for structured logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotAReference { .. } => "not_a_reference",
            Self::NoSuchField { .. } => "no_such_field",
            Self::NoSuchKey { .. } => "no_such_key",
            Self::NilReference { .. } => "nil_reference",
            Self::Unaddressable { .. } => "unaddressable",
            Self::UnsupportedType { .. } => "unsupported_type",
        }
    }

    /// Structural kind of the value at which the walk stopped.
    pub fn kind(&self) -> Kind {
        match self {
            Self::NotAReference { .. } | Self::NilReference { .. } => Kind::Reference,
            Self::NoSuchField { .. } => Kind::Record,
            Self::NoSuchKey { .. } | Self::Unaddressable { .. } => Kind::KeyedMap,
            Self::UnsupportedType { .. } => Kind::Leaf,
        }
    }

    /// Segments consumed before the failing step.
    pub fn path(&self) -> &PathPrefix {
        match self {
            Self::NotAReference { path, .. }
            | Self::NoSuchField { path, .. }
            | Self::NoSuchKey { path, .. }
            | Self::NilReference { path, .. }
            | Self::Unaddressable { path, .. }
            | Self::UnsupportedType { path, .. } => path,
        }
    }

    /// Rust type of the value at which the walk stopped.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::NotAReference { type_name, .. }
            | Self::NoSuchField { type_name, .. }
            | Self::NoSuchKey { type_name, .. }
            | Self::NilReference { type_name, .. }
            | Self::Unaddressable { type_name, .. }
            | Self::UnsupportedType { type_name, .. } => type_name,
        }
    }

    /// Structured form of the error: code, kind, path, type and message.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.code(),
            "kind": self.kind(),
            "path": self.path(),
            "type": self.type_name(),
            "message": self.to_string(),
        })
    }
}
