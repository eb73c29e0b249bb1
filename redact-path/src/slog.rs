//! Adapters for emitting redaction failures through `slog`.
//!
//! This module connects `RedactError` with `slog`:
//!
//! - `slog::Value` serializes the error as structured JSON via `slog`'s
//!   nested-value support (`code`, `kind`, `path`, `type`, `message`).
//! - `slog::KV` emits the same information as flat `redact.*` keys, for
//!   drains without nested-value support.
//!
//! Only the failure is logged. The value being redacted never reaches the
//! logger.

use serde_json::Value as JsonValue;
use slog::{KV, Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::redaction::RedactError;

/// A redaction failure rendered as JSON, ready to be logged.
#[derive(Clone, Debug, PartialEq)]
pub struct RedactErrorJson(JsonValue);

impl RedactErrorJson {
    /// The structured form of the failure.
    pub fn value(&self) -> &JsonValue {
        &self.0
    }
}

impl SlogValue for RedactErrorJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.0.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

impl SlogValue for RedactError {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        self.slog_error().serialize(record, key, serializer)
    }
}

impl KV for RedactError {
    fn serialize(&self, _record: &Record<'_>, serializer: &mut dyn Serializer) -> SlogResult {
        serializer.emit_str("redact.code", self.code())?;
        serializer.emit_str("redact.kind", self.kind().as_str())?;
        serializer.emit_arguments("redact.path", &format_args!("{}", self.path()))?;
        serializer.emit_str("redact.type", self.type_name())?;
        serializer.emit_arguments("redact.message", &format_args!("{self}"))
    }
}

/// Extension trait for logging a redaction failure as structured JSON.
///
/// ## Example
/// ```ignore
/// use redact_path::slog::SlogRedactErrorExt;
///
/// if let Err(err) = redact(&["password"], &mut login) {
///     warn!(logger, "redaction failed"; "error" => err.slog_error());
/// }
/// ```
pub trait SlogRedactErrorExt {
    /// Returns a `slog::Value` that serializes the failure as JSON.
    fn slog_error(&self) -> RedactErrorJson;
}

impl SlogRedactErrorExt for RedactError {
    fn slog_error(&self) -> RedactErrorJson {
        RedactErrorJson(self.to_json())
    }
}
