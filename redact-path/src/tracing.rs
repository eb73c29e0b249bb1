//! Adapters for emitting redaction failures through `tracing`.
//!
//! With the `tracing` feature the walker itself emits `trace` events for
//! every step and a `debug` event when a call fails. This module adds an
//! opt-in `warn` for call sites where a failed redaction must be visible.
//!
//! # Example
//!
//! ```ignore
//! use redact_path::tracing::TracingRedactResultExt;
//!
//! redact(&["password"], &mut login).warn_on_failure()?;
//! ```

use tracing::field::{DisplayValue, display};

use crate::redaction::{RedactError, Result};

/// Extension trait for logging a failed redaction as a structured event.
pub trait TracingRedactResultExt {
    /// Emits a `warn` event carrying the error's code, kind, path and type
    /// when the result is an error, then returns the result unchanged.
    #[must_use]
    fn warn_on_failure(self) -> Self;
}

impl<T> TracingRedactResultExt for Result<T> {
    fn warn_on_failure(self) -> Self {
        if let Err(err) = &self {
            tracing::warn!(
                code = err.code(),
                kind = %err.kind(),
                path = %err.path(),
                type_name = err.type_name(),
                error = %err,
                "path redaction failed"
            );
        }
        self
    }
}

/// Extension trait for recording a `RedactError` as a display field.
pub trait TracingRedactErrorExt {
    /// Wraps the error for use as a `tracing` field value.
    fn tracing_error(&self) -> DisplayValue<&RedactError>;
}

impl TracingRedactErrorExt for RedactError {
    fn tracing_error(&self) -> DisplayValue<&RedactError> {
        display(self)
    }
}
