//! `Reference` implementations for owning wrappers.

use crate::redaction::{
    error::RedactError,
    redact::Cursor,
    traits::{Redactable, Reference, Shape},
};

// =============================================================================
// Option - a reference that may be nil
// =============================================================================

impl<T> Redactable for Option<T>
where
    T: Redactable,
{
    fn reset(&mut self) {
        *self = None;
    }

    fn shape(&mut self) -> Shape<'_> {
        Shape::Reference(self)
    }

    fn zeroed() -> Self {
        None
    }
}

impl<T> Reference for Option<T>
where
    T: Redactable,
{
    fn visit_target(&mut self, cursor: Cursor<'_>) -> Result<(), RedactError> {
        match self {
            Some(target) => cursor.enter(target),
            None => Err(cursor.nil_reference()),
        }
    }
}

// =============================================================================
// Box
// =============================================================================

impl<T> Redactable for Box<T>
where
    T: Redactable,
{
    fn reset(&mut self) {
        (**self).reset();
    }

    fn shape(&mut self) -> Shape<'_> {
        Shape::Reference(self)
    }

    fn zeroed() -> Self {
        Box::new(T::zeroed())
    }
}

impl<T> Reference for Box<T>
where
    T: Redactable,
{
    fn visit_target(&mut self, cursor: Cursor<'_>) -> Result<(), RedactError> {
        cursor.enter(&mut **self)
    }
}
