//! `Sequence` implementations: every element receives the same remaining path.

use std::collections::{LinkedList, VecDeque};

use crate::redaction::{
    error::RedactError,
    redact::Cursor,
    traits::{Redactable, Sequence, Shape},
};

macro_rules! impl_redactable_sequence {
    ($ty:ident) => {
        impl<T> Redactable for $ty<T>
        where
            T: Redactable,
        {
            fn reset(&mut self) {
                self.clear();
            }

            fn shape(&mut self) -> Shape<'_> {
                Shape::Sequence(self)
            }

            fn zeroed() -> Self {
                $ty::new()
            }
        }

        impl<T> Sequence for $ty<T>
        where
            T: Redactable,
        {
            fn visit_elements(&mut self, cursor: Cursor<'_>) -> Result<(), RedactError> {
                self.iter_mut().try_for_each(|element| cursor.enter(element))
            }
        }
    };
}

impl_redactable_sequence!(Vec);
impl_redactable_sequence!(VecDeque);
impl_redactable_sequence!(LinkedList);

// =============================================================================
// Fixed-size arrays
// =============================================================================

impl<T, const N: usize> Redactable for [T; N]
where
    T: Redactable,
{
    fn reset(&mut self) {
        self.iter_mut().for_each(Redactable::reset);
    }

    fn shape(&mut self) -> Shape<'_> {
        Shape::Sequence(self)
    }

    fn zeroed() -> Self {
        std::array::from_fn(|_| T::zeroed())
    }
}

impl<T, const N: usize> Sequence for [T; N]
where
    T: Redactable,
{
    fn visit_elements(&mut self, cursor: Cursor<'_>) -> Result<(), RedactError> {
        self.iter_mut().try_for_each(|element| cursor.enter(element))
    }
}
