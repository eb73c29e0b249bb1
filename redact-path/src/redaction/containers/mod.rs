//! `Redactable` implementations for standard library types.
//!
//! | Kind        | Types                                                          |
//! |-------------|----------------------------------------------------------------|
//! | `Leaf`      | strings, numbers, `bool`, `char`, time values, sets            |
//! | `Sequence`  | `Vec`, `VecDeque`, `LinkedList`, `[T; N]`                      |
//! | `KeyedMap`  | `HashMap`, `BTreeMap` (keys built through `MapKey`)            |
//! | `Reference` | `Option`, `Box`, `RefCell`, `Mutex`, `RwLock`, `Rc<RefCell<_>>`, `Arc<Mutex<_>>`, `Arc<RwLock<_>>` |
//!
//! ## Map Keys Are Never Redacted
//!
//! A path segment selects a map entry; only the entry's value is reset.
//!
//! ## Sets Are Leaves
//!
//! Set elements cannot be mutated in place without breaking hashing or
//! ordering, so sets can only be reset as a whole.

mod cells;
#[cfg(feature = "ip-address")]
mod ip_address;
mod leaves;
mod maps;
mod sequences;
mod sets;
mod wrappers;


// =============================================================================
// Leaf implementation helper
// =============================================================================

macro_rules! impl_redactable_leaf {
    ($ty:ty => $zero:expr) => {
        impl crate::redaction::traits::Redactable for $ty {
            fn reset(&mut self) {
                *self = $zero;
            }

            fn shape(&mut self) -> crate::redaction::traits::Shape<'_> {
                crate::redaction::traits::Shape::Leaf
            }

            fn zeroed() -> Self {
                $zero
            }
        }
    };
}

pub(super) use impl_redactable_leaf;
