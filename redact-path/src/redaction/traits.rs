//! Capability traits for path-directed redaction.
//!
//! A value taking part in redaction implements [`Redactable`], which knows how
//! to reset the value to its zero state and which structural [`Shape`] it has.
//! The shape hands the walker one of the capability traits:
//!
//! - [`Record`]: named fields
//! - [`KeyedMap`]: entries looked up by key
//! - [`Sequence`]: ordered elements, all visited with the same remaining path
//! - [`Reference`]: a single indirection, visited with the same remaining path
//!
//! Leaves expose no capability. `#[derive(Redactable)]` implements these for
//! user types; standard library types are covered in `containers`.

use std::fmt;

use super::{error::RedactError, redact::Cursor};

// =============================================================================
// Kind / Shape - structural role at one traversal step
// =============================================================================

/// Structural role a value plays at a traversal step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Kind {
    Record,
    KeyedMap,
    Sequence,
    Reference,
    Leaf,
}

impl Kind {
    /// Returns the snake-case name used in error messages and structured logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Record => "record",
            Self::KeyedMap => "keyed_map",
            Self::Sequence => "sequence",
            Self::Reference => "reference",
            Self::Leaf => "leaf",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A mutable view of a value through the capability matching its kind.
pub enum Shape<'a> {
    Record(&'a mut dyn Record),
    KeyedMap(&'a mut dyn KeyedMap),
    Sequence(&'a mut dyn Sequence),
    Reference(&'a mut dyn Reference),
    Leaf,
}

impl Shape<'_> {
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Record(_) => Kind::Record,
            Self::KeyedMap(_) => Kind::KeyedMap,
            Self::Sequence(_) => Kind::Sequence,
            Self::Reference(_) => Kind::Reference,
            Self::Leaf => Kind::Leaf,
        }
    }
}

impl fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Shape").field(&self.kind()).finish()
    }
}

// =============================================================================
// Redactable - the value handle the walker operates on
// =============================================================================

/// A value that can be located by path and reset to its zero value in place.
///
/// The zero value is the empty state of the type: empty strings and
/// collections, `0`, `false`, `None`, and for records every field zeroed.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Redactable`",
    label = "this type cannot be walked by path",
    note = "use `#[derive(Redactable)]` on the type definition",
    note = "or mark the field with `#[redact(skip)]` if it never needs redaction"
)]
pub trait Redactable {
    /// Replaces the value with its zero value, in place.
    fn reset(&mut self);

    /// Returns the capability matching this value's structural kind.
    fn shape(&mut self) -> Shape<'_>;

    /// Builds the zero value of this type.
    fn zeroed() -> Self
    where
        Self: Sized;

    /// Name of the concrete type, used in diagnostics.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Borrows the value as a trait object. Derived `Record` impls hand out
    /// fields through this so a non-`Redactable` field fails at its type.
    #[doc(hidden)]
    fn as_redactable_mut(&mut self) -> &mut dyn Redactable
    where
        Self: Sized,
    {
        self
    }
}

// =============================================================================
// Capabilities
// =============================================================================

/// A value with named fields.
pub trait Record {
    /// Returns the field addressed by `name`, if the record has one.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Redactable>;

    /// Names accepted by [`Record::field_mut`], in declaration order.
    fn field_names(&self) -> &'static [&'static str];
}

/// A keyed collection whose entries are looked up by a path segment.
pub trait KeyedMap {
    /// Returns the entry stored under `key`.
    ///
    /// Segments that do not parse as the key type behave like absent keys.
    fn entry_mut(&mut self, key: &str) -> Option<&mut dyn Redactable>;

    /// Inserts the zero value of the value type under `key`.
    ///
    /// Returns `false` when `key` cannot be converted to the key type.
    fn insert_zeroed(&mut self, key: &str) -> bool;

    /// Whether the walker may descend into entries that are not references.
    ///
    /// Typed maps answer `false`, so deep paths must go through a reference
    /// stored in the map unless `MapEntryPolicy::InPlace` is selected.
    fn entries_addressable(&self) -> bool {
        false
    }
}

/// An ordered collection. Every element receives the same remaining path.
pub trait Sequence {
    /// Enters every element in order, stopping at the first failure.
    ///
    /// ```ignore
    /// fn visit_elements(&mut self, cursor: Cursor<'_>) -> Result<(), RedactError> {
    ///     self.iter_mut().try_for_each(|element| cursor.enter(element))
    /// }
    /// ```
    fn visit_elements(&mut self, cursor: Cursor<'_>) -> Result<(), RedactError>;
}

/// A single indirection. The target receives the same remaining path.
pub trait Reference {
    /// Enters the target, or reports why it cannot be reached.
    ///
    /// Use [`Cursor::nil_reference`] for an empty reference and
    /// [`Cursor::not_a_reference`] when the target cannot be borrowed mutably.
    fn visit_target(&mut self, cursor: Cursor<'_>) -> Result<(), RedactError>;
}

/// Conversion from a path segment to a map key.
pub trait MapKey: Sized {
    /// Parses `segment`, returning `None` when it is not a valid key.
    fn from_segment(segment: &str) -> Option<Self>;
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::{Kind, Redactable, Shape};

    #[test]
    fn kind_display_is_snake_case() {
        assert_eq!(Kind::KeyedMap.to_string(), "keyed_map");
        assert_eq!(Kind::Record.to_string(), "record");
        assert_eq!(Kind::Leaf.as_str(), "leaf");
    }

    #[test]
    fn shape_reports_kind() {
        let mut values = vec![1_u8, 2];
        assert_eq!(values.shape().kind(), Kind::Sequence);
        let mut text = String::from("x");
        assert!(matches!(text.shape(), Shape::Leaf));
    }

    #[test]
    fn type_name_is_concrete_through_dyn() {
        let mut value = 7_u32;
        let handle: &mut dyn Redactable = &mut value;
        assert_eq!(handle.type_name(), "u32");
    }
}
