//! Leaf `Redactable` implementations for scalar-like types.

use std::{
    borrow::Cow,
    ffi::OsString,
    marker::PhantomData,
    path::PathBuf,
    time::{Duration, SystemTime},
};

use super::impl_redactable_leaf;
use crate::redaction::traits::{Redactable, Shape};

// =============================================================================
// Text
// =============================================================================

impl_redactable_leaf!(String => String::new());
impl_redactable_leaf!(Box<str> => Box::default());
impl_redactable_leaf!(PathBuf => PathBuf::new());
impl_redactable_leaf!(OsString => OsString::new());

impl Redactable for Cow<'_, str> {
    fn reset(&mut self) {
        *self = Cow::Borrowed("");
    }

    fn shape(&mut self) -> Shape<'_> {
        Shape::Leaf
    }

    fn zeroed() -> Self {
        Cow::Borrowed("")
    }
}

// =============================================================================
// Scalars
// =============================================================================

impl_redactable_leaf!(bool => false);
impl_redactable_leaf!(char => '\0');

// Signed integers
impl_redactable_leaf!(i8 => 0);
impl_redactable_leaf!(i16 => 0);
impl_redactable_leaf!(i32 => 0);
impl_redactable_leaf!(i64 => 0);
impl_redactable_leaf!(i128 => 0);
impl_redactable_leaf!(isize => 0);

// Unsigned integers
impl_redactable_leaf!(u8 => 0);
impl_redactable_leaf!(u16 => 0);
impl_redactable_leaf!(u32 => 0);
impl_redactable_leaf!(u64 => 0);
impl_redactable_leaf!(u128 => 0);
impl_redactable_leaf!(usize => 0);

// Floating point
impl_redactable_leaf!(f32 => 0.0);
impl_redactable_leaf!(f64 => 0.0);

// Unit type
impl_redactable_leaf!(() => ());

// =============================================================================
// std::time
// =============================================================================

impl_redactable_leaf!(Duration => Duration::ZERO);
impl_redactable_leaf!(SystemTime => SystemTime::UNIX_EPOCH);

impl<T: ?Sized> Redactable for PhantomData<T> {
    fn reset(&mut self) {}

    fn shape(&mut self) -> Shape<'_> {
        Shape::Leaf
    }

    fn zeroed() -> Self {
        PhantomData
    }
}

// =============================================================================
// Date/time leaves (feature-gated)
// =============================================================================

#[cfg(feature = "chrono")]
mod chrono_leaves {
    use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};

    use super::impl_redactable_leaf;

    // The chrono defaults are the Unix epoch and midnight.
    impl_redactable_leaf!(DateTime<Utc> => DateTime::default());
    impl_redactable_leaf!(DateTime<FixedOffset> => DateTime::default());
    impl_redactable_leaf!(NaiveDateTime => NaiveDateTime::default());
    impl_redactable_leaf!(NaiveDate => NaiveDate::default());
    impl_redactable_leaf!(NaiveTime => NaiveTime::default());
    impl_redactable_leaf!(TimeDelta => TimeDelta::zero());
}

#[cfg(feature = "time")]
mod time_leaves {
    use time::{Date, Duration, OffsetDateTime, PrimitiveDateTime, Time};

    use super::impl_redactable_leaf;

    impl_redactable_leaf!(OffsetDateTime => OffsetDateTime::UNIX_EPOCH);
    impl_redactable_leaf!(PrimitiveDateTime => PrimitiveDateTime::new(
        OffsetDateTime::UNIX_EPOCH.date(),
        Time::MIDNIGHT
    ));
    impl_redactable_leaf!(Date => OffsetDateTime::UNIX_EPOCH.date());
    impl_redactable_leaf!(Time => Time::MIDNIGHT);
    impl_redactable_leaf!(Duration => Duration::ZERO);
}

// =============================================================================
// UUID leaves (feature-gated)
// =============================================================================

#[cfg(feature = "uuid")]
mod uuid_leaves {
    use uuid::Uuid;

    use super::impl_redactable_leaf;
    use crate::redaction::traits::MapKey;

    impl_redactable_leaf!(Uuid => Uuid::nil());

    impl MapKey for Uuid {
        fn from_segment(segment: &str) -> Option<Self> {
            Uuid::parse_str(segment).ok()
        }
    }
}
