//! `KeyedMap` implementations. Keys select entries and are never modified.

use std::{
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
    rc::Rc,
    sync::Arc,
};

use crate::redaction::traits::{KeyedMap, MapKey, Redactable, Shape};

// =============================================================================
// Map implementations
// =============================================================================

impl<K, V, S> Redactable for HashMap<K, V, S>
where
    K: MapKey + Hash + Eq,
    V: Redactable,
    S: BuildHasher + Default,
{
    fn reset(&mut self) {
        self.clear();
    }

    fn shape(&mut self) -> Shape<'_> {
        Shape::KeyedMap(self)
    }

    fn zeroed() -> Self {
        HashMap::default()
    }
}

impl<K, V, S> KeyedMap for HashMap<K, V, S>
where
    K: MapKey + Hash + Eq,
    V: Redactable,
    S: BuildHasher + Default,
{
    fn entry_mut(&mut self, key: &str) -> Option<&mut dyn Redactable> {
        let key = K::from_segment(key)?;
        let value: &mut dyn Redactable = self.get_mut(&key)?;
        Some(value)
    }

    fn insert_zeroed(&mut self, key: &str) -> bool {
        K::from_segment(key).is_some_and(|key| {
            self.insert(key, V::zeroed());
            true
        })
    }
}

impl<K, V> Redactable for BTreeMap<K, V>
where
    K: MapKey + Ord,
    V: Redactable,
{
    fn reset(&mut self) {
        self.clear();
    }

    fn shape(&mut self) -> Shape<'_> {
        Shape::KeyedMap(self)
    }

    fn zeroed() -> Self {
        BTreeMap::new()
    }
}

impl<K, V> KeyedMap for BTreeMap<K, V>
where
    K: MapKey + Ord,
    V: Redactable,
{
    fn entry_mut(&mut self, key: &str) -> Option<&mut dyn Redactable> {
        let key = K::from_segment(key)?;
        let value: &mut dyn Redactable = self.get_mut(&key)?;
        Some(value)
    }

    fn insert_zeroed(&mut self, key: &str) -> bool {
        K::from_segment(key).is_some_and(|key| {
            self.insert(key, V::zeroed());
            true
        })
    }
}

// =============================================================================
// Key conversions
// =============================================================================

impl MapKey for String {
    fn from_segment(segment: &str) -> Option<Self> {
        Some(segment.to_owned())
    }
}

impl MapKey for Box<str> {
    fn from_segment(segment: &str) -> Option<Self> {
        Some(segment.into())
    }
}

impl MapKey for Rc<str> {
    fn from_segment(segment: &str) -> Option<Self> {
        Some(segment.into())
    }
}

impl MapKey for Arc<str> {
    fn from_segment(segment: &str) -> Option<Self> {
        Some(segment.into())
    }
}

impl MapKey for char {
    fn from_segment(segment: &str) -> Option<Self> {
        let mut chars = segment.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

macro_rules! impl_map_key_parse {
    ($($ty:ty),* $(,)?) => {
        $(
            impl MapKey for $ty {
                fn from_segment(segment: &str) -> Option<Self> {
                    segment.parse().ok()
                }
            }
        )*
    };
}

impl_map_key_parse!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

#[cfg(test)]
mod tests {
    use crate::redaction::traits::MapKey;

    #[test]
    fn integer_keys_parse_segments() {
        assert_eq!(u32::from_segment("42"), Some(42));
        assert_eq!(i8::from_segment("-3"), Some(-3));
        assert_eq!(u8::from_segment("300"), None);
        assert_eq!(u64::from_segment("abc"), None);
    }

    #[test]
    fn char_keys_need_exactly_one_char() {
        assert_eq!(char::from_segment("x"), Some('x'));
        assert_eq!(char::from_segment("xy"), None);
        assert_eq!(char::from_segment(""), None);
    }
}
