//! Set containers are leaves: they can only be reset as a whole.

use std::{
    collections::{BTreeSet, HashSet},
    hash::{BuildHasher, Hash},
};

use crate::redaction::traits::{Redactable, Shape};

impl<T, S> Redactable for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    fn reset(&mut self) {
        self.clear();
    }

    fn shape(&mut self) -> Shape<'_> {
        Shape::Leaf
    }

    fn zeroed() -> Self {
        HashSet::default()
    }
}

impl<T> Redactable for BTreeSet<T>
where
    T: Ord,
{
    fn reset(&mut self) {
        self.clear();
    }

    fn shape(&mut self) -> Shape<'_> {
        Shape::Leaf
    }

    fn zeroed() -> Self {
        BTreeSet::new()
    }
}
