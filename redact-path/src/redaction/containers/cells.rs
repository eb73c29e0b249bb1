//! `Reference` implementations for cells, locks and shared handles.
//!
//! Owned cells and locks are reached through `get_mut`, which cannot fail
//! except for poisoning. Shared handles (`Rc<RefCell<_>>`, `Arc<Mutex<_>>`,
//! `Arc<RwLock<_>>`) are reached through their interior mutability, so a
//! change is visible through every alias. Their targets are borrowed without
//! blocking; a target already borrowed or locked fails with
//! `RedactError::NotAReference`.
//!
//! Resetting a shared handle replaces it with a fresh handle holding the zero
//! value. Other aliases keep the previous target.

use std::{
    cell::RefCell,
    rc::Rc,
    sync::{Arc, Mutex, RwLock, TryLockError},
};

use crate::redaction::{
    error::RedactError,
    redact::Cursor,
    traits::{Redactable, Reference, Shape},
};

// =============================================================================
// Owned cells and locks
// =============================================================================

impl<T: Redactable> Redactable for RefCell<T> {
    fn reset(&mut self) {
        self.get_mut().reset();
    }

    fn shape(&mut self) -> Shape<'_> {
        Shape::Reference(self)
    }

    fn zeroed() -> Self {
        RefCell::new(T::zeroed())
    }
}

impl<T: Redactable> Redactable for Mutex<T> {
    fn reset(&mut self) {
        *self = Self::zeroed();
    }

    fn shape(&mut self) -> Shape<'_> {
        Shape::Reference(self)
    }

    fn zeroed() -> Self {
        Mutex::new(T::zeroed())
    }
}

impl<T: Redactable> Redactable for RwLock<T> {
    fn reset(&mut self) {
        *self = Self::zeroed();
    }

    fn shape(&mut self) -> Shape<'_> {
        Shape::Reference(self)
    }

    fn zeroed() -> Self {
        RwLock::new(T::zeroed())
    }
}

impl<T: Redactable> Reference for RefCell<T> {
    fn visit_target(&mut self, cursor: Cursor<'_>) -> Result<(), RedactError> {
        cursor.enter(self.get_mut())
    }
}

impl<T: Redactable> Reference for Mutex<T> {
    fn visit_target(&mut self, cursor: Cursor<'_>) -> Result<(), RedactError> {
        match self.get_mut() {
            Ok(target) => cursor.enter(target),
            Err(_) => Err(cursor.not_a_reference("mutex is poisoned")),
        }
    }
}

impl<T: Redactable> Reference for RwLock<T> {
    fn visit_target(&mut self, cursor: Cursor<'_>) -> Result<(), RedactError> {
        match self.get_mut() {
            Ok(target) => cursor.enter(target),
            Err(_) => Err(cursor.not_a_reference("lock is poisoned")),
        }
    }
}

// =============================================================================
// Shared handles
// =============================================================================

impl<T: Redactable> Redactable for Rc<RefCell<T>> {
    fn reset(&mut self) {
        *self = Self::zeroed();
    }

    fn shape(&mut self) -> Shape<'_> {
        Shape::Reference(self)
    }

    fn zeroed() -> Self {
        Rc::new(RefCell::new(T::zeroed()))
    }
}

impl<T: Redactable> Redactable for Arc<Mutex<T>> {
    fn reset(&mut self) {
        *self = Self::zeroed();
    }

    fn shape(&mut self) -> Shape<'_> {
        Shape::Reference(self)
    }

    fn zeroed() -> Self {
        Arc::new(Mutex::new(T::zeroed()))
    }
}

impl<T: Redactable> Redactable for Arc<RwLock<T>> {
    fn reset(&mut self) {
        *self = Self::zeroed();
    }

    fn shape(&mut self) -> Shape<'_> {
        Shape::Reference(self)
    }

    fn zeroed() -> Self {
        Arc::new(RwLock::new(T::zeroed()))
    }
}

impl<T: Redactable> Reference for Rc<RefCell<T>> {
    fn visit_target(&mut self, cursor: Cursor<'_>) -> Result<(), RedactError> {
        match self.try_borrow_mut() {
            Ok(mut target) => cursor.enter(&mut *target),
            Err(_) => Err(cursor.not_a_reference("already borrowed")),
        }
    }
}

impl<T: Redactable> Reference for Arc<Mutex<T>> {
    fn visit_target(&mut self, cursor: Cursor<'_>) -> Result<(), RedactError> {
        match self.try_lock() {
            Ok(mut target) => cursor.enter(&mut *target),
            Err(TryLockError::WouldBlock) => Err(cursor.not_a_reference("mutex is locked")),
            Err(TryLockError::Poisoned(_)) => Err(cursor.not_a_reference("mutex is poisoned")),
        }
    }
}

impl<T: Redactable> Reference for Arc<RwLock<T>> {
    fn visit_target(&mut self, cursor: Cursor<'_>) -> Result<(), RedactError> {
        match self.try_write() {
            Ok(mut target) => cursor.enter(&mut *target),
            Err(TryLockError::WouldBlock) => Err(cursor.not_a_reference("lock is held")),
            Err(TryLockError::Poisoned(_)) => Err(cursor.not_a_reference("lock is poisoned")),
        }
    }
}
