//! # Shared Component Storage
//!
//! The index and storage types take `&mut self` for every mutation and carry
//! no locks. Systems that touch a storage from several threads share it
//! through this wrapper instead.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::ecs::{Component, ComponentStorage};

/// A [`ComponentStorage`] behind a reader-writer lock.
///
/// Cloning is cheap and yields another handle to the same storage.
///
/// ```text
///   render thread ── read() ──┐
///   audio thread  ── read() ──┼──► RwLock<ComponentStorage<C>>
///   logic thread  ── write() ─┘
/// ```
pub struct SharedStorage<C: Component> {
    inner: Arc<RwLock<ComponentStorage<C>>>,
}

impl<C: Component> SharedStorage<C> {
    /// Creates shared storage for identifiers in `[0, capacity)`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::from_storage(ComponentStorage::new(capacity))
    }

    /// Wraps an existing storage.
    #[must_use]
    pub fn from_storage(storage: ComponentStorage<C>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(storage)),
        }
    }

    /// Acquires shared read access. Blocks while a writer holds the lock.
    #[inline]
    pub fn read(&self) -> RwLockReadGuard<'_, ComponentStorage<C>> {
        self.inner.read()
    }

    /// Acquires exclusive write access.
    #[inline]
    pub fn write(&self) -> RwLockWriteGuard<'_, ComponentStorage<C>> {
        self.inner.write()
    }

    /// Runs `f` with exclusive access and releases the lock afterwards.
    pub fn with_write<R>(&self, f: impl FnOnce(&mut ComponentStorage<C>) -> R) -> R {
        f(&mut *self.inner.write())
    }

    /// Returns the number of handles sharing this storage.
    #[inline]
    #[must_use]
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl<C: Component> Clone for SharedStorage<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
