//! # Component Storage
//!
//! Dense component payloads kept parallel to a [`SparseSet`].
//!
//! The sparse set decides which slot an entity's data lives in; the
//! storage only follows along:
//! - on insert, the payload is written at the slot the set returned
//! - on remove, the payload is swapped-and-popped using the set's [`Removal`]
//!
//! Any number of [`DenseColumn`]s can follow one index. [`ComponentStorage`]
//! bundles the common case of one index with one column.
//!
//! Payloads outside the live prefix `[0, len)` are stale: neither removal nor
//! clear scrubs them, mirroring the index's own stale sparse entries. Only the
//! live prefix is ever exposed, and a slot is always written before it
//! becomes live again.

use tracing::trace;

use super::component::Component;
use super::entity::Entity;
use super::sparse_set::{Removal, SparseSet};
use crate::config::StorageConfig;
use crate::error::SparseSetResult;

/// Pre-allocated payload array indexed by dense slot.
///
/// A column knows nothing about membership. Callers keep it in step with a
/// [`SparseSet`] by writing at inserted slots and replaying every removal
/// through [`DenseColumn::apply_removal`].
pub struct DenseColumn<C: Component> {
    data: Box<[C]>,
}

impl<C: Component> DenseColumn<C> {
    /// Creates a column of `capacity` default-filled slots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![C::default(); capacity].into_boxed_slice(),
        }
    }

    /// Returns the number of slots.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Writes the payload for `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= capacity`. Slots from a set of the same capacity
    /// are always in range.
    #[inline]
    pub fn write(&mut self, slot: usize, value: C) {
        self.data[slot] = value;
    }

    /// Reads the payload at `slot`.
    #[inline]
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&C> {
        self.data.get(slot)
    }

    /// Mutably reads the payload at `slot`.
    #[inline]
    pub fn get_mut(&mut self, slot: usize) -> Option<&mut C> {
        self.data.get_mut(slot)
    }

    /// Mirrors a swap-and-pop performed by the index.
    ///
    /// Returns the removed entity's payload. The tail payload is moved into
    /// the freed slot; the vacated tail slot keeps its stale copy.
    pub fn apply_removal(&mut self, removal: Removal) -> C {
        let removed = self.data[removal.freed_slot];
        if !removal.is_tail() {
            self.data[removal.freed_slot] = self.data[removal.tail_slot];
        }
        removed
    }

    /// Returns the first `len` payloads.
    #[inline]
    #[must_use]
    pub fn as_slice(&self, len: usize) -> &[C] {
        &self.data[..len]
    }

    /// Returns the first `len` payloads mutably.
    #[inline]
    pub fn as_mut_slice(&mut self, len: usize) -> &mut [C] {
        &mut self.data[..len]
    }
}

/// A sparse set index paired with one column of payloads.
///
/// # Example
///
/// ```rust
/// use ember_core::{ComponentStorage, Entity, Position};
///
/// let mut positions: ComponentStorage<Position> = ComponentStorage::new(1024);
/// positions.insert(Entity::new(3), Position::new(1.0, 2.0, 3.0)).unwrap();
/// assert_eq!(positions.get(Entity::new(3)).unwrap().y, 2.0);
/// ```
pub struct ComponentStorage<C: Component> {
    index: SparseSet,
    column: DenseColumn<C>,
}

impl<C: Component> ComponentStorage<C> {
    /// Creates storage for identifiers in `[0, capacity)`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds `u32::MAX`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            index: SparseSet::new(capacity),
            column: DenseColumn::new(capacity),
        }
    }

    /// Creates storage sized by a validated config.
    #[must_use]
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.capacity)
    }

    /// Returns the fixed capacity.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.index.capacity()
    }

    /// Returns the number of stored components.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if nothing is stored.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns the underlying index.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> &SparseSet {
        &self.index
    }

    /// Checks whether `entity` has this component.
    #[inline]
    #[must_use]
    pub fn contains(&self, entity: Entity) -> bool {
        self.index.contains(entity)
    }

    /// Attaches a component to `entity` and returns its slot.
    ///
    /// # Errors
    ///
    /// Fails with the index's error if the entity is already present, the
    /// storage is full, or the entity is out of range.
    pub fn insert(&mut self, entity: Entity, value: C) -> SparseSetResult<usize> {
        let slot = self.index.insert(entity)?;
        self.column.write(slot, value);
        Ok(slot)
    }

    /// Detaches and returns `entity`'s component.
    ///
    /// # Errors
    ///
    /// Fails with the index's error if the entity is absent or out of range.
    pub fn remove(&mut self, entity: Entity) -> SparseSetResult<C> {
        let removal = self.index.remove(entity)?;
        trace!(component = C::NAME, %entity, "component removed");
        Ok(self.column.apply_removal(removal))
    }

    /// Returns `entity`'s component.
    #[inline]
    #[must_use]
    pub fn get(&self, entity: Entity) -> Option<&C> {
        let slot = self.index.slot_of(entity).ok()?;
        self.column.get(slot)
    }

    /// Returns `entity`'s component mutably.
    #[inline]
    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut C> {
        let slot = self.index.slot_of(entity).ok()?;
        self.column.get_mut(slot)
    }

    /// Returns the live payloads in slot order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[C] {
        self.column.as_slice(self.index.len())
    }

    /// Returns the live payloads mutably, for batch updates.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [C] {
        self.column.as_mut_slice(self.index.len())
    }

    /// Iterates over `(entity, component)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &C)> {
        self.index.entities().iter().copied().zip(self.as_slice())
    }

    /// Iterates mutably over `(entity, component)` pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Entity, &mut C)> {
        let len = self.index.len();
        self.index
            .entities()
            .iter()
            .copied()
            .zip(self.column.as_mut_slice(len))
    }

    /// Removes every component.
    ///
    /// O(1): payloads become stale and stay in place until overwritten.
    #[inline]
    pub fn clear(&mut self) {
        self.index.clear();
    }
}
