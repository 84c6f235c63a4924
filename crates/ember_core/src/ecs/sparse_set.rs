//! # Sparse Set Index
//!
//! Maps entity identifiers from a bounded universe to compact slots.
//!
//! Two arrays of length `capacity` are allocated once at creation:
//! - `sparse[entity]` holds the slot the entity occupies (possibly stale)
//! - `dense[slot]` holds the entity occupying that slot
//!
//! Only `dense[..len]` is live. Membership is decided by checking that the
//! sparse entry points inside the live region AND that the dense entry points
//! back at the entity. Removal swaps the tail into the freed slot so the live
//! region stays contiguous. The removed entity's sparse entry is left as-is.
//!
//! The set stores no payloads. Callers keep their component arrays parallel
//! to the dense region using the slot returned by [`SparseSet::insert`] and
//! the [`Removal`] returned by [`SparseSet::remove`].

use tracing::{debug, trace};

use super::entity::Entity;
use crate::error::{InvariantViolation, SparseSetError, SparseSetResult};

/// Outcome of a swap-and-pop removal.
///
/// The caller's parallel arrays must move their tail payload into
/// `freed_slot` and shrink by one. When [`Removal::is_tail`] holds, the
/// removed entity was the tail and the move is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Removal {
    /// The entity that was removed.
    pub removed: Entity,
    /// The entity that now occupies `freed_slot`.
    pub moved: Entity,
    /// The slot the removed entity occupied.
    pub freed_slot: usize,
    /// The former tail slot, now outside the live region.
    pub tail_slot: usize,
}

impl Removal {
    /// Returns true if the removed entity was the last live one.
    #[inline]
    #[must_use]
    pub fn is_tail(&self) -> bool {
        self.moved == self.removed
    }
}

/// Fixed-capacity sparse set over entity identifiers.
///
/// All operations are O(1) and none allocate after [`SparseSet::new`].
/// Failed operations leave the set untouched.
///
/// # Example
///
/// ```rust
/// use ember_core::{Entity, SparseSet};
///
/// let mut set = SparseSet::new(16);
/// let slot = set.insert(Entity::new(7)).unwrap();
/// assert_eq!(slot, 0);
/// assert!(set.contains(Entity::new(7)));
///
/// let removal = set.remove(Entity::new(7)).unwrap();
/// assert!(removal.is_tail());
/// assert!(set.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct SparseSet {
    /// Entity -> slot. Entries of non-members may be stale.
    sparse: Box<[Entity]>,
    /// Slot -> entity. Compact across `[0, len)`.
    dense: Box<[Entity]>,
    /// Number of live entities.
    len: usize,
}

impl SparseSet {
    /// Creates an empty set able to index identifiers in `[0, capacity)`.
    ///
    /// Both arrays are filled with [`Entity::INVALID`].
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds `u32::MAX`, since larger identifiers
    /// cannot be represented.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(
            capacity <= u32::MAX as usize,
            "Capacity cannot exceed u32::MAX"
        );

        debug!(capacity, "allocating sparse set");

        Self {
            sparse: vec![Entity::INVALID; capacity].into_boxed_slice(),
            dense: vec![Entity::INVALID; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Returns the fixed capacity.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.dense.len()
    }

    /// Returns the number of live entities.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no entity is live.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if every slot is occupied.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Returns the number of free slots.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity() - self.len
    }

    /// Checks membership.
    ///
    /// Identifiers outside `[0, capacity)` are never members.
    #[inline]
    #[must_use]
    pub fn contains(&self, entity: Entity) -> bool {
        match self.sparse.get(entity.index()) {
            Some(slot) => {
                let slot = slot.index();
                slot < self.len && self.dense[slot] == entity
            }
            None => false,
        }
    }

    /// Adds `entity` and returns the slot it was placed at.
    ///
    /// The slot is where the caller must write the entity's payload in any
    /// parallel array.
    ///
    /// # Errors
    ///
    /// - [`SparseSetError::DuplicateMember`] if `entity` is already present
    /// - [`SparseSetError::CapacityExceeded`] if the set is full
    /// - [`SparseSetError::OutOfRange`] if `entity >= capacity`
    ///
    /// A full set reports `CapacityExceeded` even for identifiers past the
    /// end, since every in-range identifier is then already a member.
    pub fn insert(&mut self, entity: Entity) -> SparseSetResult<usize> {
        if self.contains(entity) {
            return Err(SparseSetError::DuplicateMember(entity));
        }
        if self.is_full() {
            return Err(SparseSetError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        self.check_range(entity)?;

        let slot = self.len;
        self.dense[slot] = entity;
        self.sparse[entity.index()] = slot_entry(slot);
        self.len += 1;

        trace!(%entity, slot, "inserted");
        Ok(slot)
    }

    /// Returns the slot currently occupied by `entity`.
    ///
    /// # Errors
    ///
    /// - [`SparseSetError::OutOfRange`] if `entity >= capacity`
    /// - [`SparseSetError::NotAMember`] if `entity` is absent
    pub fn slot_of(&self, entity: Entity) -> SparseSetResult<usize> {
        self.check_range(entity)?;
        if !self.contains(entity) {
            return Err(SparseSetError::NotAMember(entity));
        }
        Ok(self.sparse[entity.index()].index())
    }

    /// Removes `entity` by moving the tail entity into its slot.
    ///
    /// # Errors
    ///
    /// - [`SparseSetError::OutOfRange`] if `entity >= capacity`
    /// - [`SparseSetError::Underflow`] if the set is empty
    /// - [`SparseSetError::NotAMember`] if `entity` is absent
    pub fn remove(&mut self, entity: Entity) -> SparseSetResult<Removal> {
        self.check_range(entity)?;
        if self.is_empty() {
            return Err(SparseSetError::Underflow);
        }
        if !self.contains(entity) {
            return Err(SparseSetError::NotAMember(entity));
        }

        self.len -= 1;
        let tail_slot = self.len;
        let freed_slot = self.sparse[entity.index()].index();
        let moved = self.dense[tail_slot];

        self.dense[freed_slot] = moved;
        self.sparse[moved.index()] = slot_entry(freed_slot);

        trace!(%entity, %moved, freed_slot, "removed");
        Ok(Removal {
            removed: entity,
            moved,
            freed_slot,
            tail_slot,
        })
    }

    /// Forgets every member in O(1).
    ///
    /// Array contents are left in place; `len` alone gates validity.
    #[inline]
    pub fn clear(&mut self) {
        debug!(dropped = self.len, "clearing sparse set");
        self.len = 0;
    }

    /// Returns the live dense region in slot order.
    #[inline]
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.dense[..self.len]
    }

    /// Iterates over `(slot, entity)` pairs of live members.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (usize, Entity)> + '_ {
        self.entities().iter().copied().enumerate()
    }

    /// Verifies the structural invariants, returning the first violation
    /// found.
    ///
    /// O(capacity). Intended for tests and debug assertions.
    ///
    /// # Errors
    ///
    /// Returns the [`InvariantViolation`] describing the broken invariant.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if self.len > self.capacity() {
            return Err(InvariantViolation::LenExceedsCapacity {
                len: self.len,
                capacity: self.capacity(),
            });
        }

        let mut seen = vec![false; self.capacity()];
        for (slot, entity) in self.iter() {
            if entity.index() >= self.capacity() {
                return Err(InvariantViolation::DenseOutOfRange { slot, entity });
            }
            if std::mem::replace(&mut seen[entity.index()], true) {
                return Err(InvariantViolation::DuplicateSlot(entity));
            }
            let back = self.sparse[entity.index()].index();
            if back != slot {
                return Err(InvariantViolation::SparseMismatch {
                    entity,
                    sparse: back,
                    slot,
                });
            }
        }
        Ok(())
    }

    #[inline]
    fn check_range(&self, entity: Entity) -> SparseSetResult<()> {
        if entity.index() < self.capacity() {
            Ok(())
        } else {
            Err(SparseSetError::OutOfRange {
                entity,
                capacity: self.capacity(),
            })
        }
    }
}

/// Slots are bounded by capacity, which is bounded by `u32::MAX`.
#[inline]
#[allow(clippy::cast_possible_truncation)]
const fn slot_entry(slot: usize) -> Entity {
    Entity::new(slot as u32)
}
