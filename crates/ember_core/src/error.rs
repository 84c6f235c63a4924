//! # Core Error Types
//!
//! Every precondition violation in the index and storage layers surfaces as
//! one of these values. Nothing is mutated before the check that produces them.

use thiserror::Error;

use crate::ecs::Entity;

/// Errors returned by [`SparseSet`](crate::SparseSet) and the storages built on it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparseSetError {
    /// The entity is already a member of the set.
    #[error("{0} is already a member of the set")]
    DuplicateMember(Entity),

    /// The entity is not a member of the set.
    #[error("{0} is not a member of the set")]
    NotAMember(Entity),

    /// Removal was requested from an empty set.
    #[error("cannot remove from an empty set")]
    Underflow,

    /// The set already holds `capacity` entities.
    #[error("set is full: capacity {capacity}")]
    CapacityExceeded {
        /// Fixed capacity of the set.
        capacity: usize,
    },

    /// The entity lies outside `[0, capacity)`.
    #[error("{entity} is out of range for capacity {capacity}")]
    OutOfRange {
        /// The offending entity.
        entity: Entity,
        /// Fixed capacity of the set.
        capacity: usize,
    },
}

/// Result type for sparse set and storage operations.
pub type SparseSetResult<T> = Result<T, SparseSetError>;

/// A broken structural invariant, as reported by
/// [`SparseSet::check_invariants`](crate::SparseSet::check_invariants).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// More live entities than slots.
    #[error("len {len} exceeds capacity {capacity}")]
    LenExceedsCapacity {
        /// Live count.
        len: usize,
        /// Fixed capacity.
        capacity: usize,
    },

    /// A live slot holds an identifier outside the universe.
    #[error("slot {slot} holds out-of-range {entity}")]
    DenseOutOfRange {
        /// The offending slot.
        slot: usize,
        /// The identifier stored there.
        entity: Entity,
    },

    /// The same identifier is live in two slots.
    #[error("{0} occupies more than one slot")]
    DuplicateSlot(Entity),

    /// The sparse entry does not point back at the entity's slot.
    #[error("sparse[{entity}] = {sparse}, but {entity} lives in slot {slot}")]
    SparseMismatch {
        /// The entity whose entries disagree.
        entity: Entity,
        /// What the sparse array says.
        sparse: usize,
        /// Where the dense array has it.
        slot: usize,
    },
}

/// Errors that can occur while loading a [`StorageConfig`](crate::StorageConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Entity identifiers are `u32`, with `u32::MAX` reserved.
    #[error("capacity {0} exceeds the identifier range (max {max})", max = u32::MAX)]
    CapacityTooLarge(usize),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
