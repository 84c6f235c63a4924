//! # Entity Identifiers
//!
//! Entities are plain `u32` keys handed out by an allocator that lives
//! outside this crate. The index structures here only consume them.

use std::fmt;

/// Opaque identifier of a live entity.
///
/// Valid identifiers are drawn from `[0, capacity)` of whatever index they
/// are used with. `u32::MAX` is reserved as [`Entity::INVALID`], so no index
/// may have a capacity above `u32::MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Entity(u32);

impl Entity {
    /// Sentinel stored in unused sparse and dense slots.
    pub const INVALID: Self = Self(u32::MAX);

    /// Wraps a raw identifier.
    #[inline]
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[inline]
    #[must_use]
    pub const fn id(self) -> u32 {
        self.0
    }

    /// Returns the identifier as an array index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Checks if this is the reserved sentinel.
    #[inline]
    #[must_use]
    pub const fn is_invalid(self) -> bool {
        self.0 == u32::MAX
    }
}

impl Default for Entity {
    fn default() -> Self {
        Self::INVALID
    }
}

impl From<u32> for Entity {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}
