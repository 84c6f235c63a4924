//! # Ember Core
//!
//! Entity indexing for the Ember voxel renderer.
//!
//! The centerpiece is [`SparseSet`], a fixed-capacity dense/sparse index
//! giving O(1) membership, insertion, swap-and-pop removal and contiguous
//! iteration. Component payloads live in [`DenseColumn`]s that follow the
//! slots the index hands out.
//!
//! ## Architecture Rules
//!
//! 1. **Sized once** - capacity is fixed at creation, no allocation afterwards
//! 2. **Index is not storage** - the set returns slots, callers own payloads
//! 3. **Misuse is an error, never corruption** - failed calls change nothing
//!
//! ## Example
//!
//! ```rust
//! use ember_core::{ComponentStorage, Entity, Position, Velocity};
//!
//! let mut positions: ComponentStorage<Position> = ComponentStorage::new(1024);
//! let mut velocities: ComponentStorage<Velocity> = ComponentStorage::new(1024);
//!
//! let e = Entity::new(42);
//! positions.insert(e, Position::new(0.0, 0.0, 0.0)).unwrap();
//! velocities.insert(e, Velocity::new(1.0, 0.0, 0.0)).unwrap();
//!
//! for (entity, pos) in positions.iter_mut() {
//!     if let Some(vel) = velocities.get(entity) {
//!         pos.integrate(*vel, 0.5);
//!     }
//! }
//! assert_eq!(positions.get(e).unwrap().x, 0.5);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod ecs;
pub mod error;
pub mod sync;

pub use config::StorageConfig;
pub use ecs::{
    Component, ComponentStorage, DenseColumn, Entity, Position, Removal, SparseSet, Velocity,
    Voxel,
};
pub use error::{
    ConfigError, ConfigResult, InvariantViolation, SparseSetError, SparseSetResult,
};
pub use sync::SharedStorage;
