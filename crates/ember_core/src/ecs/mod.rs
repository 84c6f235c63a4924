//! # Entity Component System
//!
//! Indexing and storage primitives for entity components.
//!
//! ## Design Philosophy
//!
//! - Every structure is sized once at creation; nothing allocates afterwards
//! - A [`SparseSet`] only maps entities to dense slots
//! - Payloads live in columns that follow the index slot for slot

mod component;
mod entity;
mod sparse_set;
mod storage;

pub use component::{Component, Position, Velocity, Voxel};
pub use entity::Entity;
pub use sparse_set::{Removal, SparseSet};
pub use storage::{ComponentStorage, DenseColumn};
