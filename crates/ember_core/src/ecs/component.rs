//! # Components
//!
//! Components are plain data. They are stored in pre-allocated columns kept
//! parallel to a [`SparseSet`](super::SparseSet), so they must be cheap to copy
//! and have a default value to fill unused slots with.

use bytemuck::{Pod, Zeroable};

/// Marker trait for ECS components.
///
/// Components must be:
/// - `Copy`: moved around by swap-and-pop without drop glue
/// - `Pod` + `Zeroable`: safe to upload as raw bytes
/// - `Default`: fills slots outside the live region
///
/// # Example
///
/// ```rust
/// use bytemuck::{Pod, Zeroable};
/// use ember_core::Component;
///
/// #[derive(Clone, Copy, Default, Pod, Zeroable)]
/// #[repr(C)]
/// struct Health {
///     current: u32,
///     max: u32,
/// }
///
/// impl Component for Health {
///     const NAME: &'static str = "health";
/// }
/// ```
pub trait Component: Copy + Pod + Zeroable + Default + Send + Sync + 'static {
    /// Short name used in log output.
    const NAME: &'static str;
}

/// World-space position of an entity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Position {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
    /// Z coordinate.
    pub z: f32,
    /// Pads to 16 bytes for SIMD loads.
    pub _padding: f32,
}

impl Component for Position {
    const NAME: &'static str = "position";
}

impl Position {
    /// Creates a new position.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            x,
            y,
            z,
            _padding: 0.0,
        }
    }

    /// Advances the position by `velocity * dt`.
    #[inline]
    pub fn integrate(&mut self, velocity: Velocity, dt: f32) {
        self.x += velocity.x * dt;
        self.y += velocity.y * dt;
        self.z += velocity.z * dt;
    }
}

/// Movement in world units per second.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Velocity {
    /// X velocity.
    pub x: f32,
    /// Y velocity.
    pub y: f32,
    /// Z velocity.
    pub z: f32,
    /// Padding.
    pub _padding: f32,
}

impl Component for Velocity {
    const NAME: &'static str = "velocity";
}

impl Velocity {
    /// Creates a new velocity.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            x,
            y,
            z,
            _padding: 0.0,
        }
    }
}

/// Block data attached to voxel entities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct Voxel {
    /// Material/block type.
    pub material_id: u16,
    /// Solid, transparent, etc.
    pub flags: u8,
    /// Light level (0-15).
    pub light_level: u8,
}

impl Component for Voxel {
    const NAME: &'static str = "voxel";
}
