//! Orientation and collision geometry shared by every block type.

pub mod aabb;
pub mod facing;

pub use aabb::Aabb;
pub use facing::{Axis, Facing, HorizontalFacing};
