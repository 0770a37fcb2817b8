//! Game-agnostic voxel substrate.
//!
//! The engine knows about positions, packed block states, horizontal geometry
//! and small bounded fields inside state words. It never assigns meaning to a
//! particular block id: that is the game layer's job.

pub mod geom;
pub mod random;
pub mod state;
pub mod world;
