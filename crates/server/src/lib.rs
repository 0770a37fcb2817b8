pub mod block;
pub mod blocks;
pub mod config;
pub mod level;
pub mod placement;
pub mod player;
