pub mod block;
pub mod chunk;
pub mod position;

use block::BlockState;
use chunk::Chunk;
use dashmap::DashMap;
use position::{BlockPos, ChunkPos};

/// The entire block lattice. Thread-safe, lock-sharded by chunk.
///
/// Only the *where* and *what* of blocks live here. Rules about what a block
/// does belong to the game layer.
pub struct World {
    chunks: DashMap<ChunkPos, Chunk>,
}

impl World {
    pub fn new() -> Self {
        Self {
            chunks: DashMap::new(),
        }
    }

    /// Read the state at an absolute position. Returns AIR for unloaded chunks.
    pub fn get_block(&self, pos: BlockPos) -> BlockState {
        match self.chunks.get(&pos.chunk()) {
            Some(chunk) => chunk.get_block(pos.local()),
            None => BlockState::AIR,
        }
    }

    /// Write a state at an absolute position. Creates the chunk if needed.
    ///
    /// Takes `&self` because `DashMap` gives interior mutability per shard.
    pub fn set_block(&self, pos: BlockPos, state: BlockState) {
        self.chunks
            .entry(pos.chunk())
            .or_default()
            .set_block(pos.local(), state);
    }

    pub fn has_chunk(&self, pos: ChunkPos) -> bool {
        self.chunks.contains_key(&pos)
    }

    /// Insert a fully built chunk (generation/loading).
    pub fn insert_chunk(&self, pos: ChunkPos, chunk: Chunk) {
        if self.chunks.insert(pos, chunk).is_some() {
            tracing::debug!("Replaced loaded chunk ({}, {})", pos.x, pos.z);
        }
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
