use super::block::BlockState;
use super::position::LocalBlockPos;
use std::collections::HashMap;

/// Number of blocks along each axis of a chunk section.
pub const SECTION_SIZE: usize = 16;
/// Total block count in one section.
const SECTION_VOLUME: usize = SECTION_SIZE * SECTION_SIZE * SECTION_SIZE;

/// A 16x16x16 cube of block states, flat in XZY order.
///
/// A section holding only air is never kept around (see `Chunk`).
#[derive(Clone)]
pub struct ChunkSection {
    states: Box<[BlockState; SECTION_VOLUME]>,
}

impl ChunkSection {
    pub fn new_filled(state: BlockState) -> Self {
        Self {
            states: Box::new([state; SECTION_VOLUME]),
        }
    }

    pub fn new_empty() -> Self {
        Self::new_filled(BlockState::AIR)
    }

    #[inline]
    const fn index(x: u8, y: u8, z: u8) -> usize {
        (y as usize) * SECTION_SIZE * SECTION_SIZE + (z as usize) * SECTION_SIZE + (x as usize)
    }

    #[inline]
    pub fn get(&self, x: u8, y: u8, z: u8) -> BlockState {
        self.states[Self::index(x, y, z)]
    }

    #[inline]
    pub fn set(&mut self, x: u8, y: u8, z: u8, state: BlockState) {
        self.states[Self::index(x, y, z)] = state;
    }

    pub fn is_empty(&self) -> bool {
        self.states.iter().all(BlockState::is_air)
    }
}

/// A column of sections keyed by section index (y >> 4). Sparse.
pub struct Chunk {
    sections: HashMap<i32, ChunkSection>,
}

impl Chunk {
    pub fn new() -> Self {
        Self {
            sections: HashMap::new(),
        }
    }

    pub fn get_block(&self, pos: LocalBlockPos) -> BlockState {
        match self.sections.get(&pos.section_index()) {
            Some(section) => section.get(pos.x, pos.section_local_y(), pos.z),
            None => BlockState::AIR,
        }
    }

    pub fn set_block(&mut self, pos: LocalBlockPos, state: BlockState) {
        let section_idx = pos.section_index();

        if state.is_air() {
            // Metadata on air is meaningless; store the canonical value.
            if let Some(section) = self.sections.get_mut(&section_idx) {
                section.set(pos.x, pos.section_local_y(), pos.z, BlockState::AIR);
                if section.is_empty() {
                    self.sections.remove(&section_idx);
                }
            }
        } else {
            self.sections
                .entry(section_idx)
                .or_insert_with(ChunkSection::new_empty)
                .set(pos.x, pos.section_local_y(), pos.z, state);
        }
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}

impl Default for Chunk {
    fn default() -> Self {
        Self::new()
    }
}
