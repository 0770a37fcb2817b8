//! All-or-nothing block placement.
//!
//! A placement may touch more than one position (a block plus whatever it
//! drags along). Blocks queue their writes into a [`BlockTransaction`]; the
//! transaction checks every target before writing any of them.

use wearblock_engine::world::block::BlockState;
use wearblock_engine::world::position::BlockPos;

use crate::block;
use crate::level::WorldAccess;

pub struct BlockTransaction {
    changes: Vec<(BlockPos, BlockState)>,
}

impl BlockTransaction {
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
        }
    }

    /// Queue a write. A later write to the same position replaces the earlier.
    pub fn add_block(&mut self, pos: BlockPos, state: BlockState) -> &mut Self {
        match self.changes.iter_mut().find(|(p, _)| *p == pos) {
            Some(entry) => entry.1 = state,
            None => self.changes.push((pos, state)),
        }
        self
    }

    pub fn changes(&self) -> &[(BlockPos, BlockState)] {
        &self.changes
    }

    /// Every queued position must currently hold a replaceable block.
    pub fn validate<W: WorldAccess + ?Sized>(&self, world: &W) -> bool {
        self.changes.iter().all(|(pos, _)| {
            let existing = world.block_at(*pos);
            let ok = block::is_replaceable(existing.id());
            if !ok {
                tracing::warn!(
                    "Placement blocked at ({}, {}, {}) by {}",
                    pos.x,
                    pos.y,
                    pos.z,
                    block::name(existing.id())
                );
            }
            ok
        })
    }

    /// Write every queued change, or none. Returns whether anything was
    /// applied.
    pub fn apply<W: WorldAccess + ?Sized>(self, world: &mut W) -> bool {
        if self.changes.is_empty() || !self.validate(&*world) {
            return false;
        }
        for (pos, state) in self.changes {
            world.set_block(pos, state);
        }
        true
    }
}

impl Default for BlockTransaction {
    fn default() -> Self {
        Self::new()
    }
}
