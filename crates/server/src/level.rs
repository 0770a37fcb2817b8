//! The world as seen by block behaviour.
//!
//! Blocks never hold a reference to the world; every operation that needs it
//! receives a [`WorldAccess`] and the position it concerns. [`Level`] is the
//! production implementation: it writes through to the engine [`World`] and
//! records every visible effect so the caller can publish them afterwards.

use serde::Serialize;
use wearblock_engine::world::World;
use wearblock_engine::world::block::BlockState;
use wearblock_engine::world::position::BlockPos;

/// Sounds a block can emit at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sound {
    AnvilBreak,
}

/// Something observers of the world should hear about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LevelEvent {
    BlockSet {
        pos: BlockPos,
        old: BlockState,
        new: BlockState,
    },
    BlockBroken {
        pos: BlockPos,
        old: BlockState,
        particles: bool,
    },
    Sound {
        pos: BlockPos,
        sound: Sound,
    },
}

pub trait WorldAccess {
    fn block_at(&self, pos: BlockPos) -> BlockState;

    fn set_block(&mut self, pos: BlockPos, state: BlockState);

    /// Break whatever is at `pos`, leaving air. Returns `false` if `pos` was
    /// already empty.
    fn use_break_on(&mut self, pos: BlockPos, create_particles: bool) -> bool;

    fn add_sound(&mut self, pos: BlockPos, sound: Sound);
}

pub struct Level<'w> {
    world: &'w World,
    events: Vec<LevelEvent>,
}

impl<'w> Level<'w> {
    pub fn new(world: &'w World) -> Self {
        Self {
            world,
            events: Vec::new(),
        }
    }

    /// Drain the events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<LevelEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }
}

impl WorldAccess for Level<'_> {
    fn block_at(&self, pos: BlockPos) -> BlockState {
        self.world.get_block(pos)
    }

    fn set_block(&mut self, pos: BlockPos, state: BlockState) {
        let old = self.world.get_block(pos);
        if old == state {
            return;
        }
        self.world.set_block(pos, state);
        self.events.push(LevelEvent::BlockSet { pos, old, new: state });
    }

    fn use_break_on(&mut self, pos: BlockPos, create_particles: bool) -> bool {
        let old = self.world.get_block(pos);
        if old.is_air() {
            return false;
        }
        self.world.set_block(pos, BlockState::AIR);
        tracing::debug!("Broke {:?} at ({}, {}, {})", old, pos.x, pos.y, pos.z);
        self.events.push(LevelEvent::BlockBroken {
            pos,
            old,
            particles: create_particles,
        });
        true
    }

    fn add_sound(&mut self, pos: BlockPos, sound: Sound) {
        self.events.push(LevelEvent::Sound { pos, sound });
    }
}
