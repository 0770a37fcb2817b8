//! Block type ids and property lookups for the game layer.
//!
//! Ids follow the legacy numeric table, so a placed block is fully described
//! by `(id << 4) | meta` with the metadata nibble owned by each block type.

use wearblock_engine::geom::Facing;
use wearblock_engine::world::block::{BlockId, BlockState};

use crate::blocks::{Anvil, SupportType};

pub const AIR: BlockId = BlockId(0);
pub const STONE: BlockId = BlockId(1);
pub const GRASS: BlockId = BlockId(2);
pub const DIRT: BlockId = BlockId(3);
pub const BEDROCK: BlockId = BlockId(7);
pub const FLOWING_WATER: BlockId = BlockId(8);
pub const WATER: BlockId = BlockId(9);
pub const SAND: BlockId = BlockId(12);
pub const ANVIL: BlockId = BlockId(145);

/// Can another block be placed in this space?
pub fn is_replaceable(id: BlockId) -> bool {
    id == AIR || id == WATER || id == FLOWING_WATER
}

/// Same block type, whatever the metadata.
pub fn is_same_type(a: BlockState, b: BlockId) -> bool {
    a.id() == b
}

/// What `face` of the block in `state` offers to a neighbour placed against it.
/// Plain solid blocks hold up anything; air and water hold up nothing.
pub fn support_type(state: BlockState, face: Facing) -> SupportType {
    match state.id() {
        ANVIL => Anvil::from_state(state).map_or(SupportType::None, |a| a.support_type(face)),
        id if is_replaceable(id) => SupportType::None,
        _ => SupportType::Full,
    }
}

/// Human-readable name, for logs.
pub fn name(id: BlockId) -> &'static str {
    match id {
        AIR => "air",
        STONE => "stone",
        GRASS => "grass",
        DIRT => "dirt",
        BEDROCK => "bedrock",
        FLOWING_WATER => "flowing_water",
        WATER => "water",
        SAND => "sand",
        ANVIL => "anvil",
        _ => "unknown",
    }
}
