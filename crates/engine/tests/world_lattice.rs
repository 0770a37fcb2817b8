//! World lattice tests: packed states in and out of chunks, sparse sections,
//! positions across chunk borders. Block ids here are opaque numbers.

use wearblock_engine::geom::{Facing, HorizontalFacing};
use wearblock_engine::world::World;
use wearblock_engine::world::block::{BlockId, BlockState};
use wearblock_engine::world::chunk::{Chunk, SECTION_SIZE};
use wearblock_engine::world::position::{BlockPos, ChunkPos, LocalBlockPos};

const SOLID: BlockId = BlockId(1);
const ORIENTED: BlockId = BlockId(145);

// ---------------------------------------------------------------------------
// Chunk storage
// ---------------------------------------------------------------------------

#[test]
fn unloaded_chunks_read_as_air() {
    let world = World::new();
    assert_eq!(world.get_block(BlockPos::new(100, 64, -100)), BlockState::AIR);
    assert_eq!(world.chunk_count(), 0);
}

#[test]
fn metadata_survives_storage() {
    let world = World::new();
    let pos = BlockPos::new(-3, 70, 17);
    let state = BlockState::new(ORIENTED, 0b1011);

    world.set_block(pos, state);
    assert_eq!(world.get_block(pos), state);
    assert_eq!(world.get_block(pos).meta(), 0b1011);
    assert!(world.has_chunk(ChunkPos::new(-1, 1)));
}

#[test]
fn clearing_last_block_frees_the_section() {
    let mut chunk = Chunk::new();
    let local = LocalBlockPos { x: 2, y: 33, z: 9 };

    chunk.set_block(local, BlockState::new(ORIENTED, 3));
    assert_eq!(chunk.section_count(), 1);

    // Air with stray metadata still counts as empty.
    chunk.set_block(local, BlockState::new(BlockId::AIR, 5));
    assert_eq!(chunk.section_count(), 0);
    assert_eq!(chunk.get_block(local), BlockState::AIR);
}

#[test]
fn writing_air_into_missing_section_allocates_nothing() {
    let mut chunk = Chunk::new();
    chunk.set_block(LocalBlockPos { x: 0, y: 0, z: 0 }, BlockState::AIR);
    assert_eq!(chunk.section_count(), 0);
}

#[test]
fn inserted_chunk_is_visible_through_world() {
    let world = World::new();
    let mut chunk = Chunk::new();
    for x in 0..SECTION_SIZE as u8 {
        for z in 0..SECTION_SIZE as u8 {
            chunk.set_block(LocalBlockPos { x, y: 0, z }, BlockState::from(SOLID));
        }
    }
    world.insert_chunk(ChunkPos::new(2, -1), chunk);

    let origin = ChunkPos::new(2, -1).block_origin(0);
    assert_eq!(origin, BlockPos::new(32, 0, -16));
    assert_eq!(world.get_block(origin).id(), SOLID);
    assert_eq!(world.get_block(BlockPos::new(47, 0, -1)).id(), SOLID);
    assert!(world.get_block(BlockPos::new(48, 0, -1)).is_air());
}

// ---------------------------------------------------------------------------
// Positions
// ---------------------------------------------------------------------------

#[test]
fn negative_coordinates_map_into_chunk() {
    let pos = BlockPos::new(-1, -1, -17);
    assert_eq!(pos.chunk(), ChunkPos::new(-1, -2));
    let local = pos.local();
    assert_eq!((local.x, local.z), (15, 15));
    assert_eq!(local.section_index(), -1);
    assert_eq!(local.section_local_y(), 15);
}

#[test]
fn sides_step_one_block() {
    let pos = BlockPos::new(0, 10, 0);
    assert_eq!(pos.side(Facing::Up), BlockPos::new(0, 11, 0));
    assert_eq!(pos.side(Facing::Down), BlockPos::new(0, 9, 0));
    assert_eq!(pos.horizontal_side(HorizontalFacing::North), BlockPos::new(0, 10, -1));
    assert_eq!(pos.horizontal_side(HorizontalFacing::East), BlockPos::new(1, 10, 0));
    for facing in HorizontalFacing::ALL {
        assert_eq!(pos.horizontal_side(facing).horizontal_side(facing.opposite()), pos);
    }
}
