use serde::{Deserialize, Serialize};

/// Opaque block type identifier. The engine stores these without interpreting
/// them; game layers assign meaning to specific IDs (e.g. 0 = air, 145 = anvil).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BlockId(pub u16);

impl BlockId {
    /// The universal "empty" block.
    pub const AIR: BlockId = BlockId(0);

    pub const fn new(id: u16) -> Self {
        Self(id)
    }
}

/// Width of the per-block metadata nibble carried next to the type id.
pub const META_BITS: u32 = 4;
/// Mask applied to any state word merged into a [`BlockState`].
pub const META_MASK: u8 = (1 << META_BITS) - 1;

/// A block type plus its 4-bit metadata word, as stored in the lattice.
///
/// The only semantic the engine enforces is that a state whose id is
/// `BlockId::AIR` is "empty", whatever its metadata: sections made only of
/// empty states are deallocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BlockState {
    id: BlockId,
    meta: u8,
}

impl BlockState {
    pub const AIR: BlockState = BlockState::new(BlockId::AIR, 0);

    /// Bits of `meta` above the nibble are dropped.
    pub const fn new(id: BlockId, meta: u8) -> Self {
        Self {
            id,
            meta: meta & META_MASK,
        }
    }

    /// Build a state from a wider word, keeping only the bits in `mask`.
    ///
    /// Block types declare the mask of the bits they actually use; anything
    /// outside it (and outside the nibble) never reaches the lattice.
    pub const fn from_word(id: BlockId, word: u32, mask: u32) -> Self {
        Self::new(id, (word & mask) as u8)
    }

    pub const fn id(&self) -> BlockId {
        self.id
    }

    pub const fn meta(&self) -> u8 {
        self.meta
    }

    /// Legacy combined id: `(type << 4) | meta`.
    pub const fn full_id(&self) -> u32 {
        ((self.id.0 as u32) << META_BITS) | self.meta as u32
    }

    pub const fn is_air(&self) -> bool {
        self.id.0 == BlockId::AIR.0
    }
}

impl From<BlockId> for BlockState {
    fn from(id: BlockId) -> Self {
        Self::new(id, 0)
    }
}
