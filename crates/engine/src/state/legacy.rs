//! The legacy 2-bit horizontal facing code shared by every block that stores
//! a compass direction in its metadata.

use crate::geom::HorizontalFacing;

/// Indexed by the 2-bit code.
const LEGACY_HORIZONTAL: [HorizontalFacing; 4] = [
    HorizontalFacing::South,
    HorizontalFacing::West,
    HorizontalFacing::North,
    HorizontalFacing::East,
];

/// Only the low two bits of `bits` are looked at; every code is valid.
pub const fn read_legacy_horizontal_facing(bits: u32) -> HorizontalFacing {
    LEGACY_HORIZONTAL[(bits & 0x3) as usize]
}

pub const fn write_legacy_horizontal_facing(facing: HorizontalFacing) -> u32 {
    match facing {
        HorizontalFacing::South => 0,
        HorizontalFacing::West => 1,
        HorizontalFacing::North => 2,
        HorizontalFacing::East => 3,
    }
}
