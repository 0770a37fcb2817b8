//! The anvil: a falling block that faces one of four directions and wears
//! out with use.
//!
//! State word layout (4 bits, everything above is reserved and zero):
//!
//! ```text
//!   bit  3 2 1 0
//!        d d f f    ff = legacy horizontal facing, dd = wear level (0..=2)
//! ```
//!
//! An anvil carried as an item keeps only the wear bits.

use serde::Serialize;
use wearblock_engine::geom::{Aabb, Facing, HorizontalFacing};
use wearblock_engine::random::RandomSource;
use wearblock_engine::state::{
    BoundedField, StateError, read_legacy_horizontal_facing, write_legacy_horizontal_facing,
};
use wearblock_engine::world::block::BlockState;
use wearblock_engine::world::position::BlockPos;

use super::{Fallable, SupportType};
use crate::block;
use crate::level::{Sound, WorldAccess};
use crate::placement::BlockTransaction;
use crate::player::{Player, Window};

/// Out of 100. A use damages the anvil when the roll in `0..=100` is at most
/// this, so 13 of the 101 possible rolls hit.
pub const DAMAGE_CHANCE: i32 = 12;

/// Bits of the state word the anvil owns.
pub const STATE_MASK: u32 = 0b1111;

const FACING: BoundedField = BoundedField::new("facing", 0, 2, 0, 3);
const DAMAGE: BoundedField = BoundedField::new("damage", 2, 2, 0, 2);

/// Inset of the collision box on each narrowed side.
const COLLISION_INSET: f64 = 1.0 / 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WearLevel {
    #[default]
    Undamaged = 0,
    SlightlyDamaged = 1,
    VeryDamaged = 2,
}

impl WearLevel {
    pub const ALL: [WearLevel; 3] = [
        WearLevel::Undamaged,
        WearLevel::SlightlyDamaged,
        WearLevel::VeryDamaged,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// One step more worn, or `None` past `VeryDamaged`.
    pub const fn next(self) -> Option<Self> {
        match self {
            WearLevel::Undamaged => Some(WearLevel::SlightlyDamaged),
            WearLevel::SlightlyDamaged => Some(WearLevel::VeryDamaged),
            WearLevel::VeryDamaged => None,
        }
    }

    const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(WearLevel::Undamaged),
            1 => Some(WearLevel::SlightlyDamaged),
            2 => Some(WearLevel::VeryDamaged),
            _ => None,
        }
    }

    /// Wear stored in `word`. A value the field accepts but no level names is
    /// reported like any other out-of-range value.
    fn read(word: u32) -> Result<Self, StateError> {
        let raw = DAMAGE.read(word)?;
        Self::from_raw(raw).ok_or(StateError::OutOfRange {
            field: DAMAGE.name,
            value: raw.into(),
            min: DAMAGE.min.into(),
            max: DAMAGE.max.into(),
        })
    }
}

impl TryFrom<i64> for WearLevel {
    type Error = StateError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let raw = DAMAGE.validate(value)?;
        Self::from_raw(raw).ok_or(StateError::InvalidArgument {
            field: DAMAGE.name,
            value,
            min: DAMAGE.min.into(),
            max: DAMAGE.max.into(),
        })
    }
}

/// Split a state word into facing and wear. Reserved bits are ignored; a wear
/// field of 3 is corrupt and reported, never clamped.
pub fn decode(word: u32) -> Result<(HorizontalFacing, WearLevel), StateError> {
    let word = word & STATE_MASK;
    let facing = read_legacy_horizontal_facing(FACING.read(word)?.into());
    let damage = WearLevel::read(word)?;
    Ok((facing, damage))
}

pub fn encode(facing: HorizontalFacing, damage: WearLevel) -> u32 {
    FACING.write(write_legacy_horizontal_facing(facing) as u8) | DAMAGE.write(damage.value())
}

/// Auxiliary data of an anvil item: wear only.
pub fn item_encode(damage: WearLevel) -> u32 {
    DAMAGE.write(damage.value())
}

/// Anvils are placed side-on to whoever puts them down.
pub const fn from_placer_facing(placer: HorizontalFacing) -> HorizontalFacing {
    placer.rotate_y(true)
}

/// Full cube, narrowed on the axis across the anvil's working face.
pub fn collision_box(facing: HorizontalFacing) -> Aabb {
    Aabb::one().squash(facing.rotate_y(false).axis(), COLLISION_INSET)
}

/// What a single use did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "level", rename_all = "snake_case")]
pub enum DamageOutcome {
    /// The position no longer holds an anvil; nothing happened.
    Stale,
    /// The roll missed.
    Spared,
    Damaged(WearLevel),
    /// Worn past `VeryDamaged`: broken and removed from the world.
    Destroyed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anvil {
    facing: HorizontalFacing,
    damage: WearLevel,
}

impl Anvil {
    pub const fn new(facing: HorizontalFacing, damage: WearLevel) -> Self {
        Self { facing, damage }
    }

    pub fn from_meta(word: u32) -> Result<Self, StateError> {
        let (facing, damage) = decode(word)?;
        Ok(Self { facing, damage })
    }

    /// Load an anvil from a stored state. Any other block is refused.
    pub fn from_state(state: BlockState) -> Result<Self, StateError> {
        if !block::is_same_type(state, block::ANVIL) {
            return Err(StateError::WrongBlock {
                expected: block::ANVIL.0,
                found: state.id().0,
            });
        }
        Self::from_meta(state.meta().into())
    }

    /// An anvil as it comes out of an item stack. Facing is meaningless for an
    /// item and is left at north until placement.
    pub fn from_item_meta(meta: u32) -> Result<Self, StateError> {
        let damage = WearLevel::read(meta & STATE_MASK)?;
        Ok(Self::new(HorizontalFacing::North, damage))
    }

    pub fn meta(&self) -> u32 {
        encode(self.facing, self.damage)
    }

    pub fn item_meta(&self) -> u32 {
        item_encode(self.damage)
    }

    pub fn state(&self) -> BlockState {
        BlockState::from_word(block::ANVIL, self.meta(), STATE_MASK)
    }

    pub fn facing(&self) -> HorizontalFacing {
        self.facing
    }

    pub fn damage(&self) -> WearLevel {
        self.damage
    }

    pub fn set_damage(&mut self, damage: i64) -> Result<&mut Self, StateError> {
        self.damage = WearLevel::try_from(damage)?;
        Ok(self)
    }

    pub fn collision_box(&self) -> Aabb {
        collision_box(self.facing)
    }

    pub fn support_type(&self, _face: Facing) -> SupportType {
        SupportType::None
    }

    /// Opens the anvil screen for `player`. Always handled.
    pub fn on_interact(&self, pos: BlockPos, player: Option<&mut dyn Player>) -> bool {
        if let Some(player) = player {
            player.set_current_window(Window::Anvil { pos });
        }
        true
    }

    /// Turn to face across `player` and queue the block at `pos`. Whether the
    /// position can take it is decided when `tx` is applied.
    pub fn place(
        &mut self,
        tx: &mut BlockTransaction,
        pos: BlockPos,
        player: Option<&dyn Player>,
    ) -> bool {
        if let Some(player) = player {
            self.facing = from_placer_facing(player.horizontal_facing());
        }
        tx.add_block(pos, self.state());
        true
    }

    /// Roll for wear after a use of the anvil at `pos`.
    ///
    /// The world is re-read first: if `pos` has stopped being an anvil in the
    /// meantime the roll is skipped. Breaking removes the block and plays the
    /// break sound together; this value must not be used afterwards.
    pub fn attempt_damage<W, R>(
        &mut self,
        world: &mut W,
        pos: BlockPos,
        rng: &mut R,
    ) -> DamageOutcome
    where
        W: WorldAccess + ?Sized,
        R: RandomSource + ?Sized,
    {
        if !block::is_same_type(world.block_at(pos), block::ANVIL) {
            tracing::debug!(
                "No anvil at ({}, {}, {}) any more, skipping wear",
                pos.x,
                pos.y,
                pos.z
            );
            return DamageOutcome::Stale;
        }
        if rng.next_int(0, 100) > DAMAGE_CHANCE {
            return DamageOutcome::Spared;
        }

        match self.damage.next() {
            Some(next) => {
                self.damage = next;
                tracing::debug!("Anvil at ({}, {}, {}) worn to {:?}", pos.x, pos.y, pos.z, next);
                DamageOutcome::Damaged(next)
            }
            None => {
                world.use_break_on(pos, true);
                world.add_sound(pos, Sound::AnvilBreak);
                tracing::debug!("Anvil at ({}, {}, {}) broke", pos.x, pos.y, pos.z);
                DamageOutcome::Destroyed
            }
        }
    }
}

impl Default for Anvil {
    fn default() -> Self {
        Self::new(HorizontalFacing::North, WearLevel::Undamaged)
    }
}

impl Fallable for Anvil {
    /// Anvils land as themselves.
    fn tick_falling(&self) -> Option<BlockState> {
        None
    }
}

/// Handle one use of whatever anvil stands at `pos`: load it from the stored
/// state word, roll for wear, and write the worn state back.
///
/// A corrupt state word is returned as an error and leaves the world alone.
pub fn use_anvil_at<W, R>(
    world: &mut W,
    pos: BlockPos,
    rng: &mut R,
) -> Result<DamageOutcome, StateError>
where
    W: WorldAccess + ?Sized,
    R: RandomSource + ?Sized,
{
    let state = world.block_at(pos);
    if !block::is_same_type(state, block::ANVIL) {
        return Ok(DamageOutcome::Stale);
    }

    let mut anvil = Anvil::from_state(state).inspect_err(|e| {
        tracing::warn!("Corrupt anvil at ({}, {}, {}): {}", pos.x, pos.y, pos.z, e);
    })?;

    let outcome = anvil.attempt_damage(world, pos, rng);
    if let DamageOutcome::Damaged(_) = outcome {
        world.set_block(pos, anvil.state());
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wear_steps_in_order() {
        assert_eq!(WearLevel::Undamaged.next(), Some(WearLevel::SlightlyDamaged));
        assert_eq!(WearLevel::SlightlyDamaged.next(), Some(WearLevel::VeryDamaged));
        assert_eq!(WearLevel::VeryDamaged.next(), None);
    }

    #[test]
    fn layout_matches_documented_bits() {
        // East = legacy code 3, very damaged = 2 << 2.
        assert_eq!(encode(HorizontalFacing::East, WearLevel::VeryDamaged), 0b1011);
        assert_eq!(encode(HorizontalFacing::South, WearLevel::Undamaged), 0);
        assert_eq!(item_encode(WearLevel::SlightlyDamaged), 0b0100);
    }

    #[test]
    fn raw_wear_maps_to_named_levels_only() {
        for level in WearLevel::ALL {
            assert_eq!(WearLevel::from_raw(level.value()), Some(level));
        }
        assert_eq!(WearLevel::from_raw(3), None);
        assert!(matches!(
            WearLevel::read(0b1100),
            Err(StateError::OutOfRange { value: 3, .. })
        ));
    }

    #[test]
    fn default_anvil_is_pristine() {
        let anvil = Anvil::default();
        assert_eq!(anvil.damage(), WearLevel::Undamaged);
        assert_eq!(anvil.state().id(), block::ANVIL);
    }
}
