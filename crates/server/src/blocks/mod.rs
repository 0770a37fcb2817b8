//! Block types with behaviour beyond "occupies a cell".

pub mod anvil;

pub use anvil::{Anvil, DamageOutcome, WearLevel};

use wearblock_engine::world::block::BlockState;

/// How a block face can hold up whatever is placed against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportType {
    Full,
    None,
}

/// Blocks that drop when nothing is under them. The fall itself is simulated
/// elsewhere; the block only decides what it turns into.
pub trait Fallable {
    /// The state to leave behind on this fall step, or `None` to keep falling
    /// as itself.
    fn tick_falling(&self) -> Option<BlockState>;
}
