//! The slice of a player that block behaviour is allowed to touch.

use wearblock_engine::geom::HorizontalFacing;
use wearblock_engine::world::position::BlockPos;

/// A block-backed interface a player can have open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// Repair/rename screen bound to the anvil at `pos`.
    Anvil { pos: BlockPos },
}

pub trait Player {
    fn name(&self) -> &str;

    fn horizontal_facing(&self) -> HorizontalFacing;

    /// Replace the open window. Returns `false` if the player refused it.
    fn set_current_window(&mut self, window: Window) -> bool;
}

/// Player state owned by a connection.
#[derive(Clone, Debug)]
pub struct PlayerSession {
    pub name: String,
    /// Yaw in degrees.
    pub y_rot: f32,
    current_window: Option<Window>,
}

impl PlayerSession {
    pub fn new(name: impl Into<String>, y_rot: f32) -> Self {
        Self {
            name: name.into(),
            y_rot,
            current_window: None,
        }
    }

    pub fn current_window(&self) -> Option<Window> {
        self.current_window
    }

    pub fn close_window(&mut self) -> Option<Window> {
        self.current_window.take()
    }
}

impl Player for PlayerSession {
    fn name(&self) -> &str {
        &self.name
    }

    fn horizontal_facing(&self) -> HorizontalFacing {
        HorizontalFacing::from_yaw(self.y_rot)
    }

    fn set_current_window(&mut self, window: Window) -> bool {
        if let Some(previous) = self.current_window.replace(window) {
            tracing::debug!("{} closed {:?}", self.name, previous);
        }
        tracing::debug!("{} opened {:?}", self.name, window);
        true
    }
}
