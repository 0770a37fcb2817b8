use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// One of the six faces of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    Down,
    Up,
    North,
    South,
    West,
    East,
}

impl Facing {
    pub const ALL: [Facing; 6] = [
        Facing::Down,
        Facing::Up,
        Facing::North,
        Facing::South,
        Facing::West,
        Facing::East,
    ];

    pub const fn axis(self) -> Axis {
        match self {
            Facing::Down | Facing::Up => Axis::Y,
            Facing::North | Facing::South => Axis::Z,
            Facing::West | Facing::East => Axis::X,
        }
    }

    /// Unit step towards this face. North is -Z, East is +X.
    pub const fn offset(self) -> (i64, i64, i64) {
        match self {
            Facing::Down => (0, -1, 0),
            Facing::Up => (0, 1, 0),
            Facing::North => (0, 0, -1),
            Facing::South => (0, 0, 1),
            Facing::West => (-1, 0, 0),
            Facing::East => (1, 0, 0),
        }
    }

    /// `None` for the two vertical faces.
    pub const fn horizontal(self) -> Option<HorizontalFacing> {
        match self {
            Facing::North => Some(HorizontalFacing::North),
            Facing::East => Some(HorizontalFacing::East),
            Facing::South => Some(HorizontalFacing::South),
            Facing::West => Some(HorizontalFacing::West),
            Facing::Down | Facing::Up => None,
        }
    }
}

/// A compass direction. Vertical orientations are not representable, which is
/// what blocks that can only be turned around the Y axis need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HorizontalFacing {
    North,
    East,
    South,
    West,
}

impl HorizontalFacing {
    /// Clockwise order, seen from above.
    pub const ALL: [HorizontalFacing; 4] = [
        HorizontalFacing::North,
        HorizontalFacing::East,
        HorizontalFacing::South,
        HorizontalFacing::West,
    ];

    /// Quarter turn around the Y axis.
    pub const fn rotate_y(self, clockwise: bool) -> Self {
        use HorizontalFacing::*;
        match (self, clockwise) {
            (North, true) | (South, false) => East,
            (East, true) | (West, false) => South,
            (South, true) | (North, false) => West,
            (West, true) | (East, false) => North,
        }
    }

    pub const fn opposite(self) -> Self {
        self.rotate_y(true).rotate_y(true)
    }

    pub const fn axis(self) -> Axis {
        self.to_facing().axis()
    }

    pub const fn to_facing(self) -> Facing {
        match self {
            HorizontalFacing::North => Facing::North,
            HorizontalFacing::East => Facing::East,
            HorizontalFacing::South => Facing::South,
            HorizontalFacing::West => Facing::West,
        }
    }

    /// Facing of an actor from its yaw in degrees (0 = looking south,
    /// increasing clockwise). Any value is accepted and wrapped.
    pub fn from_yaw(yaw: f32) -> Self {
        let degrees = yaw.rem_euclid(360.0);

        if !(45.0..315.0).contains(&degrees) {
            HorizontalFacing::South
        } else if degrees < 135.0 {
            HorizontalFacing::West
        } else if degrees < 225.0 {
            HorizontalFacing::North
        } else {
            HorizontalFacing::East
        }
    }
}

impl From<HorizontalFacing> for Facing {
    fn from(facing: HorizontalFacing) -> Self {
        facing.to_facing()
    }
}
