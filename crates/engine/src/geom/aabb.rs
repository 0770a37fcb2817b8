use super::facing::Axis;

/// Axis-aligned bounding box in block-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min_x: f64,
    pub min_y: f64,
    pub min_z: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub max_z: f64,
}

impl Aabb {
    pub const fn new(
        min_x: f64,
        min_y: f64,
        min_z: f64,
        max_x: f64,
        max_y: f64,
        max_z: f64,
    ) -> Self {
        Self {
            min_x,
            min_y,
            min_z,
            max_x,
            max_y,
            max_z,
        }
    }

    /// The full unit cube.
    pub const fn one() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0)
    }

    /// Pull both faces on `axis` inwards by `distance`.
    pub fn squash(mut self, axis: Axis, distance: f64) -> Self {
        match axis {
            Axis::X => {
                self.min_x += distance;
                self.max_x -= distance;
            }
            Axis::Y => {
                self.min_y += distance;
                self.max_y -= distance;
            }
            Axis::Z => {
                self.min_z += distance;
                self.max_z -= distance;
            }
        }
        self
    }

    /// Length of the box along `axis`.
    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.max_x - self.min_x,
            Axis::Y => self.max_y - self.min_y,
            Axis::Z => self.max_z - self.min_z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squash_touches_only_one_axis() {
        let squashed = Aabb::one().squash(Axis::Z, 0.125);
        assert_eq!(squashed, Aabb::new(0.0, 0.0, 0.125, 1.0, 1.0, 0.875));
        assert_eq!(squashed.extent(Axis::X), 1.0);
        assert_eq!(squashed.extent(Axis::Y), 1.0);
        assert_eq!(squashed.extent(Axis::Z), 0.75);
    }
}
