use super::StateError;

/// A small unsigned integer living at a fixed bit offset of a state word,
/// with an inclusive valid range that may be narrower than its bit width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedField {
    pub name: &'static str,
    pub shift: u32,
    pub width: u32,
    pub min: u8,
    pub max: u8,
}

impl BoundedField {
    pub const fn new(name: &'static str, shift: u32, width: u32, min: u8, max: u8) -> Self {
        assert!(width > 0 && width <= 8, "field width must fit in a byte");
        assert!(min <= max, "empty field range");
        assert!((max as u32) < (1 << width), "range does not fit in the field width");
        Self {
            name,
            shift,
            width,
            min,
            max,
        }
    }

    /// Bits of the state word owned by this field.
    pub const fn mask(&self) -> u32 {
        ((1 << self.width) - 1) << self.shift
    }

    /// Extract the field from `word` and check it against the range.
    pub fn read(&self, word: u32) -> Result<u8, StateError> {
        let raw = ((word & self.mask()) >> self.shift) as u8;
        if raw < self.min || raw > self.max {
            return Err(StateError::OutOfRange {
                field: self.name,
                value: raw.into(),
                min: self.min.into(),
                max: self.max.into(),
            });
        }
        Ok(raw)
    }

    /// Shift an in-range value into place. The value must already be valid.
    pub fn write(&self, value: u8) -> u32 {
        debug_assert!(
            (self.min..=self.max).contains(&value),
            "{} = {} written without validation",
            self.name,
            value
        );
        ((value as u32) << self.shift) & self.mask()
    }

    /// Check a caller-supplied value before it is assigned.
    pub fn validate(&self, value: i64) -> Result<u8, StateError> {
        if value < i64::from(self.min) || value > i64::from(self.max) {
            return Err(StateError::InvalidArgument {
                field: self.name,
                value,
                min: self.min.into(),
                max: self.max.into(),
            });
        }
        Ok(value as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVEL: BoundedField = BoundedField::new("level", 2, 2, 0, 2);

    #[test]
    fn mask_covers_width_at_shift() {
        assert_eq!(LEVEL.mask(), 0b1100);
    }

    #[test]
    fn read_ignores_other_bits() {
        assert_eq!(LEVEL.read(0b0111), Ok(1));
        assert_eq!(LEVEL.read(0b1_0000_1011), Ok(2));
    }

    #[test]
    fn read_rejects_value_past_max() {
        assert_eq!(
            LEVEL.read(0b1100),
            Err(StateError::OutOfRange {
                field: "level",
                value: 3,
                min: 0,
                max: 2,
            })
        );
    }

    #[test]
    fn validate_distinguishes_caller_errors() {
        assert_eq!(LEVEL.validate(2), Ok(2));
        assert!(matches!(
            LEVEL.validate(-1),
            Err(StateError::InvalidArgument { value: -1, .. })
        ));
        assert!(matches!(
            LEVEL.validate(3),
            Err(StateError::InvalidArgument { value: 3, .. })
        ));
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = LEVEL.validate(7).unwrap_err();
        assert_eq!(err.to_string(), "`level` must be in range 0..=2, got 7");
    }
}
