//! Property tests for bounded state fields and the shared facing table.

use proptest::prelude::*;
use wearblock_engine::geom::HorizontalFacing;
use wearblock_engine::state::{
    BoundedField, StateError, read_legacy_horizontal_facing, write_legacy_horizontal_facing,
};

const LOW: BoundedField = BoundedField::new("low", 0, 2, 0, 3);
const WEAR: BoundedField = BoundedField::new("wear", 2, 2, 0, 2);

#[test]
fn legacy_codes_are_fixed() {
    assert_eq!(read_legacy_horizontal_facing(0), HorizontalFacing::South);
    assert_eq!(read_legacy_horizontal_facing(1), HorizontalFacing::West);
    assert_eq!(read_legacy_horizontal_facing(2), HorizontalFacing::North);
    assert_eq!(read_legacy_horizontal_facing(3), HorizontalFacing::East);
    for facing in HorizontalFacing::ALL {
        let code = write_legacy_horizontal_facing(facing);
        assert_eq!(read_legacy_horizontal_facing(code), facing);
    }
}

proptest! {
    /// Fields at different offsets never see each other's bits.
    #[test]
    fn fields_are_independent(low in 0u8..=3, wear in 0u8..=2) {
        let word = LOW.write(low) | WEAR.write(wear);
        prop_assert_eq!(LOW.read(word), Ok(low));
        prop_assert_eq!(WEAR.read(word), Ok(wear));
        prop_assert_eq!(word & !0b1111, 0);
    }

    /// A read either succeeds with an in-range value or names the field.
    #[test]
    fn reads_never_clamp(word in any::<u32>()) {
        let raw = ((word >> 2) & 0b11) as u8;
        match WEAR.read(word) {
            Ok(value) => prop_assert_eq!(value, raw),
            Err(StateError::OutOfRange { field, value, .. }) => {
                prop_assert_eq!(field, "wear");
                prop_assert_eq!(value, 3);
            }
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    #[test]
    fn validate_accepts_exactly_the_range(value in -1000i64..1000) {
        let result = WEAR.validate(value);
        prop_assert_eq!(result.is_ok(), (0..=2).contains(&value));
        if let Err(err) = result {
            let is_invalid_argument = matches!(err, StateError::InvalidArgument { .. });
            prop_assert!(is_invalid_argument);
        }
    }
}
