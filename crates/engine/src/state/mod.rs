//! Bounded fields packed into a block's state word.
//!
//! Every block type describes its metadata as a handful of [`BoundedField`]s
//! instead of shifting bits by hand at each call site. Reads validate the
//! extracted value against the field's range and fail loudly: a corrupt saved
//! state must never be clamped into a legal one.

pub mod field;
pub mod legacy;

pub use field::BoundedField;
pub use legacy::{read_legacy_horizontal_facing, write_legacy_horizontal_facing};

use thiserror::Error;

/// Errors raised while reading or assigning bounded state fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// A stored state word holds a value the field cannot take.
    #[error("state field `{field}` holds {value}, outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    /// A caller asked for a value the field cannot take.
    #[error("`{field}` must be in range {min}..={max}, got {value}")]
    InvalidArgument {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    /// A state word was handed to a block type it does not belong to.
    #[error("expected block id {expected}, found {found}")]
    WrongBlock { expected: u16, found: u16 },
}
