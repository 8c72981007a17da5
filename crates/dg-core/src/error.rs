//! Parameter validation errors
//!
//! These are the only failures the generator reports. A split that cannot
//! happen or a corridor that is blocked is a normal outcome, not an error.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    #[error("dungeon must be at least {min}x{min}, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32, min: i32 },

    #[error("room count must be positive, got {0}")]
    InvalidRoomCount(i32),

    #[error("branch count must not be negative, got {0}")]
    InvalidBranchCount(i32),
}
