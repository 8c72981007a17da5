//! Layout constants

/// Smallest room edge the carver aims for
pub const MIN_ROOM_SIZE: i32 = 5;

/// Smallest region edge a split may leave behind (room plus one cell each side)
pub const MIN_RECT_SIZE: i32 = MIN_ROOM_SIZE + 2;

/// Smallest accepted grid width or height
pub const MIN_DIMENSION: i32 = 7;

/// Defaults used when no parameters are supplied
pub const DEFAULT_WIDTH: i32 = 48;
pub const DEFAULT_HEIGHT: i32 = 32;
pub const DEFAULT_ROOMS: i32 = 20;
