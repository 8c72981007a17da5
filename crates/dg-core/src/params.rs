//! Generation parameters

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_HEIGHT, DEFAULT_ROOMS, DEFAULT_WIDTH, MIN_DIMENSION};
use crate::error::GenerateError;

/// Inputs to one generation run.
///
/// Missing fields fall back to the defaults when deserialized, so a config
/// file may set only the values it cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    pub width: i32,
    pub height: i32,
    /// Target number of rooms
    pub rooms: i32,
    /// Number of regions carved as single-cell junctions instead of rooms
    pub branches: i32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            rooms: DEFAULT_ROOMS,
            branches: 0,
        }
    }
}

impl GenerationParams {
    pub fn new(width: i32, height: i32, rooms: i32, branches: i32) -> Self {
        Self {
            width,
            height,
            rooms,
            branches,
        }
    }

    /// Every problem with these parameters, in field order
    pub fn violations(&self) -> Vec<GenerateError> {
        let mut errors = Vec::new();
        if self.width < MIN_DIMENSION || self.height < MIN_DIMENSION {
            errors.push(GenerateError::InvalidDimensions {
                width: self.width,
                height: self.height,
                min: MIN_DIMENSION,
            });
        }
        if self.rooms <= 0 {
            errors.push(GenerateError::InvalidRoomCount(self.rooms));
        }
        if self.branches < 0 {
            errors.push(GenerateError::InvalidBranchCount(self.branches));
        }
        errors
    }

    /// Fails with the first violation, if any
    pub fn validate(&self) -> Result<(), GenerateError> {
        match self.violations().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Number of split iterations: one less than the leaves requested
    pub fn split_iterations(&self) -> usize {
        (i64::from(self.rooms) + i64::from(self.branches) - 1).max(0) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_driver() {
        let params = GenerationParams::default();
        assert_eq!(params, GenerationParams::new(48, 32, 20, 0));
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_minimum_is_valid() {
        assert!(GenerationParams::new(7, 7, 1, 0).validate().is_ok());
    }

    #[test]
    fn test_small_dimensions_rejected() {
        let err = GenerationParams::new(6, 7, 1, 0).validate().unwrap_err();
        assert_eq!(
            err,
            GenerateError::InvalidDimensions {
                width: 6,
                height: 7,
                min: 7
            }
        );
        assert!(GenerationParams::new(7, 6, 1, 0).validate().is_err());
    }

    #[test]
    fn test_room_count_must_be_positive() {
        assert_eq!(
            GenerationParams::new(20, 20, 0, 0).validate(),
            Err(GenerateError::InvalidRoomCount(0))
        );
        assert_eq!(
            GenerationParams::new(20, 20, -3, 0).validate(),
            Err(GenerateError::InvalidRoomCount(-3))
        );
    }

    #[test]
    fn test_all_violations_reported() {
        let errors = GenerationParams::new(3, 2, 0, -1).violations();
        assert_eq!(errors.len(), 3);
        assert!(matches!(errors[0], GenerateError::InvalidDimensions { .. }));
        assert_eq!(errors[1], GenerateError::InvalidRoomCount(0));
        assert_eq!(errors[2], GenerateError::InvalidBranchCount(-1));
    }

    #[test]
    fn test_split_iterations() {
        assert_eq!(GenerationParams::new(48, 32, 20, 0).split_iterations(), 19);
        assert_eq!(GenerationParams::new(48, 32, 3, 2).split_iterations(), 4);
        assert_eq!(GenerationParams::new(48, 32, 1, 0).split_iterations(), 0);
        assert_eq!(GenerationParams::new(48, 32, 0, 0).split_iterations(), 0);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let params: GenerationParams = serde_json::from_str(r#"{"rooms": 5}"#).unwrap();
        assert_eq!(params, GenerationParams::new(48, 32, 5, 0));
    }

    #[test]
    fn test_error_messages() {
        let err = GenerationParams::new(5, 9, 1, 0).validate().unwrap_err();
        assert_eq!(err.to_string(), "dungeon must be at least 7x7, got 5x9");
        assert_eq!(
            GenerateError::InvalidRoomCount(0).to_string(),
            "room count must be positive, got 0"
        );
    }
}
