//! Parameter layering: defaults, then a JSON config file, then CLI flags

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dg_core::GenerationParams;

/// Flags that override file and default values when present
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub rooms: Option<i32>,
    pub branches: Option<i32>,
}

impl Overrides {
    pub fn apply(&self, params: &mut GenerationParams) {
        if let Some(width) = self.width {
            params.width = width;
        }
        if let Some(height) = self.height {
            params.height = height;
        }
        if let Some(rooms) = self.rooms {
            params.rooms = rooms;
        }
        if let Some(branches) = self.branches {
            params.branches = branches;
        }
    }
}

/// Parse a (possibly partial) JSON parameter set
pub fn parse_params(json: &str) -> Result<GenerationParams> {
    serde_json::from_str(json).context("invalid dungeon config")
}

/// Resolve the parameters for this run. Validation is left to the caller.
pub fn resolve(config: Option<&Path>, overrides: &Overrides) -> Result<GenerationParams> {
    let mut params = match config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            parse_params(&text).with_context(|| format!("in {}", path.display()))?
        }
        None => GenerationParams::default(),
    };
    overrides.apply(&mut params);
    Ok(params)
}
