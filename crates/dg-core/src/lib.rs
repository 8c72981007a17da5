//! dg-core: dungeon layout generation
//!
//! Splits a grid into rectangular regions, carves a room or a branch point
//! inside each one, then joins neighbouring regions with corridors. There is
//! no I/O here; randomness comes from an injected [`RandomSource`].

pub mod dungeon;

mod consts;
mod error;
mod params;

pub use consts::*;
pub use dg_rng::{DungeonRng, RandomSource};
pub use dungeon::{generate, DungeonGenerator, GenerationReport, Grid, TileKind};
pub use error::GenerateError;
pub use params::GenerationParams;
