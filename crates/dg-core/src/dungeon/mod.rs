//! Dungeon layout
//!
//! Grid, partition tree, and the three generation stages: splitting,
//! room carving and corridor routing.

mod corridor;
mod generation;
mod grid;
mod rect;
mod room;
mod split;

pub use corridor::{make_aisles, route_horizontal, route_vertical, RouteOutcome};
pub use generation::{generate, DungeonGenerator, GenerationReport};
pub use grid::{Grid, TileKind};
pub use rect::{Axis, Interior, PartitionTree, Region, RegionId, Split};
pub use room::{make_rooms, CarveSummary};
pub use split::{split_random, split_tail};
