//! Dungeon generation session
//!
//! Runs the three stages in order on a freshly reset grid and tree:
//! split, carve rooms, route corridors. Each run starts again from a single
//! all-wall region, so nothing leaks from one dungeon into the next.

use dg_rng::RandomSource;
use tracing::debug;

use crate::error::GenerateError;
use crate::params::GenerationParams;

use super::corridor::make_aisles;
use super::rect::{PartitionTree, Region, RegionId};
use super::room::make_rooms;
use super::split::split_random;
use super::Grid;

/// Summary of the last generation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Leaves after splitting
    pub regions: usize,
    pub splits: usize,
    pub rooms: usize,
    pub branches: usize,
    pub corridors: usize,
}

/// Reusable generator that owns the grid and the partition tree
#[derive(Debug, Clone, Default)]
pub struct DungeonGenerator {
    grid: Grid,
    tree: PartitionTree,
    report: GenerationReport,
}

impl DungeonGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a new dungeon, replacing the previous one.
    ///
    /// Fails only when `params` are out of range; on failure the previous
    /// dungeon is left untouched.
    pub fn generate<R: RandomSource>(
        &mut self,
        params: &GenerationParams,
        rng: &mut R,
    ) -> Result<&Grid, GenerateError> {
        params.validate()?;
        debug!(
            width = params.width,
            height = params.height,
            rooms = params.rooms,
            branches = params.branches,
            iterations = params.split_iterations(),
            "generating dungeon"
        );

        self.reset(params.width, params.height);
        let splits = split_random(
            &mut self.tree,
            &mut self.grid,
            params.rooms,
            params.branches,
            rng,
        );
        let carved = make_rooms(&mut self.tree, &mut self.grid, params.branches, rng);
        let corridors = make_aisles(&mut self.tree, &mut self.grid, rng);

        self.report = GenerationReport {
            regions: self.tree.leaf_count(),
            splits,
            rooms: carved.rooms,
            branches: carved.branches,
            corridors,
        };
        debug!(report = ?self.report, "dungeon generated");

        Ok(&self.grid)
    }

    fn reset(&mut self, width: i32, height: i32) {
        self.grid.reset(width, height);
        self.tree.reset(width, height);
        self.report = GenerationReport::default();
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tree(&self) -> &PartitionTree {
        &self.tree
    }

    /// Final regions of the last run
    pub fn regions(&self) -> impl Iterator<Item = &Region> + '_ {
        self.tree.regions()
    }

    pub fn region(&self, id: RegionId) -> &Region {
        self.tree.region(id)
    }

    pub fn report(&self) -> &GenerationReport {
        &self.report
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

/// One-shot generation: a fresh generator, one run, the resulting grid.
pub fn generate<R: RandomSource>(
    width: i32,
    height: i32,
    room_count: i32,
    branch_count: i32,
    rng: &mut R,
) -> Result<Grid, GenerateError> {
    let mut generator = DungeonGenerator::new();
    generator.generate(
        &GenerationParams::new(width, height, room_count, branch_count),
        rng,
    )?;
    Ok(generator.into_grid())
}
