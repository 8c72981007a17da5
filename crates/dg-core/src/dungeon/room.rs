//! Room and branch carving
//!
//! Every leaf gets an interior. After a shuffle the first `branch_count`
//! leaves become single-cell branch points; the rest get a room roughly
//! centred in the region with at least one cell of margin on every side.

use dg_rng::RandomSource;
use tracing::trace;

use crate::consts::MIN_ROOM_SIZE;

use super::rect::{Interior, PartitionTree, Region};
use super::{Grid, TileKind};

/// What the carver produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarveSummary {
    pub rooms: usize,
    pub branches: usize,
    /// Leaves narrower than three cells, which have no interior to carve
    pub skipped: usize,
}

/// Carve a room or a branch point into every leaf of `tree`.
pub fn make_rooms<R: RandomSource>(
    tree: &mut PartitionTree,
    grid: &mut Grid,
    branch_count: i32,
    rng: &mut R,
) -> CarveSummary {
    tree.shuffle_leaves(rng);

    let branch_count = usize::try_from(branch_count).unwrap_or(0);
    let mut summary = CarveSummary::default();
    let leaves = tree.leaves().to_vec();

    for (i, id) in leaves.into_iter().enumerate() {
        let region = *tree.region(id);
        let is_branch = i < branch_count;
        let interior = if is_branch {
            pick_branch(&region, rng)
        } else {
            pick_room(&region, rng)
        };

        let Some(interior) = interior else {
            summary.skipped += 1;
            continue;
        };

        if is_branch {
            grid.carve(interior.x0, interior.y0, TileKind::Aisle);
            summary.branches += 1;
        } else {
            for y in interior.y0..=interior.y1 {
                for x in interior.x0..=interior.x1 {
                    grid.carve(x, y, TileKind::Room);
                }
            }
            summary.rooms += 1;
        }
        trace!(?id, ?interior, is_branch, "carved interior");
        tree.region_mut(id).interior = Some(interior);
    }

    summary
}

fn has_interior(region: &Region) -> bool {
    region.width() >= 3 && region.height() >= 3
}

fn pick_branch<R: RandomSource>(region: &Region, rng: &mut R) -> Option<Interior> {
    if !has_interior(region) {
        return None;
    }
    let x = rng.int_in_range(region.x0 + 1, region.x1 - 1);
    let y = rng.int_in_range(region.y0 + 1, region.y1 - 1);
    Some(Interior::point(x, y))
}

fn pick_room<R: RandomSource>(region: &Region, rng: &mut R) -> Option<Interior> {
    if !has_interior(region) {
        return None;
    }
    // Draw order matches the layout: x0, y0, x1, y1
    let mid_x = (region.x0 + region.x1) / 2;
    let mid_y = (region.y0 + region.y1) / 2;
    let x0 = rng.int_in_range(region.x0 + 1, near_start(region.x0, mid_x));
    let y0 = rng.int_in_range(region.y0 + 1, near_start(region.y0, mid_y));
    let x1 = rng.int_in_range(near_end(region.x1, mid_x), region.x1 - 1);
    let y1 = rng.int_in_range(near_end(region.y1, mid_y), region.y1 - 1);
    Some(Interior::new(x0, y0, x1, y1))
}

/// Upper bound for a room's first edge. Spans shorter than
/// [`crate::MIN_RECT_SIZE`] clamp to the first interior cell.
fn near_start(lo: i32, mid: i32) -> i32 {
    (mid - MIN_ROOM_SIZE / 2).max(lo + 1)
}

/// Lower bound for a room's last edge, clamped to the last interior cell
fn near_end(hi: i32, mid: i32) -> i32 {
    (mid + MIN_ROOM_SIZE / 2).min(hi - 1)
}
