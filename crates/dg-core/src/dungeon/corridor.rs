//! Corridor routing between neighbouring regions
//!
//! Two leaves are neighbours when exactly one boundary line separates them
//! and their spans along that line overlap. For each neighbouring pair the
//! router picks an exit column (or row) in each interior, claims the
//! boundary segment between the two, and digs a strip from each interior to
//! it. A segment that touches anything already carved is left alone, so
//! corridors never merge. Routing is greedy and single pass; some regions
//! can end up with no corridor at all.

use dg_rng::RandomSource;
use tracing::trace;

use super::rect::{PartitionTree, Region};
use super::{Grid, TileKind};

/// Result of one routing attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    Carved,
    /// The pair does not share a boundary segment
    NotAdjacent,
    /// One of the regions has no interior to start from
    NoInterior,
    /// Part of the boundary segment is already carved
    Blocked,
}

/// Route corridors between every neighbouring pair of leaves.
///
/// Returns the number of corridors carved.
pub fn make_aisles<R: RandomSource>(
    tree: &mut PartitionTree,
    grid: &mut Grid,
    rng: &mut R,
) -> usize {
    tree.shuffle_leaves(rng);

    let leaves = tree.leaves().to_vec();
    let mut carved = 0;

    for &a in &leaves {
        for &b in &leaves {
            if a == b {
                continue;
            }
            let r1 = tree.region(a);
            let r2 = tree.region(b);

            let outcome = if r1.is_stacked_above(r2) {
                route_vertical(grid, r1, r2, rng)
            } else if r1.is_left_of(r2) {
                route_horizontal(grid, r1, r2, rng)
            } else {
                continue;
            };

            trace!(?a, ?b, ?outcome, "route corridor");
            if outcome == RouteOutcome::Carved {
                carved += 1;
            }
        }
    }

    carved
}

/// Join `upper` to the region directly below it through their shared
/// boundary row.
pub fn route_vertical<R: RandomSource>(
    grid: &mut Grid,
    upper: &Region,
    lower: &Region,
    rng: &mut R,
) -> RouteOutcome {
    if !upper.is_stacked_above(lower) {
        return RouteOutcome::NotAdjacent;
    }
    let (Some(from), Some(to)) = (upper.interior, lower.interior) else {
        return RouteOutcome::NoInterior;
    };

    let start_x = rng.int_in_range(from.x0, from.x1);
    let end_x = rng.int_in_range(to.x0, to.x1);
    let row = upper.y1 + 1;
    let (lo, hi) = (start_x.min(end_x), start_x.max(end_x));

    if !segment_is_free(grid, lo - 1, hi + 1, |x| (x, row)) {
        return RouteOutcome::Blocked;
    }

    for x in lo..=hi {
        grid.carve(x, row, TileKind::Aisle);
    }
    for y in from.y1 + 1..=upper.y1 {
        grid.carve(start_x, y, TileKind::Aisle);
    }
    for y in lower.y0..to.y0 {
        grid.carve(end_x, y, TileKind::Aisle);
    }
    RouteOutcome::Carved
}

/// Join `left` to the region directly right of it through their shared
/// boundary column.
pub fn route_horizontal<R: RandomSource>(
    grid: &mut Grid,
    left: &Region,
    right: &Region,
    rng: &mut R,
) -> RouteOutcome {
    if !left.is_left_of(right) {
        return RouteOutcome::NotAdjacent;
    }
    let (Some(from), Some(to)) = (left.interior, right.interior) else {
        return RouteOutcome::NoInterior;
    };

    let start_y = rng.int_in_range(from.y0, from.y1);
    let end_y = rng.int_in_range(to.y0, to.y1);
    let column = left.x1 + 1;
    let (lo, hi) = (start_y.min(end_y), start_y.max(end_y));

    if !segment_is_free(grid, lo - 1, hi + 1, |y| (column, y)) {
        return RouteOutcome::Blocked;
    }

    for y in lo..=hi {
        grid.carve(column, y, TileKind::Aisle);
    }
    for x in from.x1 + 1..=left.x1 {
        grid.carve(x, start_y, TileKind::Aisle);
    }
    for x in right.x0..to.x0 {
        grid.carve(x, end_y, TileKind::Aisle);
    }
    RouteOutcome::Carved
}

/// Every cell of the segment, one cell of padding included, is still an
/// untouched boundary.
fn segment_is_free(grid: &Grid, from: i32, to: i32, cell: impl Fn(i32) -> (i32, i32)) -> bool {
    (from..=to).all(|i| {
        let (x, y) = cell(i);
        grid.get(x, y) == Some(TileKind::Boundary)
    })
}
