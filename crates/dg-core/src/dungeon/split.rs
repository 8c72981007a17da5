//! Recursive region splitting
//!
//! Each iteration sorts the leaves so the largest sits last, then tries to
//! cut that leaf in two along a randomly preferred axis, falling back to the
//! other axis. A leaf too small for either axis stays whole, and since it is
//! the largest leaf, splitting ends there.

use dg_rng::RandomSource;
use tracing::trace;

use crate::consts::MIN_RECT_SIZE;

use super::rect::{Axis, PartitionTree};
use super::{Grid, TileKind};

/// Run up to `room_count + branch_count - 1` split iterations.
///
/// Returns the number of splits that happened, which is lower than the
/// iteration count once leaves get too small to divide. The first iteration
/// that splits nothing ends the loop: the tail leaf has the longest side of
/// all leaves, so if it cannot be divided no other leaf can either.
pub fn split_random<R: RandomSource>(
    tree: &mut PartitionTree,
    grid: &mut Grid,
    room_count: i32,
    branch_count: i32,
    rng: &mut R,
) -> usize {
    let iterations = (i64::from(room_count) + i64::from(branch_count) - 1).max(0);
    let mut splits = 0;

    for iteration in 0..iterations {
        tree.sort_leaves_by_size();
        let order = if rng.coin_flip() {
            [Axis::Horizontal, Axis::Vertical]
        } else {
            [Axis::Vertical, Axis::Horizontal]
        };

        let split = order
            .into_iter()
            .any(|axis| split_tail(tree, grid, axis, rng));
        if !split {
            trace!(iteration, iterations, "no leaf left to split");
            break;
        }
        splits += 1;
    }

    splits
}

/// Split the last leaf along `axis`, drawing the boundary line on the grid.
///
/// The boundary is placed uniformly so both children keep at least
/// [`MIN_RECT_SIZE`] cells along the split axis. Returns false without
/// touching anything when the leaf is too short for that.
pub fn split_tail<R: RandomSource>(
    tree: &mut PartitionTree,
    grid: &mut Grid,
    axis: Axis,
    rng: &mut R,
) -> bool {
    let Some(id) = tree.last_leaf() else {
        return false;
    };
    let region = *tree.region(id);

    let (lo, hi) = match axis {
        Axis::Vertical => (region.x0, region.x1),
        Axis::Horizontal => (region.y0, region.y1),
    };
    if hi - lo + 1 < MIN_RECT_SIZE * 2 + 1 {
        return false;
    }

    let at = rng.int_in_range(lo + MIN_RECT_SIZE, hi - MIN_RECT_SIZE);
    match axis {
        Axis::Vertical => {
            for y in region.y0..=region.y1 {
                grid.carve(at, y, TileKind::Boundary);
            }
        }
        Axis::Horizontal => {
            for x in region.x0..=region.x1 {
                grid.carve(x, at, TileKind::Boundary);
            }
        }
    }

    trace!(?axis, at, ?region, "split region");
    tree.split_last(axis, at).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dg_rng::{DungeonRng, SequenceRng, TracedRng};

    #[test]
    fn test_single_room_never_splits() {
        let mut tree = PartitionTree::new(48, 32);
        let mut grid = Grid::new(48, 32);
        let mut rng = DungeonRng::new(42);

        assert_eq!(split_random(&mut tree, &mut grid, 1, 0, &mut rng), 0);
        assert_eq!(tree.leaf_count(), 1);
        assert_eq!(grid.count(TileKind::Boundary), 0);
    }

    #[test]
    fn test_too_small_region_is_left_whole() {
        let mut tree = PartitionTree::new(14, 14);
        let mut grid = Grid::new(14, 14);
        let mut rng = DungeonRng::new(42);

        assert_eq!(split_random(&mut tree, &mut grid, 5, 0, &mut rng), 0);
        assert_eq!(tree.leaf_count(), 1);
        assert_eq!(grid.count(TileKind::Wall), 14 * 14);
    }

    #[test]
    fn test_vertical_split_position() {
        let mut tree = PartitionTree::new(20, 9);
        let mut grid = Grid::new(20, 9);
        // Boundary column drawn from [7, 12]
        let mut rng = SequenceRng::new([10]);

        assert!(split_tail(&mut tree, &mut grid, Axis::Vertical, &mut rng));
        let regions: Vec<_> = tree.regions().copied().collect();
        assert_eq!((regions[0].x0, regions[0].x1), (0, 9));
        assert_eq!((regions[1].x0, regions[1].x1), (11, 19));
        for y in 0..9 {
            assert_eq!(grid.tile_at(10, y), TileKind::Boundary);
        }
        assert_eq!(grid.count(TileKind::Boundary), 9);
    }

    #[test]
    fn test_horizontal_fails_on_short_region() {
        let mut tree = PartitionTree::new(40, 14);
        let mut grid = Grid::new(40, 14);
        let mut rng = DungeonRng::new(1);

        assert!(!split_tail(&mut tree, &mut grid, Axis::Horizontal, &mut rng));
        assert_eq!(tree.leaf_count(), 1);
        assert!(split_tail(&mut tree, &mut grid, Axis::Vertical, &mut rng));
        assert_eq!(tree.leaf_count(), 2);
    }

    #[test]
    fn test_falls_back_to_other_axis() {
        // 30 wide, 10 tall: only a vertical split fits
        let mut tree = PartitionTree::new(30, 10);
        let mut grid = Grid::new(30, 10);
        // Coin 0 = horizontal first; horizontal fails, vertical draws 12
        let mut rng = SequenceRng::new([0, 12]);

        assert_eq!(split_random(&mut tree, &mut grid, 2, 0, &mut rng), 1);
        assert_eq!(tree.splits()[0].axis, Axis::Vertical);
        assert_eq!(tree.splits()[0].at, 12);
    }

    #[test]
    fn test_children_respect_minimum_size() {
        let mut tree = PartitionTree::new(48, 32);
        let mut grid = Grid::new(48, 32);
        let mut rng = DungeonRng::new(7);

        split_random(&mut tree, &mut grid, 20, 0, &mut rng);
        for region in tree.regions() {
            assert!(region.width() >= MIN_RECT_SIZE, "{region:?}");
            assert!(region.height() >= MIN_RECT_SIZE, "{region:?}");
        }
    }

    #[test]
    fn test_largest_leaf_is_split_first() {
        let mut tree = PartitionTree::new(60, 15);
        let mut grid = Grid::new(60, 15);
        // First split at column 15 leaves a 15x15 and a 44x15 leaf;
        // the second iteration must cut the wider one.
        let mut rng = SequenceRng::new([1, 15, 1, 40]);

        assert_eq!(split_random(&mut tree, &mut grid, 3, 0, &mut rng), 2);
        let second = tree.splits()[1];
        assert_eq!(second.parent, tree.splits()[0].children[1]);
        assert_eq!(second.at, 40);
    }

    #[test]
    fn test_area_is_tiled() {
        let mut tree = PartitionTree::new(64, 48);
        let mut grid = Grid::new(64, 48);
        let mut rng = DungeonRng::new(3);

        split_random(&mut tree, &mut grid, 12, 3, &mut rng);
        assert_eq!(tree.leaf_area() + tree.boundary_cells(), 64 * 48);
        assert_eq!(
            grid.count(TileKind::Boundary) as i64,
            tree.boundary_cells()
        );
    }

    #[test]
    fn test_stops_once_nothing_splits() {
        let mut tree = PartitionTree::new(14, 14);
        let mut grid = Grid::new(14, 14);
        let mut rng = TracedRng::new(DungeonRng::new(42));

        assert_eq!(split_random(&mut tree, &mut grid, 1_000_000, 0, &mut rng), 0);
        // One coin for the only iteration that ran
        assert_eq!(rng.call_count(), 1);
    }

    #[test]
    fn test_huge_room_count_is_bounded_by_area() {
        let mut tree = PartitionTree::new(48, 32);
        let mut grid = Grid::new(48, 32);
        let mut rng = TracedRng::new(DungeonRng::new(9));

        let splits = split_random(&mut tree, &mut grid, i32::MAX, i32::MAX, &mut rng);
        assert_eq!(tree.leaf_count(), splits + 1);
        // Each split costs a coin and a position, plus the final failed coin
        assert_eq!(rng.call_count(), 2 * splits as u64 + 1);
        for region in tree.regions() {
            assert!(region.longest_side() < MIN_RECT_SIZE * 2 + 1, "{region:?}");
        }
    }

    #[test]
    fn test_branches_add_iterations() {
        let mut tree = PartitionTree::new(200, 200);
        let mut grid = Grid::new(200, 200);
        let mut rng = DungeonRng::new(11);

        assert_eq!(split_random(&mut tree, &mut grid, 3, 2, &mut rng), 4);
        assert_eq!(tree.leaf_count(), 5);
    }
}
