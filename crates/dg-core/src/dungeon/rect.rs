//! Regions and the partition tree
//!
//! The tree is an arena of regions addressed by [`RegionId`]. Splitting a
//! leaf keeps the parent in the arena, appends two children, and swaps the
//! parent for its children in the ordered leaf list. Stages hold ids, never
//! references, so the arena can grow while they work.

use dg_rng::RandomSource;

/// Index of a region in a [`PartitionTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub usize);

/// The carved part of a region: a room, or a single cell for a branch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interior {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Interior {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Degenerate interior of a branch region
    pub fn point(x: i32, y: i32) -> Self {
        Self::new(x, y, x, y)
    }

    pub fn is_point(&self) -> bool {
        self.x0 == self.x1 && self.y0 == self.y1
    }

    pub fn width(&self) -> i32 {
        self.x1 - self.x0 + 1
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0 + 1
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.x0 <= x && x <= self.x1 && self.y0 <= y && y <= self.y1
    }
}

/// Axis-aligned rectangle with inclusive bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
    /// Assigned by the room carver
    pub interior: Option<Interior>,
}

impl Region {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            x0,
            y0,
            x1,
            y1,
            interior: None,
        }
    }

    pub fn width(&self) -> i32 {
        self.x1 - self.x0 + 1
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0 + 1
    }

    pub fn area(&self) -> i64 {
        i64::from(self.width()) * i64::from(self.height())
    }

    /// Sort key for splitting: the longer edge
    pub fn longest_side(&self) -> i32 {
        self.width().max(self.height())
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.x0 <= x && x <= self.x1 && self.y0 <= y && y <= self.y1
    }

    /// Strict overlap of the column ranges; touching ends do not count
    pub fn overlaps_x(&self, other: &Region) -> bool {
        other.x0 < self.x1 && self.x0 < other.x1
    }

    /// Strict overlap of the row ranges
    pub fn overlaps_y(&self, other: &Region) -> bool {
        other.y0 < self.y1 && self.y0 < other.y1
    }

    /// `other` sits directly below, one boundary row apart
    pub fn is_stacked_above(&self, other: &Region) -> bool {
        self.overlaps_x(other) && other.y0 == self.y1 + 2
    }

    /// `other` sits directly to the right, one boundary column apart
    pub fn is_left_of(&self, other: &Region) -> bool {
        self.overlaps_y(other) && other.x0 == self.x1 + 2
    }
}

/// Orientation of a split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left | right, divided by a boundary column
    Vertical,
    /// Top / bottom, divided by a boundary row
    Horizontal,
}

/// One completed split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split {
    pub parent: RegionId,
    pub axis: Axis,
    /// Column (vertical) or row (horizontal) of the boundary line
    pub at: i32,
    /// Left/top child first
    pub children: [RegionId; 2],
}

/// Current leaves of the recursive split, backed by an arena
#[derive(Debug, Clone, Default)]
pub struct PartitionTree {
    nodes: Vec<Region>,
    leaves: Vec<RegionId>,
    splits: Vec<Split>,
}

impl PartitionTree {
    /// Single leaf covering a `width` x `height` grid
    pub fn new(width: i32, height: i32) -> Self {
        let mut tree = Self::default();
        tree.reset(width, height);
        tree
    }

    /// Drop every region and start again from one covering leaf.
    /// A non-positive size leaves the tree empty.
    pub fn reset(&mut self, width: i32, height: i32) {
        self.nodes.clear();
        self.leaves.clear();
        self.splits.clear();
        if width > 0 && height > 0 {
            self.nodes.push(Region::new(0, 0, width - 1, height - 1));
            self.leaves.push(RegionId(0));
        }
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// Leaf ids in their current order
    pub fn leaves(&self) -> &[RegionId] {
        &self.leaves
    }

    /// Leaf regions in their current order
    pub fn regions(&self) -> impl Iterator<Item = &Region> + '_ {
        self.leaves.iter().map(move |&id| &self.nodes[id.0])
    }

    pub fn region(&self, id: RegionId) -> &Region {
        &self.nodes[id.0]
    }

    pub(crate) fn region_mut(&mut self, id: RegionId) -> &mut Region {
        &mut self.nodes[id.0]
    }

    pub fn splits(&self) -> &[Split] {
        &self.splits
    }

    /// Cells consumed by boundary lines
    pub fn boundary_cells(&self) -> i64 {
        self.splits
            .iter()
            .map(|split| {
                let parent = &self.nodes[split.parent.0];
                match split.axis {
                    Axis::Vertical => i64::from(parent.height()),
                    Axis::Horizontal => i64::from(parent.width()),
                }
            })
            .sum()
    }

    /// Total area of the leaves
    pub fn leaf_area(&self) -> i64 {
        self.regions().map(Region::area).sum()
    }

    /// Stable ascending sort by longest side; the largest leaf ends up last
    pub(crate) fn sort_leaves_by_size(&mut self) {
        let nodes = &self.nodes;
        self.leaves.sort_by_key(|id| nodes[id.0].longest_side());
    }

    pub(crate) fn shuffle_leaves<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.leaves);
    }

    pub(crate) fn last_leaf(&self) -> Option<RegionId> {
        self.leaves.last().copied()
    }

    /// Replace the last leaf with its two children divided at `at`.
    ///
    /// The caller has checked that `at` lies strictly inside the leaf.
    pub(crate) fn split_last(&mut self, axis: Axis, at: i32) -> Option<[RegionId; 2]> {
        let parent_id = self.leaves.pop()?;
        let parent = self.nodes[parent_id.0];
        let (first, second) = match axis {
            Axis::Vertical => (
                Region::new(parent.x0, parent.y0, at - 1, parent.y1),
                Region::new(at + 1, parent.y0, parent.x1, parent.y1),
            ),
            Axis::Horizontal => (
                Region::new(parent.x0, parent.y0, parent.x1, at - 1),
                Region::new(parent.x0, at + 1, parent.x1, parent.y1),
            ),
        };

        let children = [self.push_leaf(first), self.push_leaf(second)];
        self.splits.push(Split {
            parent: parent_id,
            axis,
            at,
            children,
        });
        Some(children)
    }

    fn push_leaf(&mut self, region: Region) -> RegionId {
        let id = RegionId(self.nodes.len());
        self.nodes.push(region);
        self.leaves.push(id);
        id
    }
}
