//! Tile grid

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// What occupies a single cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum TileKind {
    #[default]
    Wall = 0,
    /// Dividing line drawn between two sibling regions
    Boundary = 1,
    Room = 2,
    Aisle = 3,
}

impl TileKind {
    /// Single-character map encoding
    pub const fn tag(&self) -> char {
        match self {
            TileKind::Wall => '0',
            TileKind::Boundary => '1',
            TileKind::Room => 'r',
            TileKind::Aisle => 'a',
        }
    }

    /// Rooms and aisles are the walkable cells
    pub const fn is_open(&self) -> bool {
        matches!(self, TileKind::Room | TileKind::Aisle)
    }
}

/// Column-major tile buffer, `tiles[x][y]`.
///
/// Cells start as [`TileKind::Wall`] and are only ever carved into other
/// kinds until the next [`Grid::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    width: i32,
    height: i32,
    tiles: Vec<Vec<TileKind>>,
}

impl Grid {
    /// All-wall grid. Negative sizes are treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        let mut grid = Self::default();
        grid.reset(width, height);
        grid
    }

    /// Resize and refill with walls
    pub fn reset(&mut self, width: i32, height: i32) {
        self.width = width.max(0);
        self.height = height.max(0);
        self.tiles.resize(self.width as usize, Vec::new());
        for column in &mut self.tiles {
            column.clear();
            column.resize(self.height as usize, TileKind::Wall);
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    pub fn get(&self, x: i32, y: i32) -> Option<TileKind> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(self.tiles[x as usize][y as usize])
    }

    /// Tile at `(x, y)`.
    ///
    /// # Panics
    /// If the position is outside the grid.
    pub fn tile_at(&self, x: i32, y: i32) -> TileKind {
        self.get(x, y).unwrap_or_else(|| {
            panic!(
                "tile ({x}, {y}) out of bounds for {}x{} grid",
                self.width, self.height
            )
        })
    }

    /// Number of cells of the given kind
    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles
            .iter()
            .flat_map(|column| column.iter())
            .filter(|&&tile| tile == kind)
            .count()
    }

    /// Iterate rows top to bottom, each row left to right
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = TileKind> + '_> + '_ {
        (0..self.height as usize).map(move |y| self.tiles.iter().map(move |column| column[y]))
    }

    /// Carve a cell. Walls are never written back; positions outside the
    /// grid are ignored.
    pub(crate) fn carve(&mut self, x: i32, y: i32, kind: TileKind) {
        debug_assert!(kind != TileKind::Wall, "carving never restores walls");
        if kind == TileKind::Wall || !self.in_bounds(x, y) {
            return;
        }
        self.tiles[x as usize][y as usize] = kind;
    }

    /// Lossless dump: every cell as its tag followed by a space
    pub fn dump_tags(&self) -> String {
        let mut out = format!("{} {}\n", self.width, self.height);
        for row in self.rows() {
            for tile in row {
                out.push(tile.tag());
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}

/// Reference text dump. Walls and boundaries print as their tag, open cells
/// as blanks.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.width, self.height)?;
        for row in self.rows() {
            for tile in row {
                if tile.is_open() {
                    f.write_str("  ")?;
                } else {
                    write!(f, "{} ", tile.tag())?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_new_grid_is_all_wall() {
        let grid = Grid::new(9, 7);
        assert_eq!(grid.width(), 9);
        assert_eq!(grid.height(), 7);
        assert_eq!(grid.count(TileKind::Wall), 63);
    }

    #[test]
    fn test_negative_size_is_empty() {
        let grid = Grid::new(-4, 5);
        assert_eq!(grid.width(), 0);
        assert_eq!(grid.get(0, 0), None);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::new(3, 3);
        assert_eq!(grid.get(2, 2), Some(TileKind::Wall));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, -1), None);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_tile_at_panics_outside() {
        Grid::new(3, 3).tile_at(5, 1);
    }

    #[test]
    fn test_reset_clears_carving() {
        let mut grid = Grid::new(8, 8);
        grid.carve(2, 3, TileKind::Room);
        grid.carve(4, 4, TileKind::Aisle);

        grid.reset(10, 6);
        assert_eq!(grid.width(), 10);
        assert_eq!(grid.height(), 6);
        assert_eq!(grid.count(TileKind::Wall), 60);
    }

    #[test]
    fn test_carve_ignores_outside() {
        let mut grid = Grid::new(4, 4);
        grid.carve(10, 10, TileKind::Room);
        assert_eq!(grid.count(TileKind::Room), 0);
    }

    #[test]
    fn test_tags_are_distinct() {
        let mut tags: Vec<char> = TileKind::iter().map(|kind| kind.tag()).collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags, vec!['0', '1', 'a', 'r']);
    }

    #[test]
    fn test_display_format() {
        let mut grid = Grid::new(3, 2);
        grid.carve(0, 0, TileKind::Boundary);
        grid.carve(1, 0, TileKind::Room);
        grid.carve(2, 1, TileKind::Aisle);

        assert_eq!(grid.to_string(), "3 2\n1   0 \n0 0   \n");
    }

    #[test]
    fn test_dump_tags_is_lossless() {
        let mut grid = Grid::new(2, 2);
        grid.carve(1, 0, TileKind::Room);
        grid.carve(0, 1, TileKind::Aisle);

        assert_eq!(grid.dump_tags(), "2 2\n0 r \na 0 \n");
    }

    #[test]
    fn test_rows_are_row_major() {
        let mut grid = Grid::new(3, 2);
        grid.carve(2, 0, TileKind::Room);
        let first: Vec<_> = grid.rows().next().unwrap().collect();
        assert_eq!(first, vec![TileKind::Wall, TileKind::Wall, TileKind::Room]);
    }
}
