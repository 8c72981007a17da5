//! Coloured terminal rendering of a grid

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor};
use dg_core::{GenerationParams, Grid, TileKind};

/// Background colour for a tile, two cells wide on screen
pub fn tile_color(kind: TileKind) -> Color {
    match kind {
        TileKind::Wall | TileKind::Boundary => Color::Black,
        TileKind::Room => Color::DarkBlue,
        TileKind::Aisle => Color::DarkMagenta,
    }
}

pub fn header(params: &GenerationParams) -> String {
    format!("{}x{}, max rooms={}", params.width, params.height, params.rooms)
}

/// Draw the grid row by row. Colour is reset at the end of every line so a
/// narrower terminal does not smear the background.
pub fn render<W: Write>(out: &mut W, grid: &Grid, params: &GenerationParams) -> io::Result<()> {
    queue!(out, Print(header(params)), Print("\n"))?;
    for row in grid.rows() {
        for tile in row {
            queue!(out, SetBackgroundColor(tile_color(tile)), Print("  "))?;
        }
        queue!(out, ResetColor, Print("\n"))?;
    }
    out.flush()
}

/// Plain text dump
pub fn dump<W: Write>(out: &mut W, grid: &Grid) -> io::Result<()> {
    write!(out, "{grid}")?;
    out.flush()
}
