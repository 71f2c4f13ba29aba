use std::fmt::Write;

use crate::simulation::{Cell, Grid};

/// Glyph for one cell: sources show their emission, passive cells their
/// level, opaque cells an `x`
pub fn glyph(cell: Cell) -> String {
    if cell.is_opaque() {
        "x".to_string()
    } else if cell.is_source() {
        format!("*{}", cell.emission)
    } else {
        cell.level.to_string()
    }
}

/// Render the grid as text, one line per row (y grows downward)
pub fn render_text(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.cell_count() * 4);
    for (point, cell) in grid.cells() {
        // writing into a String cannot fail
        let _ = write!(out, "{:>4}", glyph(cell));
        if point.x as usize + 1 == grid.side() {
            out.push('\n');
        }
    }
    out
}
