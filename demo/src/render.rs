//! Text rendering of maps and solutions.
//!
//! A rendered map has the column indices on top, a `=` border above and
//! below, and each row prefixed with its index and wrapped in `|`:
//!
//! ```text
//!     0 1 2
//!   = = = = =
//! 0 | A →   |
//! 1 | # ↓ B |
//!   = = = = =
//! ```

use crossterm::style::Stylize;

use allpaths_core::{Grid, Point};
use allpaths_paths::{Direction, Path};

/// Marker drawn on the start cell.
pub const START: char = 'A';
/// Marker drawn on the target cell.
pub const TARGET: char = 'B';

/// Copy the grid and draw `path` on it, replayed from `start`.
///
/// The start gets [`START`], every cell the path enters gets the glyph of
/// the move that entered it, and the last cell gets [`TARGET`].
pub fn overlay_path(grid: &Grid, start: Point, path: &Path) -> Vec<Vec<char>> {
    let mut rows = grid.to_rows();
    let mut put = |p: Point, ch: char| {
        if grid.is_valid(p) {
            rows[p.y as usize][p.x as usize] = ch;
        }
    };
    put(start, START);
    for (d, p) in path.iter().zip(path.points(start)) {
        put(p, d.glyph());
    }
    put(path.end(start), TARGET);
    rows
}

/// Render rows of symbols with indices and borders.
///
/// With `color` set, path glyphs and the start/target markers are styled
/// with ANSI escapes.
pub fn render_rows(rows: &[Vec<char>], color: bool) -> String {
    let width = rows.first().map_or(0, Vec::len);
    let index_width = rows.len().saturating_sub(1).to_string().len();

    let mut out = String::new();
    out.push_str(&" ".repeat(index_width + 3));
    let header: Vec<String> = (0..width).map(|x| (x % 10).to_string()).collect();
    out.push_str(&header.join(" "));
    out.push('\n');

    let edge = format!("{} {}", " ".repeat(index_width), "= ".repeat(width + 2));
    let edge = edge.trim_end();
    out.push_str(edge);
    out.push('\n');

    for (y, row) in rows.iter().enumerate() {
        out.push_str(&format!("{y:<index_width$} |"));
        for &ch in row {
            out.push(' ');
            out.push_str(&paint(ch, color));
        }
        out.push_str(" |\n");
    }

    out.push_str(edge);
    out.push('\n');
    out
}

/// Render a grid as-is.
pub fn render_grid(grid: &Grid, color: bool) -> String {
    render_rows(&grid.to_rows(), color)
}

fn paint(ch: char, color: bool) -> String {
    if !color {
        return ch.to_string();
    }
    match ch {
        START | TARGET => ch.bold().green().to_string(),
        _ if Direction::ALL.iter().any(|d| d.glyph() == ch) => ch.cyan().to_string(),
        _ => ch.to_string(),
    }
}
