//! Loading and generating maps for the demo.
//!
//! A text map is one row per line. Lines keep their leading and trailing
//! spaces (a space is an open cell), so only trailing blank lines are
//! dropped. The letters `A` and `B` may be used to mark the start and
//! target; they stay in the grid, where they are impassable like any other
//! non-open symbol.

use rand::{Rng, RngExt};
use thiserror::Error;

use allpaths_core::{Grid, GridError, Point};

use crate::render::{START, TARGET};

/// The built-in 5×5 demo map, with `A` in the top-left corner and `B` in the
/// bottom-right one.
pub const DEMO_MAP: &str = include_str!("../maps/demo.txt");

#[derive(Debug, Error)]
pub enum MapError {
    #[error("map is empty")]
    Empty,
    #[error("map is not rectangular: {0}")]
    Grid(#[from] GridError),
    #[error("marker {marker:?} appears more than once")]
    DuplicateMarker { marker: char },
}

/// Parse a text map.
pub fn parse_map(text: &str) -> Result<Grid, MapError> {
    let mut lines: Vec<&str> = text.lines().collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        return Err(MapError::Empty);
    }
    let rows = lines.iter().map(|l| l.chars().collect::<Vec<_>>());
    let grid = Grid::from_rows(rows)?;
    if grid.bounds().is_empty() {
        return Err(MapError::Empty);
    }
    Ok(grid)
}

/// Position of `marker` in the grid, if it appears exactly once.
pub fn find_marker(grid: &Grid, marker: char) -> Result<Option<Point>, MapError> {
    let mut found = grid.iter().filter(|&(_, ch)| ch == marker).map(|(p, _)| p);
    let first = found.next();
    if found.next().is_some() {
        return Err(MapError::DuplicateMarker { marker });
    }
    Ok(first)
}

/// Start and target read from the `A`/`B` markers, falling back to the
/// top-left and bottom-right corners.
pub fn default_endpoints(grid: &Grid) -> Result<(Point, Point), MapError> {
    let start = find_marker(grid, START)?.unwrap_or(Point::ZERO);
    let target = find_marker(grid, TARGET)?
        .unwrap_or_else(|| Point::new(grid.width() - 1, grid.height() - 1));
    Ok((start, target))
}

/// Generate a `width`×`height` map where each cell is a wall with
/// probability `density` percent. `keep_open` cells are always open.
pub fn random_map(
    width: i32,
    height: i32,
    density: u8,
    keep_open: &[Point],
    rng: &mut impl Rng,
) -> Grid {
    Grid::from_fn(width, height, |p| {
        let wall = rng.random_range(0..100u8) < density;
        if wall && !keep_open.contains(&p) {
            '#'
        } else {
            ' '
        }
    })
}
