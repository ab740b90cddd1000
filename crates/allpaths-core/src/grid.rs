//! The [`Grid`] type — an immutable rectangular table of cell symbols.
//!
//! Exactly one symbol denotes an open cell (`' '` unless changed with
//! [`with_open`](Grid::with_open)); every other symbol is impassable.

use thiserror::Error;

use crate::geom::{Point, Range};

/// Symbol used for open cells unless a grid overrides it.
pub const OPEN: char = ' ';

/// Errors raised by grid construction and lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A lookup addressed a coordinate outside the grid.
    #[error("coordinate {pos} is outside the {width}x{height} grid")]
    OutOfBounds { pos: Point, width: i32, height: i32 },
    /// Rows passed to [`Grid::from_rows`] have different lengths.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Whether a cell can be walked through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    Open,
    Wall,
}

/// A fixed-size grid of `char` symbols, stored row-major.
///
/// The grid never changes after construction; callers that want to draw on
/// it take an owned copy with [`to_rows`](Grid::to_rows).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<char>,
    bounds: Range,
    open: char,
}

impl Grid {
    /// Create a `width`×`height` grid filled with `ch`.
    pub fn filled(width: i32, height: i32, ch: char) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            cells: vec![ch; bounds.len()],
            bounds,
            open: OPEN,
        }
    }

    /// Create a `width`×`height` grid whose symbols come from `f`, called
    /// once per cell in row-major order.
    pub fn from_fn(width: i32, height: i32, mut f: impl FnMut(Point) -> char) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            cells: bounds.iter().map(&mut f).collect(),
            bounds,
            open: OPEN,
        }
    }

    /// Build a grid from rows of symbols.
    ///
    /// Every row must have the same length as the first one. An empty list
    /// of rows produces an empty grid.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, GridError>
    where
        R: AsRef<[char]>,
    {
        let mut cells = Vec::new();
        let mut width: Option<usize> = None;
        let mut height = 0usize;

        for (i, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            match width {
                None => width = Some(row.len()),
                Some(w) if w != row.len() => {
                    return Err(GridError::Ragged {
                        row: i,
                        expected: w,
                        found: row.len(),
                    });
                }
                Some(_) => {}
            }
            cells.extend_from_slice(row);
            height += 1;
        }

        let width = width.unwrap_or(0);
        // A list of empty rows has no cells at all.
        let height = if width == 0 { 0 } else { height };
        Ok(Self {
            cells,
            bounds: Range::new(0, 0, width as i32, height as i32),
            open: OPEN,
        })
    }

    /// Use `ch` as the open symbol (builder).
    #[inline]
    pub fn with_open(mut self, ch: char) -> Self {
        self.open = ch;
        self
    }

    /// The symbol that marks open cells.
    #[inline]
    pub fn open_symbol(&self) -> char {
        self.open
    }

    /// The bounding range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` addresses a cell of this grid.
    #[inline]
    pub fn is_valid(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y as usize) * (self.width() as usize) + (p.x as usize)
    }

    /// The symbol stored at `p` (row `p.y`, column `p.x`).
    pub fn at(&self, p: Point) -> Result<char, GridError> {
        if !self.is_valid(p) {
            return Err(GridError::OutOfBounds {
                pos: p,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(self.cells[self.index(p)])
    }

    /// Classify the cell at `p`. Coordinates outside the grid are walls.
    pub fn state(&self, p: Point) -> CellState {
        match self.at(p) {
            Ok(ch) if ch == self.open => CellState::Open,
            _ => CellState::Wall,
        }
    }

    /// Whether `p` is inside the grid and holds the open symbol.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.state(p) == CellState::Open
    }

    /// Number of open cells.
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|&&ch| ch == self.open).count()
    }

    /// Iterator over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // chunks() panics on a zero chunk size.
        let w = (self.width() as usize).max(1);
        self.cells.chunks(w)
    }

    /// Owned copy of the rows, for painting overlays.
    pub fn to_rows(&self) -> Vec<Vec<char>> {
        self.rows().map(<[char]>::to_vec).collect()
    }

    /// Row-major iterator over `(Point, char)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, char)> + '_ {
        self.bounds.iter().map(move |p| (p, self.cells[self.index(p)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::from_rows([
            vec![' ', ' ', '#'],
            vec!['#', ' ', ' '],
        ])
        .unwrap()
    }

    #[test]
    fn from_rows_dimensions() {
        let g = sample();
        assert_eq!(g.size(), Point::new(3, 2));
        assert_eq!(g.width(), 3);
        assert_eq!(g.height(), 2);
        assert_eq!(g.open_symbol(), ' ');
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let err = Grid::from_rows([vec![' ', ' '], vec![' ']]).unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            }
        );
        assert_eq!(err.to_string(), "row 1 has 1 cells, expected 2");
    }

    #[test]
    fn from_rows_empty() {
        let g = Grid::from_rows(Vec::<Vec<char>>::new()).unwrap();
        assert_eq!(g.size(), Point::ZERO);
        assert!(!g.is_valid(Point::ZERO));
        assert_eq!(g.rows().count(), 0);
    }

    #[test]
    fn validity_bounds() {
        let g = sample();
        assert!(g.is_valid(Point::new(0, 0)));
        assert!(g.is_valid(Point::new(2, 1)));
        assert!(!g.is_valid(Point::new(3, 0)));
        assert!(!g.is_valid(Point::new(0, 2)));
        assert!(!g.is_valid(Point::new(-1, 0)));
        assert!(!g.is_valid(Point::new(0, -1)));
    }

    #[test]
    fn at_reads_row_then_column() {
        let g = sample();
        assert_eq!(g.at(Point::new(2, 0)), Ok('#'));
        assert_eq!(g.at(Point::new(0, 1)), Ok('#'));
        assert_eq!(g.at(Point::new(1, 1)), Ok(' '));
    }

    #[test]
    fn at_out_of_bounds() {
        let g = sample();
        let err = g.at(Point::new(5, 0)).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                pos: Point::new(5, 0),
                width: 3,
                height: 2
            }
        );
        assert_eq!(err.to_string(), "coordinate (5, 0) is outside the 3x2 grid");
    }

    #[test]
    fn open_and_state() {
        let g = sample();
        assert!(g.is_open(Point::new(0, 0)));
        assert!(!g.is_open(Point::new(2, 0)));
        assert!(!g.is_open(Point::new(-1, 0)));
        assert_eq!(g.state(Point::new(0, 1)), CellState::Wall);
        assert_eq!(g.state(Point::new(9, 9)), CellState::Wall);
        assert_eq!(g.open_count(), 4);
    }

    #[test]
    fn custom_open_symbol() {
        let g = Grid::from_rows(["..#".chars().collect::<Vec<_>>()])
            .unwrap()
            .with_open('.');
        assert!(g.is_open(Point::new(1, 0)));
        assert!(!g.is_open(Point::new(2, 0)));
        assert_eq!(g.open_count(), 2);
    }

    #[test]
    fn filled_grid() {
        let g = Grid::filled(4, 3, '#');
        assert_eq!(g.size(), Point::new(4, 3));
        assert_eq!(g.open_count(), 0);
        assert!(g.iter().all(|(_, ch)| ch == '#'));
    }

    #[test]
    fn from_fn_row_major() {
        let g = Grid::from_fn(3, 2, |p| if p.x == p.y { '#' } else { ' ' });
        assert_eq!(g.to_rows(), vec![vec!['#', ' ', ' '], vec![' ', '#', ' ']]);
        let mut order = Vec::new();
        Grid::from_fn(2, 2, |p| {
            order.push(p);
            ' '
        });
        assert_eq!(
            order,
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(0, 1), Point::new(1, 1)]
        );
    }

    #[test]
    fn rows_and_copy() {
        let g = sample();
        let rows: Vec<&[char]> = g.rows().collect();
        assert_eq!(rows[1], &['#', ' ', ' ']);
        let mut copy = g.to_rows();
        copy[0][0] = 'A';
        assert_eq!(copy[0][0], 'A');
        // The grid itself is untouched.
        assert_eq!(g.at(Point::ZERO), Ok(' '));
    }

    #[test]
    fn iter_pairs() {
        let g = sample();
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 6);
        assert_eq!(items[2], (Point::new(2, 0), '#'));
        assert_eq!(items[3], (Point::new(0, 1), '#'));
    }
}
