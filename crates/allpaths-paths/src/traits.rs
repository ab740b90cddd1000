use allpaths_core::{Grid, Point};

/// What the enumerator needs to know about a map.
pub trait Walkable {
    /// Whether `p` addresses a cell of the map.
    fn in_bounds(&self, p: Point) -> bool;

    /// Whether a walk may pass through `p`. Only called for in-bounds points.
    fn is_open(&self, p: Point) -> bool;
}

impl Walkable for Grid {
    #[inline]
    fn in_bounds(&self, p: Point) -> bool {
        self.is_valid(p)
    }

    #[inline]
    fn is_open(&self, p: Point) -> bool {
        Grid::is_open(self, p)
    }
}
