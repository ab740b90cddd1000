use std::collections::HashSet;

use allpaths_core::Point;

use crate::direction::Direction;
use crate::path::Path;
use crate::traits::Walkable;

/// Exhaustive simple-path search between two points of a map.
///
/// Every path that starts at `start`, moves one cell at a time through open
/// cells, never steps back onto a cell of its own lineage and ends on
/// `target` is reported. The target itself may hold any symbol.
///
/// The number of simple paths grows exponentially with the open area, so
/// this is meant for maps with a few tens of open cells.
pub struct PathEnumerator<'a, W: Walkable> {
    map: &'a W,
    start: Point,
    target: Point,
}

/// Outcome of stepping onto a candidate cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Out of bounds, a wall, or an ancestor of the current branch.
    Dead,
    Reached,
    Continue,
}

/// State of one in-flight traversal: the cells of the current branch and
/// the moves that led there.
struct Walk {
    lineage: Vec<Point>,
    on_lineage: HashSet<Point>,
    moves: Vec<Direction>,
}

impl Walk {
    fn new(start: Point) -> Self {
        Self {
            lineage: vec![start],
            on_lineage: HashSet::from([start]),
            moves: Vec::new(),
        }
    }

    #[inline]
    fn contains(&self, p: Point) -> bool {
        self.on_lineage.contains(&p)
    }

    fn push(&mut self, p: Point, d: Direction) {
        self.lineage.push(p);
        self.on_lineage.insert(p);
        self.moves.push(d);
    }

    fn pop(&mut self) {
        if let Some(p) = self.lineage.pop() {
            self.on_lineage.remove(&p);
        }
        self.moves.pop();
    }
}

impl<'a, W: Walkable> PathEnumerator<'a, W> {
    /// Prepare a search from `start` to `target` over `map`.
    pub fn new(map: &'a W, start: Point, target: Point) -> Self {
        Self { map, start, target }
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn target(&self) -> Point {
        self.target
    }

    /// Collect every path from start to target.
    ///
    /// Paths come out depth-first with moves tried in [`Direction::ALL`]
    /// order at every branch point, so repeated calls return the same list.
    /// An unreachable target (or `start == target`) gives an empty list.
    pub fn enumerate_paths(&self) -> Vec<Path> {
        let mut paths = Vec::new();
        self.for_each_path(|moves| {
            log::trace!("path #{}: {} moves", paths.len(), moves.len());
            paths.push(Path::from(moves));
        });
        log::debug!(
            "enumerated {} paths from {} to {}",
            paths.len(),
            self.start,
            self.target
        );
        paths
    }

    /// Number of paths from start to target, without storing them.
    pub fn count_paths(&self) -> usize {
        let mut n = 0;
        self.for_each_path(|_| n += 1);
        n
    }

    /// Call `f` with the moves of every path, in [`enumerate_paths`] order.
    ///
    /// The slice is only valid for the duration of the call.
    ///
    /// [`enumerate_paths`]: Self::enumerate_paths
    pub fn for_each_path<F: FnMut(&[Direction])>(&self, mut f: F) {
        if !self.map.in_bounds(self.start) {
            log::debug!("start {} is outside the map", self.start);
            return;
        }
        let mut walk = Walk::new(self.start);
        self.branch(self.start, &mut walk, &mut f);
    }

    fn classify(&self, c: Point, walk: &Walk) -> Step {
        if !self.map.in_bounds(c) || walk.contains(c) {
            Step::Dead
        } else if c == self.target {
            Step::Reached
        } else if self.map.is_open(c) {
            Step::Continue
        } else {
            Step::Dead
        }
    }

    /// Explore the four neighbours of `p`, the tip of `walk`.
    fn branch<F: FnMut(&[Direction])>(&self, p: Point, walk: &mut Walk, f: &mut F) {
        for d in Direction::ALL {
            let c = d.step(p);
            match self.classify(c, walk) {
                Step::Dead => {}
                Step::Reached => {
                    walk.moves.push(d);
                    f(&walk.moves);
                    walk.moves.pop();
                }
                Step::Continue => {
                    walk.push(c, d);
                    self.branch(c, walk, f);
                    walk.pop();
                }
            }
        }
    }
}
