use std::fmt;
use std::ops::Deref;

use allpaths_core::Point;

use crate::direction::Direction;

/// A sequence of single-step moves, replayed from some start point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Path {
    steps: Vec<Direction>,
}

impl Path {
    /// Create an empty path.
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// The moves, in order.
    #[inline]
    pub fn steps(&self) -> &[Direction] {
        &self.steps
    }

    /// Every point reached after each move, starting the replay at `start`.
    ///
    /// `start` itself is not yielded.
    pub fn points(&self, start: Point) -> impl Iterator<Item = Point> + '_ {
        self.steps.iter().scan(start, |p, d| {
            *p = d.step(*p);
            Some(*p)
        })
    }

    /// The point where the path ends when replayed from `start`.
    pub fn end(&self, start: Point) -> Point {
        self.points(start).last().unwrap_or(start)
    }
}

impl Deref for Path {
    type Target = [Direction];

    #[inline]
    fn deref(&self) -> &[Direction] {
        &self.steps
    }
}

impl From<Vec<Direction>> for Path {
    fn from(steps: Vec<Direction>) -> Self {
        Self { steps }
    }
}

impl From<&[Direction]> for Path {
    fn from(steps: &[Direction]) -> Self {
        Self {
            steps: steps.to_vec(),
        }
    }
}

impl FromIterator<Direction> for Path {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Direction;
    type IntoIter = std::slice::Iter<'a, Direction>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl fmt::Display for Path {
    /// Writes the arrow glyph of every move, e.g. `→→↓`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.steps {
            write!(f, "{}", d.glyph())?;
        }
        Ok(())
    }
}
