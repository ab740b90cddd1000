//! Exhaustive simple-path enumeration on 2D grids.
//!
//! [`PathEnumerator`] walks every branch from a start cell depth-first,
//! trying [`Direction::ALL`] in order, and reports each sequence of moves
//! that lands on the target without revisiting a cell of its own lineage.
//! [`fastest_paths`] then picks the minimal-length subset.
//!
//! ```
//! use allpaths_core::{Grid, Point};
//! use allpaths_paths::{fastest_paths, PathEnumerator};
//!
//! let map = Grid::filled(3, 3, ' ');
//! let paths = PathEnumerator::new(&map, Point::new(0, 0), Point::new(2, 2)).enumerate_paths();
//! assert_eq!(paths.len(), 12);
//! assert_eq!(fastest_paths(&paths).len(), 6);
//! ```
//!
//! The map is seen through the [`Walkable`] trait, implemented for
//! [`allpaths_core::Grid`].

mod direction;
mod enumerator;
mod fastest;
mod path;
mod traits;

pub use direction::Direction;
pub use enumerator::PathEnumerator;
pub use fastest::{fastest_paths, shortest_len};
pub use path::Path;
pub use traits::Walkable;
