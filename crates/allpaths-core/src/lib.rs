//! **allpaths-core** — geometry and grid types for exhaustive path search.
//!
//! This crate provides the immutable [`Grid`] of cell symbols that the
//! enumeration engine in `allpaths-paths` walks over, plus the [`Point`] and
//! [`Range`] primitives used to address it.

pub mod geom;
pub mod grid;

pub use geom::{Point, Range};
pub use grid::{CellState, Grid, GridError, OPEN};
