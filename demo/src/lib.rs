//! Terminal front end for `allpaths`: map loading, rendering and the
//! report printed by the `allpaths` binary.

pub mod map;
pub mod render;
pub mod report;
