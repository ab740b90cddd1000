//! The text report printed by the binary: the original map, then every
//! solution drawn on a copy of it.

use allpaths_core::{Grid, Point};
use allpaths_paths::{Path, fastest_paths};

use crate::render::{overlay_path, render_grid, render_rows};

/// How much of the result to show, and how.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Skip solutions that are not among the shortest.
    pub fastest_only: bool,
    /// Style glyphs and markers with ANSI colors.
    pub color: bool,
}

/// Build the report for `paths` found on `grid` from `start`.
///
/// Solutions keep their index in `paths` even when some are skipped.
pub fn report(grid: &Grid, start: Point, paths: &[Path], opts: ReportOptions) -> String {
    let mut out = String::new();
    out.push_str("ORIGINAL\n");
    out.push_str(&render_grid(grid, opts.color));
    out.push('\n');

    let fastest = fastest_paths(paths);
    for (i, path) in paths.iter().enumerate() {
        let is_fastest = fastest.iter().any(|&f| std::ptr::eq(f, path));
        if opts.fastest_only && !is_fastest {
            continue;
        }
        out.push_str(&format!("SOLUTION{i}"));
        if is_fastest {
            out.push_str(" (one of faster)");
        }
        out.push('\n');
        out.push_str(&render_rows(&overlay_path(grid, start, path), opts.color));
        out.push('\n');
    }

    if let Some(first) = fastest.first() {
        out.push_str(&format!(
            "{} paths, {} of length {}\n",
            paths.len(),
            fastest.len(),
            first.len()
        ));
    }
    out
}
