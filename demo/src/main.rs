//! Print every path between two cells of a map, marking the shortest ones.
//!
//! Run: cargo run --bin allpaths -- --help

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::{RngExt, SeedableRng};
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use allpaths_core::{Grid, Point};
use allpaths_demo::map::{DEMO_MAP, default_endpoints, parse_map, random_map};
use allpaths_demo::report::{ReportOptions, report};
use allpaths_paths::PathEnumerator;

#[derive(Parser, Debug)]
#[command(
    name = "allpaths",
    version,
    about = "Enumerate every simple path between two cells of a grid map"
)]
struct Cli {
    /// Map file: one row per line, all lines the same width. `A` and `B`
    /// mark the start and target. Defaults to a built-in 5x5 map.
    #[arg(long, conflicts_with = "random")]
    map: Option<PathBuf>,

    /// Generate a random WIDTHxHEIGHT map instead of reading one
    #[arg(long, value_name = "WxH", value_parser = parse_size)]
    random: Option<Point>,

    /// Wall probability, in percent, for random maps
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u8).range(0..=100))]
    density: u8,

    /// Seed for random maps
    #[arg(long)]
    seed: Option<u64>,

    /// Start cell as X,Y (overrides the `A` marker)
    #[arg(long, value_parser = parse_point)]
    start: Option<Point>,

    /// Target cell as X,Y (overrides the `B` marker)
    #[arg(long, value_parser = parse_point)]
    target: Option<Point>,

    /// Symbol marking open cells
    #[arg(long, default_value_t = ' ')]
    open: char,

    /// Only print the shortest solutions
    #[arg(long)]
    fastest_only: bool,

    /// Color path glyphs and markers
    #[arg(long)]
    color: bool,

    /// Refuse maps with more open cells than this
    #[arg(long, default_value_t = 64)]
    max_open: usize,
}

fn parse_point(s: &str) -> Result<Point, String> {
    parse_pair(s, ',').map_err(|_| format!("expected X,Y, got {s:?}"))
}

/// Largest `--random` map, in cells, checked before the map is generated.
const MAX_RANDOM_AREA: i64 = 4096;

fn parse_size(s: &str) -> Result<Point, String> {
    match parse_pair(s, 'x') {
        Ok(p) if p.x > 0 && p.y > 0 => {
            let area = i64::from(p.x) * i64::from(p.y);
            if area > MAX_RANDOM_AREA {
                return Err(format!(
                    "{s:?} has {area} cells, at most {MAX_RANDOM_AREA} are allowed"
                ));
            }
            Ok(p)
        }
        _ => Err(format!("expected WIDTHxHEIGHT, got {s:?}")),
    }
}

fn parse_pair(s: &str, sep: char) -> Result<Point, std::num::ParseIntError> {
    let (x, y) = s.split_once(sep).unwrap_or((s, ""));
    Ok(Point::new(x.trim().parse()?, y.trim().parse()?))
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_grid(cli: &Cli) -> Result<Grid> {
    if let Some(path) = &cli.map {
        let text =
            std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        return parse_map(&text).with_context(|| format!("parse {}", path.display()));
    }
    if let Some(size) = cli.random {
        let seed = cli
            .seed
            .unwrap_or_else(|| rand::rng().random_range(0..u64::MAX));
        log::info!("random map seed: {seed}");
        let keep = [
            cli.start.unwrap_or(Point::ZERO),
            cli.target.unwrap_or(size.shift(-1, -1)),
        ];
        let mut rng = StdRng::seed_from_u64(seed);
        return Ok(random_map(size.x, size.y, cli.density, &keep, &mut rng));
    }
    Ok(parse_map(DEMO_MAP)?)
}

/// Returns whether at least one path was found.
fn run(cli: &Cli) -> Result<bool> {
    let grid = load_grid(cli)?.with_open(cli.open);
    let (marked_start, marked_target) = default_endpoints(&grid)?;
    let start = cli.start.unwrap_or(marked_start);
    let target = cli.target.unwrap_or(marked_target);

    for (name, p) in [("start", start), ("target", target)] {
        if !grid.is_valid(p) {
            bail!(
                "{name} {p} is outside the {}x{} map",
                grid.width(),
                grid.height()
            );
        }
    }
    let open = grid.open_count();
    if open > cli.max_open {
        bail!(
            "map has {open} open cells, more than --max-open {}; \
             the number of paths grows exponentially with the open area",
            cli.max_open
        );
    }
    log::info!(
        "searching {}x{} map ({open} open cells) from {start} to {target}",
        grid.width(),
        grid.height()
    );

    let paths = PathEnumerator::new(&grid, start, target).enumerate_paths();
    let opts = ReportOptions {
        fastest_only: cli.fastest_only,
        color: cli.color,
    };
    print!("{}", report(&grid, start, &paths, opts));
    Ok(!paths.is_empty())
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => {
            eprintln!("UNSOLVABLE");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn point_and_size_parsers() {
        assert_eq!(parse_point("3,4"), Ok(Point::new(3, 4)));
        assert_eq!(parse_point(" 0 , 2"), Ok(Point::new(0, 2)));
        assert!(parse_point("3").is_err());
        assert_eq!(parse_size("6x4"), Ok(Point::new(6, 4)));
        assert!(parse_size("0x4").is_err());
        assert!(parse_size("6,4").is_err());
    }

    #[test]
    fn rejects_oversized_random_maps() {
        assert_eq!(parse_size("64x64"), Ok(Point::new(64, 64)));
        assert!(parse_size("65x64").is_err());
        assert!(parse_size("50000x50000").is_err());
        assert!(parse_size("2147483647x2147483647").is_err());
        assert!(Cli::try_parse_from(["allpaths", "--random", "50000x50000"]).is_err());
    }

    #[test]
    fn defaults_run_the_demo_map() {
        let cli = Cli::parse_from(["allpaths"]);
        assert!(run(&cli).unwrap());
    }

    #[test]
    fn rejects_out_of_bounds_start() {
        let cli = Cli::parse_from(["allpaths", "--start", "9,9"]);
        let err = run(&cli).unwrap_err();
        assert!(err.to_string().contains("outside the 5x5 map"));
    }

    #[test]
    fn enforces_open_cell_limit() {
        let cli = Cli::parse_from(["allpaths", "--max-open", "10"]);
        assert!(run(&cli).is_err());
    }

    #[test]
    fn seeded_random_map_is_reproducible() {
        let args = ["allpaths", "--random", "4x3", "--seed", "7", "--density", "20"];
        let a = load_grid(&Cli::parse_from(args)).unwrap();
        let b = load_grid(&Cli::parse_from(args)).unwrap();
        assert_eq!(a, b);
        assert!(a.is_open(Point::ZERO));
        assert!(a.is_open(Point::new(3, 2)));
    }
}
