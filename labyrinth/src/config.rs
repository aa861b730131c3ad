//! Command-line configuration.

use std::fmt;
use std::ops::RangeInclusive;
use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments as parsed by clap.
#[derive(Debug, Parser)]
#[command(
    name = "labyrinth",
    version,
    about = "Generate a walled grid, find its shortest path and list every path to the exit"
)]
pub struct Args {
    /// Number of grid rows.
    #[arg(long, default_value_t = 10)]
    pub rows: i32,

    /// Number of grid columns.
    #[arg(long, default_value_t = 10)]
    pub cols: i32,

    /// Exact number of walls (overrides --min-walls/--max-walls).
    #[arg(long)]
    pub walls: Option<usize>,

    /// Smallest random wall count.
    #[arg(long, default_value_t = 6)]
    pub min_walls: usize,

    /// Largest random wall count.
    #[arg(long, default_value_t = 10)]
    pub max_walls: usize,

    /// Seed for the grid generator; random if omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Load the grid from a text file instead of generating one
    /// ('S' start, 'E' exit, '#' or 'X' wall, '.' or '_' open).
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with_all = ["rows", "cols", "walls", "min_walls", "max_walls", "seed"]
    )]
    pub grid_file: Option<PathBuf>,

    /// Maximum number of paths to list; 0 lists all.
    #[arg(long, default_value_t = 20)]
    pub limit: usize,

    /// Print the grid and both results as JSON.
    #[arg(long)]
    pub json: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Where the grid comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridSource {
    Random {
        rows: i32,
        cols: i32,
        walls: RangeInclusive<usize>,
        seed: Option<u64>,
    },
    File(PathBuf),
}

/// How results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Text { color: bool },
    Json,
}

/// Validated run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: GridSource,
    /// `None` lists every path.
    pub limit: Option<usize>,
    pub output: Output,
}

/// Errors in the command-line configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NonPositiveSize { rows: i32, cols: i32 },
    WallRange { min: usize, max: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveSize { rows, cols } => {
                write!(f, "grid size must be positive, got {rows}x{cols}")
            }
            Self::WallRange { min, max } => {
                write!(f, "--min-walls ({min}) is greater than --max-walls ({max})")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, ConfigError> {
        let source = match args.grid_file {
            Some(path) => GridSource::File(path),
            None => {
                if args.rows <= 0 || args.cols <= 0 {
                    return Err(ConfigError::NonPositiveSize {
                        rows: args.rows,
                        cols: args.cols,
                    });
                }
                let walls = match args.walls {
                    Some(n) => n..=n,
                    None if args.min_walls > args.max_walls => {
                        return Err(ConfigError::WallRange {
                            min: args.min_walls,
                            max: args.max_walls,
                        });
                    }
                    None => args.min_walls..=args.max_walls,
                };
                GridSource::Random {
                    rows: args.rows,
                    cols: args.cols,
                    walls,
                    seed: args.seed,
                }
            }
        };

        let output = if args.json {
            Output::Json
        } else {
            Output::Text {
                color: !args.no_color,
            }
        };

        Ok(Config {
            source,
            limit: (args.limit > 0).then_some(args.limit),
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Config, ConfigError> {
        let argv = std::iter::once("labyrinth").chain(argv.iter().copied());
        let args = Args::try_parse_from(argv).unwrap();
        Config::try_from(args)
    }

    #[test]
    fn defaults_match_reference_configuration() {
        let cfg = parse(&[]).unwrap();
        assert_eq!(
            cfg.source,
            GridSource::Random {
                rows: 10,
                cols: 10,
                walls: 6..=10,
                seed: None
            }
        );
        assert_eq!(cfg.limit, Some(20));
        assert_eq!(cfg.output, Output::Text { color: true });
    }

    #[test]
    fn exact_walls_and_seed() {
        let cfg = parse(&["--walls", "3", "--seed", "9", "--rows", "4", "--cols", "5"]).unwrap();
        assert_eq!(
            cfg.source,
            GridSource::Random {
                rows: 4,
                cols: 5,
                walls: 3..=3,
                seed: Some(9)
            }
        );
    }

    #[test]
    fn grid_file_and_output_flags() {
        let cfg = parse(&["--grid-file", "maze.txt", "--json", "--limit", "0"]).unwrap();
        assert_eq!(cfg.source, GridSource::File(PathBuf::from("maze.txt")));
        assert_eq!(cfg.output, Output::Json);
        assert_eq!(cfg.limit, None);

        let cfg = parse(&["--no-color"]).unwrap();
        assert_eq!(cfg.output, Output::Text { color: false });
    }

    #[test]
    fn grid_file_conflicts_with_generation_flags() {
        let r = Args::try_parse_from(["labyrinth", "--grid-file", "m.txt", "--seed", "1"]);
        assert!(r.is_err());
    }

    #[test]
    fn invalid_values_rejected() {
        assert_eq!(
            parse(&["--rows", "0"]),
            Err(ConfigError::NonPositiveSize { rows: 0, cols: 10 })
        );
        assert_eq!(
            parse(&["--min-walls", "8", "--max-walls", "2"]),
            Err(ConfigError::WallRange { min: 8, max: 2 })
        );
    }
}
