//! One end-to-end run: obtain a grid, then search it both ways.

use std::fs;

use labyrinth_core::Grid;
use labyrinth_gen::MazeGen;
use labyrinth_paths::{Path, all_paths_to_exit, shortest_path_to_exit};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::config::GridSource;

/// The grid and both search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Seed the grid was generated from; `None` for grids loaded from file.
    pub seed: Option<u64>,
    pub grid: Grid,
    pub shortest: Option<Path>,
    pub paths: Vec<Path>,
}

/// Build or load the grid described by `source`.
///
/// Returns the grid and the seed used, so a random run can be replayed.
pub fn load_grid(source: &GridSource) -> Result<(Grid, Option<u64>), Box<dyn std::error::Error>> {
    match source {
        GridSource::Random {
            rows,
            cols,
            walls,
            seed,
        } => {
            let seed = (*seed).unwrap_or_else(rand::random);
            log::info!("generating {rows}x{cols} grid with seed {seed}");
            let mut mg = MazeGen::new(StdRng::seed_from_u64(seed));
            let grid = mg.build_random(*rows, *cols, walls.clone())?;
            Ok((grid, Some(seed)))
        }
        GridSource::File(path) => {
            log::info!("loading grid from {}", path.display());
            let text = fs::read_to_string(path)?;
            Ok((Grid::parse(&text)?, None))
        }
    }
}

/// Run both searches between the grid's start and exit.
pub fn search(grid: Grid, seed: Option<u64>) -> Result<Outcome, Box<dyn std::error::Error>> {
    let shortest = shortest_path_to_exit(&grid)?;
    let paths = all_paths_to_exit(&grid)?;
    match &shortest {
        Some(p) => log::info!("shortest path: {} steps", p.steps()),
        None => log::warn!("exit {} is unreachable from {}", grid.exit(), grid.start()),
    }
    log::info!("{} distinct paths found", paths.len());
    Ok(Outcome {
        seed,
        grid,
        shortest,
        paths,
    })
}
