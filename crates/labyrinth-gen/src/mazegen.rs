//! Random grid construction.
//!
//! [`MazeGen`] places the start at the origin, scatters walls over distinct
//! open cells, then puts the exit on a remaining open cell. The result is
//! always a valid [`Grid`]; whether the exit is reachable is left to chance.

use std::fmt;
use std::ops::RangeInclusive;

use labyrinth_core::{CellState, Coordinate, Dims, Grid, GridError};
use rand::{Rng, RngExt};

/// Wall counts used by the reference 10×10 configuration.
pub const DEFAULT_WALLS: RangeInclusive<usize> = 6..=10;

/// Errors that can occur when generating a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    /// Rows or columns are not positive.
    EmptyGrid(Dims),
    /// The grid is too small to hold the start, the exit and the walls.
    TooManyWalls { walls: usize, cells: usize },
    /// The wall-count range is empty.
    EmptyWallRange { min: usize, max: usize },
    /// The assembled grid failed validation.
    Grid(GridError),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid(d) => write!(f, "cannot generate an empty {d} grid"),
            Self::TooManyWalls { walls, cells } => write!(
                f,
                "{walls} walls leave no room for start and exit in {cells} cells"
            ),
            Self::EmptyWallRange { min, max } => {
                write!(f, "wall range {min}..={max} is empty")
            }
            Self::Grid(e) => write!(f, "generated grid is invalid: {e}"),
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for GenError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Grid generator owning its random source.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw a wall count uniformly from `range`.
    pub fn random_wall_count(&mut self, range: RangeInclusive<usize>) -> Result<usize, GenError> {
        if range.is_empty() {
            return Err(GenError::EmptyWallRange {
                min: *range.start(),
                max: *range.end(),
            });
        }
        Ok(self.rng.random_range(range))
    }

    /// Build a `rows`×`cols` grid with the start at (0, 0), exactly `walls`
    /// walls, and the exit on a random open cell. No two features share a
    /// cell.
    pub fn build(&mut self, rows: i32, cols: i32, walls: usize) -> Result<Grid, GenError> {
        let dims = Dims::new(rows, cols);
        if dims.is_empty() {
            return Err(GenError::EmptyGrid(dims));
        }
        let total = dims.len();
        if walls.checked_add(2).is_none_or(|n| n > total) {
            return Err(GenError::TooManyWalls {
                walls,
                cells: total,
            });
        }

        let mut cells = vec![CellState::OpenSpace; total];
        let start = Coordinate::ORIGIN;
        if let Some(i) = dims.index(start) {
            cells[i] = CellState::Start;
        }

        // Indices of cells still open; drawing from it and swap-removing
        // keeps every placement on a distinct open cell.
        let mut open: Vec<usize> = (0..total)
            .filter(|&i| cells[i] == CellState::OpenSpace)
            .collect();

        for _ in 0..walls {
            let i = open.swap_remove(self.rng.random_range(0..open.len()));
            cells[i] = CellState::Wall;
        }
        let exit = open.swap_remove(self.rng.random_range(0..open.len()));
        cells[exit] = CellState::Exit;

        log::debug!(
            "mazegen: {dims} grid, {walls} walls, exit at {}",
            dims.coordinate(exit)
        );
        Ok(Grid::from_cells(rows, cols, cells)?)
    }

    /// Build a grid with a wall count drawn from `walls`.
    pub fn build_random(
        &mut self,
        rows: i32,
        cols: i32,
        walls: RangeInclusive<usize>,
    ) -> Result<Grid, GenError> {
        let n = self.random_wall_count(walls)?;
        self.build(rows, cols, n)
    }
}
