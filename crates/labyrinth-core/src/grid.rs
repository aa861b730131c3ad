//! The cell-state grid and its adjacency rule.
//!
//! A [`Grid`] is a fixed-size, row-major array of [`CellState`] values with
//! exactly one [`CellState::Start`] and exactly one [`CellState::Exit`].
//! Grids are validated when built and read-only afterwards.

use std::fmt;

use crate::geom::{Coordinate, Dims, DimsIter};

// ---------------------------------------------------------------------------
// CellState
// ---------------------------------------------------------------------------

/// What occupies a grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    OpenSpace,
    Wall,
    Exit,
    Start,
}

impl CellState {
    /// Whether a search may step onto this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }

    /// The character used for this state in the text form.
    pub const fn to_char(self) -> char {
        match self {
            Self::OpenSpace => '.',
            Self::Wall => '#',
            Self::Exit => 'E',
            Self::Start => 'S',
        }
    }

    /// Parse a text-form character. `_` and `X` are accepted as aliases for
    /// open space and walls.
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' | '_' => Some(Self::OpenSpace),
            '#' | 'X' => Some(Self::Wall),
            'E' => Some(Self::Exit),
            'S' => Some(Self::Start),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors raised by grid construction and grid access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid has no rows or no columns.
    EmptyGrid,
    /// The cell count does not match the dimensions, or text lines have
    /// inconsistent widths.
    InconsistentSize { dims: Dims, cells: usize },
    /// A character in the text form is not a known cell state.
    InvalidRune { ch: char, pos: Coordinate },
    MissingStart,
    DuplicateStart(Coordinate),
    MissingExit,
    DuplicateExit(Coordinate),
    /// A coordinate lies outside the grid.
    OutOfBounds { pos: Coordinate, dims: Dims },
    /// A search endpoint is a wall.
    Blocked(Coordinate),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid has no cells"),
            Self::InconsistentSize { dims, cells } => {
                write!(f, "grid of size {dims} cannot hold {cells} cells")
            }
            Self::InvalidRune { ch, pos } => {
                write!(f, "grid contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingStart => write!(f, "grid has no start cell"),
            Self::DuplicateStart(p) => write!(f, "grid has a second start cell at {p}"),
            Self::MissingExit => write!(f, "grid has no exit cell"),
            Self::DuplicateExit(p) => write!(f, "grid has a second exit cell at {p}"),
            Self::OutOfBounds { pos, dims } => {
                write!(f, "coordinate {pos} is outside the {dims} grid")
            }
            Self::Blocked(p) => write!(f, "coordinate {p} is a wall"),
        }
    }
}

impl std::error::Error for GridError {}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A validated, read-only grid of [`CellState`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridRepr", into = "GridRepr")
)]
pub struct Grid {
    dims: Dims,
    cells: Vec<CellState>,
    start: Coordinate,
    exit: Coordinate,
}

impl Grid {
    /// Build a grid from row-major cells.
    ///
    /// Fails unless the dimensions are positive, `cells` has exactly
    /// `rows * cols` entries, and there is exactly one start and one exit.
    pub fn from_cells(rows: i32, cols: i32, cells: Vec<CellState>) -> Result<Self, GridError> {
        let dims = Dims::new(rows, cols);
        if dims.is_empty() {
            return Err(GridError::EmptyGrid);
        }
        if cells.len() != dims.len() {
            return Err(GridError::InconsistentSize {
                dims,
                cells: cells.len(),
            });
        }

        let mut start = None;
        let mut exit = None;
        for (i, &cell) in cells.iter().enumerate() {
            let pos = dims.coordinate(i);
            match cell {
                CellState::Start if start.is_some() => {
                    return Err(GridError::DuplicateStart(pos));
                }
                CellState::Start => start = Some(pos),
                CellState::Exit if exit.is_some() => {
                    return Err(GridError::DuplicateExit(pos));
                }
                CellState::Exit => exit = Some(pos),
                _ => {}
            }
        }

        Ok(Self {
            dims,
            cells,
            start: start.ok_or(GridError::MissingStart)?,
            exit: exit.ok_or(GridError::MissingExit)?,
        })
    }

    /// Parse the text form: one line per row, one character per cell.
    ///
    /// Leading/trailing whitespace is trimmed from the whole string and from
    /// each line. See [`CellState::from_char`] for the accepted characters.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let mut cells = Vec::new();
        let mut rows = 0;
        let mut cols: Option<i32> = None;

        for (row, line) in s.trim().lines().enumerate() {
            let line = line.trim();
            let mut width = 0;
            for (col, ch) in line.chars().enumerate() {
                let state = CellState::from_char(ch).ok_or(GridError::InvalidRune {
                    ch,
                    pos: Coordinate::new(row as i32, col as i32),
                })?;
                cells.push(state);
                width += 1;
            }
            match cols {
                None => cols = Some(width),
                Some(w) if w != width => {
                    return Err(GridError::InconsistentSize {
                        dims: Dims::new(row as i32 + 1, w),
                        cells: cells.len(),
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }

        Self::from_cells(rows, cols.unwrap_or(0), cells)
    }

    /// Grid extent.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.dims.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.dims.cols
    }

    /// The unique start cell.
    #[inline]
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// The unique exit cell.
    #[inline]
    pub fn exit(&self) -> Coordinate {
        self.exit
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Coordinate) -> bool {
        self.dims.contains(c)
    }

    /// The state of the cell at `c`.
    pub fn cell_at(&self, c: Coordinate) -> Result<CellState, GridError> {
        self.dims
            .index(c)
            .map(|i| self.cells[i])
            .ok_or(GridError::OutOfBounds {
                pos: c,
                dims: self.dims,
            })
    }

    /// Whether `c` is an in-bounds wall. Out-of-bounds coordinates are not
    /// walls; use [`Grid::contains`] to tell them apart.
    #[inline]
    pub fn is_wall(&self, c: Coordinate) -> bool {
        matches!(self.cell_at(c), Ok(CellState::Wall))
    }

    /// Check that `c` can be used as a search endpoint.
    pub fn check_endpoint(&self, c: Coordinate) -> Result<(), GridError> {
        if self.cell_at(c)?.is_passable() {
            Ok(())
        } else {
            Err(GridError::Blocked(c))
        }
    }

    /// In-bounds orthogonal neighbours of `c` in fixed order: (+1,0),
    /// (-1,0), (0,+1), (0,-1). Walls are included.
    pub fn neighbors(&self, c: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        c.neighbors_4().into_iter().filter(move |&n| self.contains(n))
    }

    /// [`Grid::neighbors`] without walls.
    pub fn passable_neighbors(&self, c: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        self.neighbors(c).filter(move |&n| !self.is_wall(n))
    }

    /// Every in-bounds coordinate in row-major order.
    #[inline]
    pub fn all_cells(&self) -> DimsIter {
        self.dims.iter()
    }

    /// Iterate over `(Coordinate, CellState)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, CellState)> + '_ {
        self.dims.iter().zip(self.cells.iter().copied())
    }

    /// Count how many cells equal the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.dims.cols as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ---------------------------------------------------------------------------
// Serialized form
// ---------------------------------------------------------------------------

/// Wire shape of a [`Grid`]; deserialization goes through
/// [`Grid::from_cells`] so invalid grids are rejected.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    rows: i32,
    cols: i32,
    cells: Vec<CellState>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(r: GridRepr) -> Result<Self, GridError> {
        Grid::from_cells(r.rows, r.cols, r.cells)
    }
}

#[cfg(feature = "serde")]
impl From<Grid> for GridRepr {
    fn from(g: Grid) -> Self {
        GridRepr {
            rows: g.dims.rows,
            cols: g.dims.cols,
            cells: g.cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
S.#
.#.
..E";

    #[test]
    fn parse_and_size() {
        let g = Grid::parse(SMALL).unwrap();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 3);
        assert_eq!(g.start(), Coordinate::new(0, 0));
        assert_eq!(g.exit(), Coordinate::new(2, 2));
        assert_eq!(g.count(CellState::Wall), 2);
    }

    #[test]
    fn parse_accepts_aliases() {
        let g = Grid::parse("S_X\n__E").unwrap();
        assert_eq!(g.cell_at(Coordinate::new(0, 1)), Ok(CellState::OpenSpace));
        assert_eq!(g.cell_at(Coordinate::new(0, 2)), Ok(CellState::Wall));
    }

    #[test]
    fn display_round_trip() {
        let g = Grid::parse(SMALL).unwrap();
        assert_eq!(g.to_string(), SMALL);
        let back: Grid = g.to_string().parse().unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn cell_at_out_of_bounds_is_error() {
        let g = Grid::parse(SMALL).unwrap();
        let oob = Coordinate::new(3, 0);
        assert_eq!(
            g.cell_at(oob),
            Err(GridError::OutOfBounds {
                pos: oob,
                dims: Dims::new(3, 3)
            })
        );
        assert!(g.cell_at(Coordinate::new(0, -1)).is_err());
        assert!(!g.is_wall(oob));
    }

    #[test]
    fn neighbors_fixed_order_and_bounds() {
        let g = Grid::parse(SMALL).unwrap();
        let center: Vec<_> = g.neighbors(Coordinate::new(1, 1)).collect();
        assert_eq!(
            center,
            vec![
                Coordinate::new(2, 1),
                Coordinate::new(0, 1),
                Coordinate::new(1, 2),
                Coordinate::new(1, 0),
            ]
        );
        let corner: Vec<_> = g.neighbors(Coordinate::new(0, 0)).collect();
        assert_eq!(corner, vec![Coordinate::new(1, 0), Coordinate::new(0, 1)]);
    }

    #[test]
    fn passable_neighbors_skip_walls() {
        let g = Grid::parse(SMALL).unwrap();
        let n: Vec<_> = g.passable_neighbors(Coordinate::new(0, 1)).collect();
        // (1,1) and (0,2) are walls.
        assert_eq!(n, vec![Coordinate::new(0, 0)]);
    }

    #[test]
    fn all_cells_row_major() {
        let g = Grid::parse(SMALL).unwrap();
        let cells: Vec<_> = g.all_cells().collect();
        assert_eq!(cells.len(), 9);
        assert_eq!(cells[1], Coordinate::new(0, 1));
        assert_eq!(cells[3], Coordinate::new(1, 0));
    }

    #[test]
    fn rejects_missing_start_and_exit() {
        assert_eq!(Grid::parse("..\n.E"), Err(GridError::MissingStart));
        assert_eq!(Grid::parse("S.\n.."), Err(GridError::MissingExit));
    }

    #[test]
    fn rejects_duplicates() {
        assert_eq!(
            Grid::parse("SS\n.E"),
            Err(GridError::DuplicateStart(Coordinate::new(0, 1)))
        );
        assert_eq!(
            Grid::parse("SE\nE."),
            Err(GridError::DuplicateExit(Coordinate::new(1, 0)))
        );
    }

    #[test]
    fn rejects_bad_shape_and_runes() {
        assert!(matches!(
            Grid::parse("S..\n.E"),
            Err(GridError::InconsistentSize { .. })
        ));
        assert_eq!(
            Grid::parse("S?\n.E"),
            Err(GridError::InvalidRune {
                ch: '?',
                pos: Coordinate::new(0, 1)
            })
        );
        assert_eq!(Grid::parse(""), Err(GridError::EmptyGrid));
        assert!(matches!(
            Grid::from_cells(2, 2, vec![CellState::Start, CellState::Exit]),
            Err(GridError::InconsistentSize { cells: 2, .. })
        ));
    }

    #[test]
    fn endpoint_checks() {
        let g = Grid::parse(SMALL).unwrap();
        assert!(g.check_endpoint(g.start()).is_ok());
        assert_eq!(
            g.check_endpoint(Coordinate::new(1, 1)),
            Err(GridError::Blocked(Coordinate::new(1, 1)))
        );
        assert!(matches!(
            g.check_endpoint(Coordinate::new(9, 9)),
            Err(GridError::OutOfBounds { .. })
        ));
    }
}
