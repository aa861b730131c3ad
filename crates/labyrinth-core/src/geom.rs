//! Geometry primitives: [`Coordinate`] and [`Dims`].
//!
//! Coordinates are addressed as (row, column). Rows grow downward, columns
//! grow to the right.

use std::fmt;
use std::ops::Add;

// ---------------------------------------------------------------------------
// Coordinate
// ---------------------------------------------------------------------------

/// A 2D integer position. Equality and hashing are field-wise, so
/// coordinates can key maps and populate sets.
///
/// A coordinate carries no bound of its own; whether it denotes a cell is
/// decided by the grid it is used with.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    /// Origin (0, 0).
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Unit offsets in the order neighbors are produced: (+1,0), (-1,0),
    /// (0,+1), (0,-1).
    ///
    /// Both searches break ties by this order, so it must not change.
    pub const OFFSETS: [Coordinate; 4] = [
        Self::new(1, 0),
        Self::new(-1, 0),
        Self::new(0, 1),
        Self::new(0, -1),
    ];

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The four orthogonal neighbours, unfiltered, in [`Self::OFFSETS`] order.
    #[inline]
    pub fn neighbors_4(self) -> [Coordinate; 4] {
        Self::OFFSETS.map(|d| self + d)
    }

    /// Manhattan distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Coordinate) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// Whether `other` differs by exactly one unit in exactly one axis.
    #[inline]
    pub fn is_adjacent(self, other: Coordinate) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl Add for Coordinate {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Dims
// ---------------------------------------------------------------------------

/// Grid extent: the half-open rectangle \[0, rows) × \[0, cols).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dims {
    pub rows: i32,
    pub cols: i32,
}

impl Dims {
    #[inline]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether the extent has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows <= 0 || self.cols <= 0
    }

    /// Whether `c` lies inside the extent.
    #[inline]
    pub fn contains(self, c: Coordinate) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    /// Row-major flat index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(self, c: Coordinate) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.cols as usize + c.col as usize)
    }

    /// Inverse of [`Dims::index`].
    #[inline]
    pub fn coordinate(self, idx: usize) -> Coordinate {
        let cols = self.cols.max(1) as usize;
        Coordinate::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Row-major iterator over every coordinate in the extent.
    #[inline]
    pub fn iter(self) -> DimsIter {
        DimsIter {
            dims: self,
            cur: Coordinate::ORIGIN,
        }
    }
}

impl IntoIterator for Dims {
    type Item = Coordinate;
    type IntoIter = DimsIter;
    #[inline]
    fn into_iter(self) -> DimsIter {
        self.iter()
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

// ---------------------------------------------------------------------------
// DimsIter
// ---------------------------------------------------------------------------

/// Row-major iterator (outer loop over rows, inner over columns).
#[derive(Clone, Debug)]
pub struct DimsIter {
    dims: Dims,
    cur: Coordinate,
}

impl Iterator for DimsIter {
    type Item = Coordinate;

    #[inline]
    fn next(&mut self) -> Option<Coordinate> {
        if self.cur.row >= self.dims.rows || self.dims.is_empty() {
            return None;
        }
        let c = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.dims.cols {
            self.cur.col = 0;
            self.cur.row += 1;
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.dims.is_empty() || self.cur.row >= self.dims.rows {
            return (0, Some(0));
        }
        let w = self.dims.cols as usize;
        let remaining_in_row = (self.dims.cols - self.cur.col) as usize;
        let remaining_rows = (self.dims.rows - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for DimsIter {}
