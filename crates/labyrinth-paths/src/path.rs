use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;

use labyrinth_core::{Coordinate, Grid};

/// An ordered sequence of coordinates.
///
/// Identity is structural: two paths are equal iff they have the same
/// length and equal coordinates at every index. `Hash` agrees with `Eq`, so
/// paths can be collected into sets for deduplication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Path(Vec<Coordinate>);

impl Path {
    /// A path holding only `c`.
    pub fn single(c: Coordinate) -> Self {
        Self(vec![c])
    }

    /// A copy of this path with `c` appended.
    pub fn extended(&self, c: Coordinate) -> Self {
        let mut v = Vec::with_capacity(self.0.len() + 1);
        v.extend_from_slice(&self.0);
        v.push(c);
        Self(v)
    }

    /// Number of steps (one less than the number of coordinates).
    pub fn steps(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Whether the path is a valid walk on `grid`: every coordinate is an
    /// in-bounds non-wall cell and consecutive coordinates are 4-adjacent.
    pub fn is_walk_on(&self, grid: &Grid) -> bool {
        self.0
            .iter()
            .all(|&c| grid.contains(c) && !grid.is_wall(c))
            && self.0.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }

    /// Whether no coordinate appears twice.
    pub fn is_simple(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.0.len());
        self.0.iter().all(|c| seen.insert(*c))
    }
}

impl Deref for Path {
    type Target = [Coordinate];

    fn deref(&self) -> &[Coordinate] {
        &self.0
    }
}

impl From<Vec<Coordinate>> for Path {
    fn from(v: Vec<Coordinate>) -> Self {
        Self(v)
    }
}

impl FromIterator<Coordinate> for Path {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Path {
    /// `(r,c) -> (r,c) -> ...`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Path identity predicate: same length and the same coordinate at every
/// index.
pub fn same_path(a: &[Coordinate], b: &[Coordinate]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
}

/// Drop repeated paths, keeping the first occurrence of each in order.
pub fn dedup_paths(paths: impl IntoIterator<Item = Path>) -> Vec<Path> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for p in paths {
        if !seen.contains(&p) {
            seen.insert(p.clone());
            out.push(p);
        }
    }
    out
}
