//! **labyrinth-core**: grid model for labyrinth (core types).
//!
//! This crate provides the foundational types used across the *labyrinth*
//! workspace: the [`Coordinate`] value type, grid extents, and the validated
//! [`Grid`] of cell states with its 4-directional adjacency rule.

pub mod geom;
pub mod grid;

pub use geom::{Coordinate, Dims};
pub use grid::{CellState, Grid, GridError};
