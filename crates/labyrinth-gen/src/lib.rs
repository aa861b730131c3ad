//! Grid generation for labyrinth: random walls, start and exit placement.

pub mod mazegen;

pub use mazegen::{DEFAULT_WALLS, GenError, MazeGen};
