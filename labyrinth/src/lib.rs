//! Labyrinth: generate a walled grid, then show its shortest path and every
//! path the breadth-first enumeration finds from start to exit.

pub mod config;
pub mod logging;
pub mod render;
pub mod run;

pub use config::{Args, Config, GridSource, Output};
pub use run::Outcome;
