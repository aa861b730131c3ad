//! Path search over labyrinth grids.
//!
//! Two searches are provided, both taking the [`Grid`](labyrinth_core::Grid)
//! as an explicit value and owning all of their bookkeeping for the length
//! of one call:
//!
//! - **Dijkstra** shortest path with uniform step cost ([`shortest_path`])
//! - **Breadth-first path accumulation** listing the simple paths between
//!   two cells ([`all_paths`])
//!
//! Results are [`Path`] values whose equality and hash are structural, so
//! they can be deduplicated with [`dedup_paths`] or compared with
//! [`same_path`].
//!
//! Both searches are deterministic: the same grid and endpoints always give
//! the same result. Ties are broken by the neighbor order of
//! [`Grid::neighbors`](labyrinth_core::Grid::neighbors).

mod allpaths;
mod dijkstra;
mod path;
mod pqueue;

pub use allpaths::{all_paths, all_paths_to_exit};
pub use dijkstra::{UNREACHABLE, shortest_path, shortest_path_to_exit};
pub use path::{Path, dedup_paths, same_path};
pub use pqueue::PriorityQueue;
