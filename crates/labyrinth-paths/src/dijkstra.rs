use std::collections::{HashMap, HashSet};

use labyrinth_core::{Coordinate, Grid, GridError};

use crate::path::Path;
use crate::pqueue::PriorityQueue;

/// Sentinel distance for cells not (yet) reached.
pub const UNREACHABLE: i32 = i32::MAX;

/// Compute a shortest path from `start` to `end` with Dijkstra's algorithm,
/// every step costing 1.
///
/// Returns the full path (including both endpoints), `Ok(None)` if `end`
/// cannot be reached, or an error if either endpoint is out of bounds or a
/// wall. Among equal-length paths the one chosen follows the fixed neighbor
/// order of [`Grid::neighbors`].
pub fn shortest_path(
    grid: &Grid,
    start: Coordinate,
    end: Coordinate,
) -> Result<Option<Path>, GridError> {
    grid.check_endpoint(start)?;
    grid.check_endpoint(end)?;

    let mut distance: HashMap<Coordinate, i32> = HashMap::with_capacity(grid.dims().len());
    let mut previous: HashMap<Coordinate, Option<Coordinate>> =
        HashMap::with_capacity(grid.dims().len());
    for c in grid.all_cells() {
        distance.insert(c, UNREACHABLE);
        previous.insert(c, None);
    }
    distance.insert(start, 0);

    let mut visited: HashSet<Coordinate> = HashSet::new();
    let mut open = PriorityQueue::new();
    open.push(start, 0);

    let mut found = false;
    while let Some(current) = open.pop_min() {
        if current == end {
            found = true;
            break;
        }
        // Skip stale entries.
        if !visited.insert(current) {
            continue;
        }

        let current_d = distance[&current];
        for n in grid.passable_neighbors(current) {
            if visited.contains(&n) {
                continue;
            }
            let tentative = current_d + 1;
            if tentative < distance[&n] {
                distance.insert(n, tentative);
                previous.insert(n, Some(current));
                open.push(n, tentative);
            }
        }
    }

    if !found {
        log::debug!("dijkstra: {end} unreachable from {start}");
        return Ok(None);
    }

    let path = reconstruct(&previous, start, end);
    if let Some(p) = &path {
        log::debug!(
            "dijkstra: {start} -> {end} in {} steps, {} cells expanded",
            p.steps(),
            visited.len()
        );
    }
    Ok(path)
}

/// Shortest path between the grid's own start and exit cells.
pub fn shortest_path_to_exit(grid: &Grid) -> Result<Option<Path>, GridError> {
    shortest_path(grid, grid.start(), grid.exit())
}

/// Follow predecessor links back from `end`. Returns `None` if the chain
/// stops anywhere other than `start`.
fn reconstruct(
    previous: &HashMap<Coordinate, Option<Coordinate>>,
    start: Coordinate,
    end: Coordinate,
) -> Option<Path> {
    let mut path = vec![end];
    let mut trace = end;
    while trace != start {
        // Each link moves strictly closer to start, so this terminates.
        trace = previous.get(&trace).copied().flatten()?;
        path.push(trace);
    }
    path.reverse();
    Some(Path::from(path))
}
