use std::collections::{HashMap, VecDeque};

use labyrinth_core::{Coordinate, Grid, GridError};

use crate::path::{Path, dedup_paths};

/// Enumerate the simple paths from `start` to `end` reachable by
/// breadth-first path accumulation.
///
/// Every discovered cell keeps the list of paths that reached it. Cells are
/// expanded once, in breadth-first order: each path held by the expanded
/// cell is extended to every non-wall neighbor. A neighbor that was already
/// discovered still records the new paths but is not queued again, so paths
/// that reach a cell after it was expanded stop there.
///
/// This is narrower than a full simple-path search: a route is only found if
/// every cell on it was expanded after its predecessor on the route. Memory
/// grows with the number of paths recorded, which is combinatorial in the
/// grid size; keep grids small.
///
/// Extensions that would revisit a cell already on the path are dropped, so
/// every returned path is simple. The result is empty if `end` is never
/// reached, and is in discovery order.
pub fn all_paths(grid: &Grid, start: Coordinate, end: Coordinate) -> Result<Vec<Path>, GridError> {
    grid.check_endpoint(start)?;
    grid.check_endpoint(end)?;

    let mut paths: HashMap<Coordinate, Vec<Path>> = HashMap::new();
    paths.insert(start, vec![Path::single(start)]);

    let mut queue: VecDeque<Coordinate> = VecDeque::new();
    queue.push_back(start);
    let mut expanded = 0usize;

    while let Some(current) = queue.pop_front() {
        expanded += 1;
        // Neighbors are never `current`, so its list can be taken out while
        // the neighbors' lists are extended.
        let current_paths = paths.remove(&current).unwrap_or_default();

        for n in grid.passable_neighbors(current) {
            let first_visit = !paths.contains_key(&n);
            let incoming = paths.entry(n).or_default();
            for p in current_paths.iter().filter(|p| !p.contains(&n)) {
                incoming.push(p.extended(n));
            }
            if first_visit {
                queue.push_back(n);
            }
        }

        paths.insert(current, current_paths);
    }

    let found = dedup_paths(paths.remove(&end).unwrap_or_default());
    log::debug!(
        "all-paths: {} paths {start} -> {end}, {expanded} cells expanded",
        found.len()
    );
    Ok(found)
}

/// All paths between the grid's own start and exit cells.
pub fn all_paths_to_exit(grid: &Grid) -> Result<Vec<Path>, GridError> {
    all_paths(grid, grid.start(), grid.exit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(cells: &[(i32, i32)]) -> Path {
        cells.iter().map(|&rc| Coordinate::from(rc)).collect()
    }

    #[test]
    fn two_by_two_open_grid() {
        let g = Grid::parse("S.\n.E").unwrap();
        let paths = all_paths_to_exit(&g).unwrap();
        assert_eq!(paths.len(), 2);
        assert!(paths.contains(&p(&[(0, 0), (1, 0), (1, 1)])));
        assert!(paths.contains(&p(&[(0, 0), (0, 1), (1, 1)])));
    }

    #[test]
    fn corridor_has_one_path() {
        let g = Grid::parse("S..E").unwrap();
        let paths = all_paths_to_exit(&g).unwrap();
        assert_eq!(paths, vec![p(&[(0, 0), (0, 1), (0, 2), (0, 3)])]);
    }

    #[test]
    fn start_equals_end() {
        let g = Grid::parse("S.\n.E").unwrap();
        let paths = all_paths(&g, g.start(), g.start()).unwrap();
        assert_eq!(paths, vec![Path::single(g.start())]);
    }

    #[test]
    fn unreachable_end_gives_empty() {
        let g = Grid::parse("S#\n#E").unwrap();
        assert!(all_paths_to_exit(&g).unwrap().is_empty());
    }

    #[test]
    fn paths_are_simple_walks_ending_at_end() {
        let g = Grid::parse(
            "\
S..
.#.
..E",
        )
        .unwrap();
        let paths = all_paths_to_exit(&g).unwrap();
        assert_eq!(paths.len(), 2);
        for path in &paths {
            assert_eq!(path.first(), Some(&g.start()));
            assert_eq!(path.last(), Some(&g.exit()));
            assert!(path.is_walk_on(&g));
            assert!(path.is_simple());
        }
    }

    #[test]
    fn single_expansion_misses_late_routes() {
        // A 3x3 open grid has 12 simple paths corner to corner, but each
        // cell is expanded only against the paths it held when dequeued.
        let g = Grid::parse("S..\n...\n..E").unwrap();
        let paths = all_paths_to_exit(&g).unwrap();
        // The six monotone (shortest) routes are always found.
        assert_eq!(paths.iter().filter(|p| p.steps() == 4).count(), 6);
        assert!(paths.len() < 12);
        for path in &paths {
            assert!(path.is_walk_on(&g) && path.is_simple());
        }
    }

    #[test]
    fn results_are_distinct_and_deterministic() {
        let g = Grid::parse(
            "\
S...
.#..
...#
#..E",
        )
        .unwrap();
        let a = all_paths_to_exit(&g).unwrap();
        let b = all_paths_to_exit(&g).unwrap();
        assert_eq!(a, b);
        assert_eq!(dedup_paths(a.clone()).len(), a.len());
    }

    #[test]
    fn wall_endpoint_is_error() {
        let g = Grid::parse("S#\n.E").unwrap();
        assert_eq!(
            all_paths(&g, g.start(), Coordinate::new(0, 1)),
            Err(GridError::Blocked(Coordinate::new(0, 1)))
        );
    }
}
