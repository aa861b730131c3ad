//! Terminal rendering of a grid and its paths.

use std::collections::HashSet;
use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use labyrinth_core::{CellState, Coordinate, Grid};
use labyrinth_paths::Path;

use crate::run::Outcome;

/// Character and colour for one cell.
///
/// Cells on the shortest path are drawn as `*`, except walls and the exit
/// which keep their own glyph.
pub fn glyph(state: CellState, on_path: bool) -> (char, Color) {
    match state {
        CellState::Wall => ('X', Color::Red),
        CellState::Exit => ('E', Color::Cyan),
        _ if on_path => ('*', Color::Blue),
        CellState::Start => ('S', Color::Yellow),
        CellState::OpenSpace => ('_', Color::Green),
    }
}

/// Draw the grid, one row per line, marking `shortest` if given.
pub fn render_grid<W: Write>(
    out: &mut W,
    grid: &Grid,
    shortest: Option<&Path>,
    color: bool,
) -> io::Result<()> {
    let on_path: HashSet<Coordinate> = shortest
        .map(|p| p.iter().copied().collect())
        .unwrap_or_default();

    for (c, state) in grid.iter() {
        let (ch, fg) = glyph(state, on_path.contains(&c));
        if color {
            queue!(out, SetForegroundColor(fg), Print(ch), ResetColor)?;
        } else {
            write!(out, "{ch}")?;
        }
        if c.col + 1 == grid.cols() {
            writeln!(out)?;
        } else {
            write!(out, " ")?;
        }
    }
    Ok(())
}

/// List paths as `Path n: (r,c) -> ...`, at most `limit` of them.
pub fn render_paths<W: Write>(out: &mut W, paths: &[Path], limit: Option<usize>) -> io::Result<()> {
    writeln!(out, "Number of Paths: {}", paths.len())?;
    let shown = limit.map_or(paths.len(), |n| n.min(paths.len()));
    for (i, p) in paths.iter().take(shown).enumerate() {
        writeln!(out, "Path {}: {p}", i + 1)?;
    }
    if shown < paths.len() {
        writeln!(
            out,
            "... {} more (raise --limit, or --limit 0 for all)",
            paths.len() - shown
        )?;
    }
    Ok(())
}

/// Full text report: grid, shortest path summary, and the path list.
pub fn render_outcome<W: Write>(
    out: &mut W,
    outcome: &Outcome,
    limit: Option<usize>,
    color: bool,
) -> io::Result<()> {
    if let Some(seed) = outcome.seed {
        writeln!(out, "Seed: {seed}")?;
    }
    render_grid(out, &outcome.grid, outcome.shortest.as_ref(), color)?;
    writeln!(out)?;
    match &outcome.shortest {
        Some(p) => writeln!(out, "Shortest Path ({} steps): {p}", p.steps())?,
        None => writeln!(out, "No path from start to exit.")?,
    }
    writeln!(out)?;
    writeln!(out, "All Available Paths:")?;
    render_paths(out, &outcome.paths, limit)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use labyrinth_paths::{all_paths_to_exit, shortest_path_to_exit};

    fn text<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn plain_grid_marks_shortest_path() {
        let g = Grid::parse("S.#\n..E").unwrap();
        let p = shortest_path_to_exit(&g).unwrap();
        let s = text(|out| render_grid(out, &g, p.as_ref(), false));
        assert_eq!(s, "* _ X\n* * E\n");
    }

    #[test]
    fn plain_grid_without_path() {
        let g = Grid::parse("S#\n#E").unwrap();
        let s = text(|out| render_grid(out, &g, None, false));
        assert_eq!(s, "S X\nX E\n");
    }

    #[test]
    fn colored_grid_emits_escape_codes() {
        let g = Grid::parse("SE").unwrap();
        let s = text(|out| render_grid(out, &g, None, true));
        assert!(s.contains('\u{1b}'));
        assert!(s.contains('S') && s.contains('E'));
    }

    #[test]
    fn path_list_respects_limit() {
        let g = Grid::parse("S..\n...\n..E").unwrap();
        let paths = all_paths_to_exit(&g).unwrap();
        let s = text(|out| render_paths(out, &paths, Some(2)));
        let lines: Vec<_> = s.lines().collect();
        assert_eq!(lines[0], format!("Number of Paths: {}", paths.len()));
        assert!(lines[1].starts_with("Path 1: (0,0) -> "));
        assert!(lines[2].starts_with("Path 2: "));
        assert!(lines[3].starts_with("... 4 more"));
        assert_eq!(lines.len(), 4);

        let all = text(|out| render_paths(out, &paths, None));
        assert_eq!(all.lines().count(), paths.len() + 1);
    }

    #[test]
    fn outcome_report() {
        let g = Grid::parse("S#\n#E").unwrap();
        let outcome = crate::run::search(g, Some(3)).unwrap();
        let s = text(|out| render_outcome(out, &outcome, None, false));
        assert!(s.starts_with("Seed: 3\n"));
        assert!(s.contains("No path from start to exit."));
        assert!(s.contains("Number of Paths: 0"));
    }
}
