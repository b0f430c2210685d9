//! ASCII rendering of grids and search results.
//!
//! | Symbol | Meaning |
//! |---|---|
//! | `.` | free cell |
//! | `#` | wall |
//! | `G` | goal |
//! | `S` | start |
//! | `+` | visited |
//! | `P` | path |

use std::fmt;

use gridsearch_core::{GridModel, Point, Range};
use gridsearch_paths::SearchReport;

/// Legend printed under a rendered solution.
pub const LEGEND: &str = "S = Start  G = Goal  P = Path  + = Visited  # = Wall";

/// A character per cell. Writes outside the grid are ignored.
struct Canvas {
    bounds: Range,
    cells: Vec<char>,
}

impl Canvas {
    /// Free cells and walls.
    fn new(grid: &GridModel) -> Self {
        let cells = grid
            .bounds()
            .iter()
            .map(|p| if grid.is_wall(p) { '#' } else { '.' })
            .collect();
        Self {
            bounds: grid.bounds(),
            cells,
        }
    }

    fn set(&mut self, p: Point, ch: char) {
        if let Some(i) = self.bounds.index(p) {
            self.cells[i] = ch;
        }
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.bounds.width().max(1) as usize) {
            for (i, ch) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Draw the grid with its walls, goals and start.
pub fn render_map(grid: &GridModel) -> String {
    let mut canvas = Canvas::new(grid);
    for &g in grid.goals() {
        canvas.set(g, 'G');
    }
    canvas.set(grid.start(), 'S');
    canvas.to_string()
}

/// Draw a search result over the grid, followed by a blank line and the
/// [`LEGEND`].
///
/// Visited cells are overdrawn by the path, the path by the goals. The
/// start is drawn as `S` even when the search failed.
pub fn render_solution(grid: &GridModel, report: &SearchReport) -> String {
    let mut canvas = Canvas::new(grid);
    for &p in &report.visited {
        canvas.set(p, '+');
    }
    for (i, p) in report.coordinates(grid.start()).into_iter().enumerate() {
        let ch = if i == 0 {
            'S'
        } else if grid.is_goal(p) {
            'G'
        } else {
            'P'
        };
        canvas.set(p, ch);
    }
    for &g in grid.goals() {
        canvas.set(g, 'G');
    }
    format!("{canvas}\n{LEGEND}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridsearch_core::{GridDescription, Wall};
    use gridsearch_paths::{Bfs, SearchStrategy};

    fn small() -> GridModel {
        GridModel::new(GridDescription {
            rows: 3,
            cols: 4,
            start: Point::new(0, 0),
            goals: vec![Point::new(3, 2), Point::new(9, 9)],
            walls: vec![Wall::new(1, 0, 1, 2)],
        })
        .unwrap()
    }

    #[test]
    fn map_symbols() {
        assert_eq!(render_map(&small()), "S # . .\n. # . .\n. . . G\n");
    }

    #[test]
    fn solution_symbols() {
        let grid = small();
        let report = Bfs.search(&grid);
        let out = render_solution(&grid, &report);
        let expected = "\
S # . .
P # + .
P P P G

S = Start  G = Goal  P = Path  + = Visited  # = Wall
";
        assert_eq!(out, expected);
    }

    #[test]
    fn failed_search_still_shows_start() {
        let grid = GridModel::new(GridDescription {
            rows: 1,
            cols: 3,
            start: Point::new(0, 0),
            goals: vec![Point::new(2, 0)],
            walls: vec![Wall::new(1, 0, 1, 1)],
        })
        .unwrap();
        let report = Bfs.search(&grid);
        assert!(!report.found());
        assert!(render_solution(&grid, &report).starts_with("S # G\n"));
    }
}
