//! Reachability by flood fill.

use gridsearch_core::{GridModel, Move, Point};

/// Flood-fill from `p` and return every valid cell connected to it,
/// `p` first. Empty when `p` itself is not valid.
pub fn reachable_from(grid: &GridModel, p: Point) -> Vec<Point> {
    let mut result = Vec::new();
    if !grid.is_valid(p) {
        return result;
    }
    let mut seen = vec![false; grid.len()];
    let mut stack = Vec::new();
    if let Some(i) = grid.index(p) {
        seen[i] = true;
        stack.push(p);
        result.push(p);
    }

    while let Some(cur) = stack.pop() {
        for (_, next) in grid.successors(cur, Move::ALL) {
            if let Some(ni) = grid.index(next) {
                if !seen[ni] {
                    seen[ni] = true;
                    stack.push(next);
                    result.push(next);
                }
            }
        }
    }

    result
}

/// Whether every goal can be reached from the start.
pub fn all_goals_reachable(grid: &GridModel) -> bool {
    let region = reachable_from(grid, grid.start());
    grid.goals().iter().all(|g| region.contains(g))
}

/// Whether no goal can be reached from the start.
pub fn no_goal_reachable(grid: &GridModel) -> bool {
    let region = reachable_from(grid, grid.start());
    !grid.goals().iter().any(|g| region.contains(g))
}
