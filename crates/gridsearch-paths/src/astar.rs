use gridsearch_core::{GridModel, Move};

use crate::frontier::{Extract, Frontier, Prioritized, Priority, PriorityFrontier};
use crate::report::SearchReport;
use crate::run::SearchRun;
use crate::strategy::Algorithm;
use crate::traits::SearchStrategy;

/// A* search with unit step costs.
///
/// Priority is `g + h`, where `g` is the path length and `h` the Manhattan
/// distance to the goal nearest the start. Ties go to the longer path,
/// which the heuristic places closer to the goal. With a single goal the
/// heuristic is admissible and consistent, so the first goal extracted is
/// at minimum distance.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AStar;

impl SearchStrategy for AStar {
    fn algorithm(&self) -> Algorithm {
        Algorithm::AStar
    }

    fn search(&self, grid: &GridModel) -> SearchReport {
        let mut run = SearchRun::new(grid, Algorithm::AStar);
        let target = grid.closest_goal(grid.start());
        // Best known g per cell.
        let mut best_g = vec![u32::MAX; grid.len()];
        if let Some(i) = grid.index(grid.start()) {
            best_g[i] = 0;
        }

        let mut open = PriorityFrontier::new();
        open.push(Prioritized {
            priority: Priority::new(grid.start().manhattan(target), 0),
            item: run.root(),
        });

        while let Some(Prioritized { item: id, .. }) = open.pop() {
            let cur = run.pos(id);
            if !run.mark_visited(cur) {
                continue;
            }
            if grid.is_goal(cur) {
                return run.succeed(id);
            }
            let g = run.depth(id) + 1;
            for (mv, next) in grid.successors(cur, Move::ALL) {
                if run.is_visited(next) {
                    continue;
                }
                let Some(ni) = grid.index(next) else {
                    continue;
                };
                if g >= best_g[ni] {
                    continue;
                }
                best_g[ni] = g;
                let child = run.child(id, mv);
                open.push(Prioritized {
                    priority: Priority::new(g as i32 + next.manhattan(target), -(g as i32)),
                    item: child,
                });
            }
        }

        run.fail()
    }
}
