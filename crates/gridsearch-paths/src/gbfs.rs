use gridsearch_core::{GridModel, Move};

use crate::frontier::{Extract, Frontier, Prioritized, Priority, PriorityFrontier};
use crate::report::SearchReport;
use crate::run::SearchRun;
use crate::strategy::Algorithm;
use crate::traits::SearchStrategy;

/// Greedy best-first search.
///
/// Always expands the queued cell with the smallest Manhattan distance to
/// the goal nearest the *start*. That target is fixed for the whole search.
/// Ties go to the shorter path, then to the earlier push. Complete on
/// finite grids but not optimal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Gbfs;

impl SearchStrategy for Gbfs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Gbfs
    }

    fn search(&self, grid: &GridModel) -> SearchReport {
        let mut run = SearchRun::new(grid, Algorithm::Gbfs);
        let target = grid.closest_goal(grid.start());
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
            for (mv, next) in grid.successors(cur, Move::ALL) {
                if run.is_visited(next) {
                    continue;
                }
                let child = run.child(id, mv);
                open.push(Prioritized {
                    priority: Priority::new(next.manhattan(target), run.depth(child) as i32),
                    item: child,
                });
            }
        }

        run.fail()
    }
}
