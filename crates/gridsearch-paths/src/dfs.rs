use gridsearch_core::{GridModel, Move};

use crate::frontier::{Extract, Frontier, LifoFrontier};
use crate::report::SearchReport;
use crate::run::SearchRun;
use crate::strategy::Algorithm;
use crate::traits::SearchStrategy;

/// Depth-first search with an explicit stack.
///
/// Neighbours are pushed in [`Move::REVERSED`] order so they pop in
/// [`Move::ALL`] order, giving the same visitation order as a recursive
/// walk without being limited by the call stack. One ledger is shared by
/// the whole search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Dfs;

impl SearchStrategy for Dfs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dfs
    }

    fn search(&self, grid: &GridModel) -> SearchReport {
        let mut run = SearchRun::new(grid, Algorithm::Dfs);
        let mut stack = LifoFrontier::new();
        stack.push(run.root());

        while let Some(id) = stack.pop() {
            let cur = run.pos(id);
            if !run.mark_visited(cur) {
                continue;
            }
            if grid.is_goal(cur) {
                return run.succeed(id);
            }
            for (mv, next) in grid.successors(cur, Move::REVERSED) {
                if !run.is_visited(next) {
                    stack.push(run.child(id, mv));
                }
            }
        }

        run.fail()
    }
}
