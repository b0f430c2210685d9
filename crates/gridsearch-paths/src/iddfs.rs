use gridsearch_core::{GridModel, Move, Point};

use crate::frontier::{Extract, Frontier, LifoFrontier};
use crate::report::SearchReport;
use crate::run::SearchRun;
use crate::strategy::Algorithm;
use crate::traits::SearchStrategy;

/// Iterative deepening depth-first search.
///
/// Runs a depth-limited DFS with limits `0, 1, 2, ...` up to `max_depth`
/// (rows × cols when unset). Within one iteration a cell is expanded again
/// only when it is reached with more depth to spare than before, so every
/// cell within the limit is found and the first goal returned is at
/// minimum distance.
///
/// Deepening stops early once an iteration never hit its limit: no deeper
/// limit can reach anything new. The visited ledger is shared by all
/// iterations and only feeds the counters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Iddfs {
    max_depth: Option<usize>,
}

impl Iddfs {
    pub const fn new(max_depth: Option<usize>) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }
}

impl SearchStrategy for Iddfs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Iddfs
    }

    fn search(&self, grid: &GridModel) -> SearchReport {
        let mut run = SearchRun::new(grid, Algorithm::Iddfs);
        let cap = self.max_depth.unwrap_or(grid.len());
        // Most depth left on arrival at each cell in this iteration.
        let mut spare: Vec<Option<usize>> = vec![None; grid.len()];
        let mut edge: Vec<Point> = Vec::new();

        for limit in 0..=cap {
            spare.fill(None);
            edge.clear();
            run.reset_nodes();

            let mut stack = LifoFrontier::new();
            stack.push(run.root());

            while let Some(id) = stack.pop() {
                let cur = run.pos(id);
                let Some(i) = grid.index(cur) else {
                    continue;
                };
                let left = limit - run.depth(id) as usize;
                if spare[i].is_some_and(|s| s >= left) {
                    continue;
                }
                spare[i] = Some(left);
                run.mark_visited(cur);
                if grid.is_goal(cur) {
                    log::trace!("iddfs: goal {cur} found at depth limit {limit}");
                    return run.succeed(id);
                }
                if left == 0 {
                    edge.push(cur);
                    continue;
                }
                for (mv, next) in grid.successors(cur, Move::REVERSED) {
                    let known = grid.index(next).and_then(|ni| spare[ni]);
                    if known.is_none_or(|s| s < left - 1) {
                        stack.push(run.child(id, mv));
                    }
                }
            }

            // Cut off only if some cell on the limit borders one this
            // iteration never reached.
            let cut_off = edge.iter().any(|&p| {
                grid.successors(p, Move::ALL)
                    .any(|(_, n)| grid.index(n).is_some_and(|ni| spare[ni].is_none()))
            });
            log::trace!(
                "iddfs: depth limit {limit} exhausted, {} cells seen so far",
                run.visited_count()
            );
            if !cut_off {
                break;
            }
        }

        run.fail()
    }
}
