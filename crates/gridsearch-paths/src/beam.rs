use gridsearch_core::{GridModel, Move};

use crate::frontier::{BeamLevel, Candidate, Frontier};
use crate::node::NodeId;
use crate::report::SearchReport;
use crate::run::SearchRun;
use crate::strategy::{Algorithm, BeamRevisit, BeamWidth};
use crate::traits::SearchStrategy;

/// Beam search.
///
/// Explores level by level like BFS, but keeps only the `width` best
/// candidates of each level, ranked by the Manhattan distance from the
/// candidate to *its own* nearest goal. Later duplicates of a position
/// within a level are dropped before ranking; equal keys keep generation
/// order.
///
/// Beam search is not complete: pruning may discard the only route to a
/// goal, in which case the search fails even though a path exists.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Beam {
    width: BeamWidth,
    revisit: BeamRevisit,
}

impl Beam {
    pub const fn new(width: BeamWidth) -> Self {
        Self {
            width,
            revisit: BeamRevisit::Ledger,
        }
    }

    pub const fn with_revisit(mut self, revisit: BeamRevisit) -> Self {
        self.revisit = revisit;
        self
    }

    pub fn width(&self) -> BeamWidth {
        self.width
    }

    pub fn revisit(&self) -> BeamRevisit {
        self.revisit
    }
}

impl SearchStrategy for Beam {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Beam
    }

    fn search(&self, grid: &GridModel) -> SearchReport {
        let mut run = SearchRun::new(grid, Algorithm::Beam);
        let mut level: Vec<NodeId> = vec![run.root()];
        // Nodes taken off a level, repeats included.
        let mut processed = 0;
        let mut depth = 0;

        while !level.is_empty() {
            if self.revisit == BeamRevisit::ParentOnly && depth >= grid.len() {
                log::debug!("beam: level cap {} reached", grid.len());
                break;
            }

            let mut next_level = BeamLevel::new();
            for id in level {
                let cur = run.pos(id);
                let fresh = run.mark_visited(cur);
                if !fresh && self.revisit == BeamRevisit::Ledger {
                    continue;
                }
                processed += 1;
                if grid.is_goal(cur) {
                    return self.finish(run, Some(id), processed);
                }

                let parent = run.parent_pos(id);
                for (mv, next) in grid.successors(cur, Move::ALL) {
                    let skip = match self.revisit {
                        BeamRevisit::Ledger => run.is_visited(next),
                        BeamRevisit::ParentOnly => parent == Some(next),
                    };
                    if skip {
                        continue;
                    }
                    next_level.push(Candidate {
                        key: next.manhattan(grid.closest_goal(next)),
                        pos: next,
                        item: run.child(id, mv),
                    });
                }
            }

            let generated = next_level.len();
            level = next_level.take_best(self.width.get());
            log::trace!(
                "beam: level {depth} kept {} of {generated} candidates",
                level.len()
            );
            depth += 1;
        }

        self.finish(run, None, processed)
    }
}

impl Beam {
    fn finish(&self, run: SearchRun<'_>, goal: Option<NodeId>, processed: usize) -> SearchReport {
        let nodes_visited = match self.revisit {
            BeamRevisit::Ledger => run.visited_count(),
            BeamRevisit::ParentOnly => processed,
        };
        run.finish(goal, nodes_visited)
    }
}
