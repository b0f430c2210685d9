//! Per-call search state.

use gridsearch_core::{GridModel, Move, Point};

use crate::ledger::VisitedLedger;
use crate::node::{NodeArena, NodeId};
use crate::path;
use crate::report::SearchReport;
use crate::strategy::Algorithm;

/// Everything a single `search()` call owns: the node arena and the visited
/// ledger. Created at the start of the call and consumed into the report,
/// so strategies themselves stay stateless.
pub(crate) struct SearchRun<'g> {
    pub(crate) grid: &'g GridModel,
    algorithm: Algorithm,
    arena: NodeArena,
    ledger: VisitedLedger,
}

impl<'g> SearchRun<'g> {
    pub(crate) fn new(grid: &'g GridModel, algorithm: Algorithm) -> Self {
        Self {
            grid,
            algorithm,
            arena: NodeArena::new(),
            ledger: VisitedLedger::new(grid.bounds()),
        }
    }

    /// A fresh root node at the grid's start.
    #[inline]
    pub(crate) fn root(&mut self) -> NodeId {
        self.arena.root(self.grid.start())
    }

    /// Discard every node while keeping the ledger and the generated
    /// count. Used between IDDFS iterations.
    pub(crate) fn reset_nodes(&mut self) {
        log::trace!("{}: dropping {} nodes", self.algorithm, self.arena.len());
        self.arena.clear();
    }

    #[inline]
    pub(crate) fn child(&mut self, parent: NodeId, mv: Move) -> NodeId {
        self.arena.child(parent, mv)
    }

    #[inline]
    pub(crate) fn pos(&self, id: NodeId) -> Point {
        self.arena.pos(id)
    }

    #[inline]
    pub(crate) fn depth(&self, id: NodeId) -> u32 {
        self.arena.depth(id)
    }

    #[inline]
    pub(crate) fn parent_pos(&self, id: NodeId) -> Option<Point> {
        self.arena.parent_pos(id)
    }

    #[inline]
    pub(crate) fn is_visited(&self, p: Point) -> bool {
        self.ledger.contains(p)
    }

    /// Record `p` as processed. Returns `true` the first time.
    #[inline]
    pub(crate) fn mark_visited(&mut self, p: Point) -> bool {
        self.ledger.insert(p)
    }

    pub(crate) fn visited_count(&self) -> usize {
        self.ledger.len()
    }

    /// Goal reached at `id`; `nodes_visited` is the ledger size.
    pub(crate) fn succeed(self, id: NodeId) -> SearchReport {
        let n = self.ledger.len();
        self.finish(Some(id), n)
    }

    /// Frontier exhausted; `nodes_visited` is the ledger size.
    pub(crate) fn fail(self) -> SearchReport {
        let n = self.ledger.len();
        self.finish(None, n)
    }

    /// Build the report with an explicit visit count.
    pub(crate) fn finish(self, goal: Option<NodeId>, nodes_visited: usize) -> SearchReport {
        let (goal, path) = match goal {
            Some(id) => (Some(self.arena.pos(id)), self.arena.moves(id)),
            None => (None, Vec::new()),
        };
        let report = SearchReport {
            algorithm: self.algorithm,
            goal,
            nodes_visited,
            nodes_generated: self.arena.generated(),
            path,
            visited: self.ledger.into_vec(),
        };
        match report.goal {
            Some(g) => log::debug!(
                "{}: reached goal {g} after visiting {} nodes ({} generated), path [{}]",
                report.algorithm,
                report.nodes_visited,
                report.nodes_generated,
                path::format_moves(&report.path),
            ),
            None => log::debug!(
                "{}: no goal reachable after visiting {} nodes ({} generated)",
                report.algorithm,
                report.nodes_visited,
                report.nodes_generated,
            ),
        }
        report
    }
}
