use gridsearch_core::{Move, Point};

use crate::path;
use crate::strategy::Algorithm;

/// Outcome of one [`search`](crate::SearchStrategy::search) call.
///
/// `nodes_visited` equals `visited.len()` for every strategy except beam
/// search in [`BeamRevisit::ParentOnly`](crate::BeamRevisit::ParentOnly)
/// mode. There it counts every processed node, repeats included, while
/// `visited` still lists each position once.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    pub algorithm: Algorithm,
    /// The goal reached, or `None` if the search gave up.
    pub goal: Option<Point>,
    pub nodes_visited: usize,
    /// Nodes pushed onto the frontier, the root included.
    pub nodes_generated: usize,
    /// Moves from the start to `goal`; empty on failure.
    pub path: Vec<Move>,
    /// Distinct processed positions in first-visit order.
    pub visited: Vec<Point>,
}

impl SearchReport {
    /// Whether a goal was reached.
    #[inline]
    pub fn found(&self) -> bool {
        self.goal.is_some()
    }

    /// Number of moves in the path.
    #[inline]
    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    /// The cells along the path, `start` first.
    pub fn coordinates(&self, start: Point) -> Vec<Point> {
        path::reconstruct(start, &self.path)
    }
}
