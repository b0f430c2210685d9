use gridsearch_core::GridModel;

use crate::report::SearchReport;
use crate::strategy::Algorithm;

/// Common interface of the six search strategies.
///
/// Implementations keep no state between calls: the frontier, the visited
/// ledger and all counters live inside `search`, so one strategy value can
/// be run repeatedly or from several threads over the same [`GridModel`].
pub trait SearchStrategy {
    /// Which algorithm this is.
    fn algorithm(&self) -> Algorithm;

    /// Explore `grid` from its start until a goal is extracted or the
    /// frontier runs dry. Failing to find a goal is a normal outcome,
    /// reported as `goal == None`.
    fn search(&self, grid: &GridModel) -> SearchReport;
}
