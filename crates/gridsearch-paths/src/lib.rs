//! Uninformed and heuristic search strategies over rectangular grids.
//!
//! Every strategy implements [`SearchStrategy`]: given a shared, read-only
//! [`GridModel`](gridsearch_core::GridModel) it explores from the start
//! until a goal is extracted or nothing is left to explore, and returns a
//! [`SearchReport`]. Per-run state (frontier, [`VisitedLedger`], node
//! arena) lives inside the call, so strategies are cheap `Copy` values
//! that can be reused and run from several threads at once.
//!
//! | Strategy | Frontier | Ordering | Optimal |
//! |---|---|---|---|
//! | [`Bfs`] | [`FifoFrontier`] | insertion | yes |
//! | [`Dfs`] | [`LifoFrontier`] | reversed move order | no |
//! | [`Gbfs`] | [`PriorityFrontier`] | Manhattan distance to the goal nearest the start | no |
//! | [`AStar`] | [`PriorityFrontier`] | path length + Manhattan distance | single goal |
//! | [`Iddfs`] | [`LifoFrontier`] per depth limit | reversed move order | yes |
//! | [`Beam`] | [`BeamLevel`] | Manhattan distance to each cell's nearest goal | no (incomplete) |
//!
//! A position counts as *visited* when it is taken off the frontier for
//! the first time; pushes are tallied separately as `nodes_generated`.
//!
//! [`distance_map`] and [`reachable_from`] are plain flood fills used to
//! check reachability independently of the strategies.

mod astar;
mod beam;
mod bfs;
mod dfs;
mod distance;
mod flood;
mod frontier;
mod gbfs;
mod iddfs;
mod ledger;
mod node;
mod path;
mod report;
mod run;
mod strategy;
#[cfg(test)]
mod testkit;
mod traits;

pub use astar::AStar;
pub use beam::Beam;
pub use bfs::Bfs;
pub use dfs::Dfs;
pub use distance::{DistanceMap, distance_map};
pub use flood::{all_goals_reachable, no_goal_reachable, reachable_from};
pub use frontier::{
    BeamLevel, Candidate, Extract, FifoFrontier, Frontier, LifoFrontier, Prioritized, Priority,
    PriorityFrontier,
};
pub use gbfs::Gbfs;
pub use iddfs::Iddfs;
pub use ledger::VisitedLedger;
pub use path::{format_moves, reconstruct};
pub use report::SearchReport;
pub use strategy::{Algorithm, BeamRevisit, BeamWidth, SearchConfig, Strategy, StrategyError};
pub use traits::SearchStrategy;
