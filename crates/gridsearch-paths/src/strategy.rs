//! Strategy selection by name.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use gridsearch_core::GridModel;

use crate::report::SearchReport;
use crate::traits::SearchStrategy;
use crate::{AStar, Beam, Bfs, Dfs, Gbfs, Iddfs};

/// The six available algorithms.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Gbfs,
    AStar,
    Iddfs,
    Beam,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Dfs,
        Algorithm::Bfs,
        Algorithm::Gbfs,
        Algorithm::AStar,
        Algorithm::Iddfs,
        Algorithm::Beam,
    ];

    /// Lower-case selection name.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Gbfs => "gbfs",
            Algorithm::AStar => "astar",
            Algorithm::Iddfs => "iddfs",
            Algorithm::Beam => "beam",
        }
    }

    fn names() -> String {
        Self::ALL.map(Algorithm::name).join(", ")
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.name() == lower)
            .ok_or_else(|| StrategyError::UnknownAlgorithm(s.to_string()))
    }
}

/// Errors raised while choosing a strategy, before any search runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StrategyError {
    #[error("invalid search method {0:?}, choose from: {names}", names = Algorithm::names())]
    UnknownAlgorithm(String),
    #[error("beam width must be at least 1, got {0}")]
    InvalidBeamWidth(i64),
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Number of candidates beam search keeps per level. Never zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeamWidth(NonZeroUsize);

impl BeamWidth {
    pub const DEFAULT: BeamWidth = BeamWidth(NonZeroUsize::MIN.saturating_add(2));

    /// Reject widths below 1.
    pub fn new(width: i64) -> Result<Self, StrategyError> {
        usize::try_from(width)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(BeamWidth)
            .ok_or(StrategyError::InvalidBeamWidth(width))
    }

    /// Raise widths below 1 to 1.
    pub fn clamped(width: usize) -> Self {
        match NonZeroUsize::new(width) {
            Some(w) => BeamWidth(w),
            None => {
                log::warn!("beam width 0 clamped to 1");
                BeamWidth(NonZeroUsize::MIN)
            }
        }
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for BeamWidth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for BeamWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How beam search avoids walking over old ground.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum BeamRevisit {
    /// Never expand a position already in the visited ledger.
    #[default]
    Ledger,
    /// Only forbid stepping straight back onto the parent. Positions may be
    /// processed again on later levels; the number of levels is capped at
    /// the number of grid cells.
    ParentOnly,
}

/// Tunables for the strategies that have any.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub beam_width: BeamWidth,
    pub beam_revisit: BeamRevisit,
    /// Deepest IDDFS iteration; `None` means rows × cols.
    pub max_depth: Option<usize>,
}

// ---------------------------------------------------------------------------
// Strategy
// ---------------------------------------------------------------------------

/// Any one of the six strategies, chosen at run time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    Bfs(Bfs),
    Dfs(Dfs),
    Gbfs(Gbfs),
    AStar(AStar),
    Iddfs(Iddfs),
    Beam(Beam),
}

impl Strategy {
    /// Build `algorithm` with the relevant parts of `config`.
    pub fn new(algorithm: Algorithm, config: &SearchConfig) -> Self {
        match algorithm {
            Algorithm::Bfs => Strategy::Bfs(Bfs),
            Algorithm::Dfs => Strategy::Dfs(Dfs),
            Algorithm::Gbfs => Strategy::Gbfs(Gbfs),
            Algorithm::AStar => Strategy::AStar(AStar),
            Algorithm::Iddfs => Strategy::Iddfs(Iddfs::new(config.max_depth)),
            Algorithm::Beam => {
                Strategy::Beam(Beam::new(config.beam_width).with_revisit(config.beam_revisit))
            }
        }
    }

    /// Select by name. `beam_width` is only consulted for `"beam"`; when
    /// absent the default width is used.
    pub fn from_name(name: &str, beam_width: Option<i64>) -> Result<Self, StrategyError> {
        let algorithm: Algorithm = name.parse()?;
        let mut config = SearchConfig::default();
        match (algorithm, beam_width) {
            (Algorithm::Beam, Some(w)) => config.beam_width = BeamWidth::new(w)?,
            (Algorithm::Beam, None) => {
                log::info!("beam width not provided, using default ({})", config.beam_width)
            }
            (_, Some(w)) => log::debug!("ignoring beam width {w} for {algorithm}"),
            (_, None) => {}
        }
        Ok(Self::new(algorithm, &config))
    }
}

impl SearchStrategy for Strategy {
    fn algorithm(&self) -> Algorithm {
        match self {
            Strategy::Bfs(s) => s.algorithm(),
            Strategy::Dfs(s) => s.algorithm(),
            Strategy::Gbfs(s) => s.algorithm(),
            Strategy::AStar(s) => s.algorithm(),
            Strategy::Iddfs(s) => s.algorithm(),
            Strategy::Beam(s) => s.algorithm(),
        }
    }

    fn search(&self, grid: &GridModel) -> SearchReport {
        match self {
            Strategy::Bfs(s) => s.search(grid),
            Strategy::Dfs(s) => s.search(grid),
            Strategy::Gbfs(s) => s.search(grid),
            Strategy::AStar(s) => s.search(grid),
            Strategy::Iddfs(s) => s.search(grid),
            Strategy::Beam(s) => s.search(grid),
        }
    }
}
