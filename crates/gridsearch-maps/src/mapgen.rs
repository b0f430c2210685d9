//! Random test-case generation.
//!
//! [`CaseGenerator`] builds [`GridDescription`]s of four [`CaseKind`]s:
//!
//! - **Random**: scattered 1–3 cell rectangles, every goal reachable.
//! - **Unreachable**: every goal boxed in, plus some random walls.
//! - **Maze**: every other row and column mostly walled, every goal
//!   reachable.
//! - **Dense**: about 30% of the cells walled with small rectangles,
//!   every goal reachable.
//!
//! The start is placed in a random quadrant and the goals on the grid
//! edges of the opposite quadrant. Walls never touch the one-cell buffer
//! around the start and the goals, except in unreachable cases. Each case
//! gets up to [`MAX_ATTEMPTS`] tries to meet its reachability constraint;
//! after that Random/Maze/Dense cases come out without walls and
//! Unreachable cases with only the goal enclosures.

use std::fmt;
use std::str::FromStr;

use gridsearch_core::{GridDescription, GridModel, Point, Wall};
use gridsearch_paths::{all_goals_reachable, no_goal_reachable};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Tries per case before falling back.
pub const MAX_ATTEMPTS: usize = 100;

/// The flavour of a generated case.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CaseKind {
    Random,
    Unreachable,
    Maze,
    Dense,
}

impl CaseKind {
    pub const ALL: [CaseKind; 4] = [
        CaseKind::Random,
        CaseKind::Unreachable,
        CaseKind::Maze,
        CaseKind::Dense,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            CaseKind::Random => "random",
            CaseKind::Unreachable => "unreachable",
            CaseKind::Maze => "maze",
            CaseKind::Dense => "dense",
        }
    }

    /// Whether generated cases of this kind have every goal reachable.
    pub const fn solvable(self) -> bool {
        !matches!(self, CaseKind::Unreachable)
    }
}

impl fmt::Display for CaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CaseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown case kind {s:?}"))
    }
}

/// Size and population of one case.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaseParams {
    pub kind: CaseKind,
    pub rows: i32,
    pub cols: i32,
    /// Requested goal count; fewer are placed if the edges run out.
    pub goals: usize,
    /// Random rectangles to try placing. Maze cases ignore it and
    /// unreachable cases use half of it.
    pub walls: usize,
}

/// A generated case and the parameters it was built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Case {
    pub params: CaseParams,
    pub desc: GridDescription,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Placement of the start and goals, shared by every wall attempt.
struct Layout {
    rows: i32,
    cols: i32,
    start: Point,
    goals: Vec<Point>,
}

impl Layout {
    /// Whether `p` is within one cell (diagonals included) of the start
    /// or a goal.
    fn in_buffer(&self, p: Point) -> bool {
        let near = |q: Point| (p.x - q.x).abs() <= 1 && (p.y - q.y).abs() <= 1;
        near(self.start) || self.goals.iter().any(|&g| near(g))
    }

    fn touches_buffer(&self, wall: Wall) -> bool {
        wall.range().iter().any(|p| self.in_buffer(p))
    }

    fn describe(&self, walls: Vec<Wall>) -> GridDescription {
        GridDescription {
            rows: self.rows,
            cols: self.cols,
            start: self.start,
            goals: self.goals.clone(),
            walls,
        }
    }

    /// Build the model for `walls`, or `None` if the layout is degenerate.
    fn model(&self, walls: Vec<Wall>) -> Option<GridModel> {
        GridModel::new(self.describe(walls)).ok()
    }
}

/// Random case generator.
///
/// All randomness comes from `rng`, so a seeded generator reproduces its
/// cases exactly.
pub struct CaseGenerator<R: Rng> {
    pub rng: R,
}

impl<R: Rng> CaseGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw parameters for a case of `kind` from the usual size ranges.
    pub fn params(&mut self, kind: CaseKind) -> CaseParams {
        let rng = &mut self.rng;
        let (rows, cols, goals) = match kind {
            CaseKind::Random => (
                rng.random_range(6..=15),
                rng.random_range(6..=15),
                rng.random_range(1..=3),
            ),
            CaseKind::Unreachable => (
                rng.random_range(6..=12),
                rng.random_range(6..=12),
                rng.random_range(1..=2),
            ),
            CaseKind::Maze | CaseKind::Dense => (
                rng.random_range(8..=15),
                rng.random_range(8..=15),
                rng.random_range(1..=2),
            ),
        };
        let area = (rows * cols) as usize;
        let walls = match kind {
            CaseKind::Random => rng.random_range(3..=(area / 5).max(3)),
            CaseKind::Unreachable => rng.random_range(5..=15),
            CaseKind::Maze => area / 3,
            CaseKind::Dense => area * 3 / 10,
        };
        CaseParams {
            kind,
            rows,
            cols,
            goals,
            walls,
        }
    }

    /// Draw parameters and generate a case of `kind`.
    pub fn case(&mut self, kind: CaseKind) -> Case {
        let params = self.params(kind);
        let desc = self.generate(&params);
        Case { params, desc }
    }

    /// Generate `count` cases: half random, a fifth unreachable, and the
    /// rest split between maze and dense.
    pub fn suite(&mut self, count: usize) -> Vec<Case> {
        let random = count * 50 / 100;
        let unreachable = count * 20 / 100;
        let maze = count * 15 / 100;
        let dense = count - random - unreachable - maze;
        let plan = [
            (CaseKind::Random, random),
            (CaseKind::Unreachable, unreachable),
            (CaseKind::Maze, maze),
            (CaseKind::Dense, dense),
        ];
        let mut cases = Vec::with_capacity(count);
        for (kind, n) in plan {
            for _ in 0..n {
                cases.push(self.case(kind));
            }
        }
        cases
    }

    /// Generate one case from explicit parameters.
    ///
    /// Dimensions below 2 are raised to 2 and at least one goal is placed.
    pub fn generate(&mut self, params: &CaseParams) -> GridDescription {
        let rows = params.rows.max(2);
        let cols = params.cols.max(2);
        if (rows, cols) != (params.rows, params.cols) {
            log::warn!(
                "case size {}x{} raised to {rows}x{cols}",
                params.rows,
                params.cols
            );
        }

        let quadrant = self.quadrant();
        let start = self.start_in(quadrant, rows, cols);
        let goals = self.goals_opposite(quadrant, rows, cols, params.goals.max(1));
        let layout = Layout {
            rows,
            cols,
            start,
            goals,
        };

        let walls = match params.kind {
            CaseKind::Random => self.random_walls(&layout, params.walls),
            CaseKind::Unreachable => self.unreachable_walls(&layout, params.walls / 2),
            CaseKind::Maze => self.maze_walls(&layout),
            CaseKind::Dense => self.dense_walls(&layout),
        };
        log::debug!(
            "generated {} case {rows}x{cols}: start {start}, {} goals, {} walls",
            params.kind,
            layout.goals.len(),
            walls.len()
        );
        layout.describe(walls)
    }

    fn quadrant(&mut self) -> Quadrant {
        match self.rng.random_range(0..4) {
            0 => Quadrant::TopLeft,
            1 => Quadrant::TopRight,
            2 => Quadrant::BottomLeft,
            _ => Quadrant::BottomRight,
        }
    }

    fn start_in(&mut self, quadrant: Quadrant, rows: i32, cols: i32) -> Point {
        let (hx, hy) = (cols / 2, rows / 2);
        let (xs, ys) = match quadrant {
            Quadrant::TopLeft => (0..hx, 0..hy),
            Quadrant::TopRight => (hx..cols, 0..hy),
            Quadrant::BottomLeft => (0..hx, hy..rows),
            Quadrant::BottomRight => (hx..cols, hy..rows),
        };
        Point::new(self.rng.random_range(xs), self.rng.random_range(ys))
    }

    /// Distinct goals on the two grid edges bordering the quadrant
    /// opposite the start.
    fn goals_opposite(&mut self, quadrant: Quadrant, rows: i32, cols: i32, n: usize) -> Vec<Point> {
        let (hx, hy) = (cols / 2, rows / 2);
        let (bottom, right) = (rows - 1, cols - 1);
        let mut edge: Vec<Point> = match quadrant {
            Quadrant::TopLeft => (hx..cols)
                .map(|x| Point::new(x, bottom))
                .chain((hy..bottom).map(|y| Point::new(right, y)))
                .collect(),
            Quadrant::TopRight => (0..hx)
                .map(|x| Point::new(x, bottom))
                .chain((hy..bottom).map(|y| Point::new(0, y)))
                .collect(),
            Quadrant::BottomLeft => (hx..cols)
                .map(|x| Point::new(x, 0))
                .chain((0..hy).map(|y| Point::new(right, y)))
                .collect(),
            Quadrant::BottomRight => (0..hx)
                .map(|x| Point::new(x, 0))
                .chain((0..hy).map(|y| Point::new(0, y)))
                .collect(),
        };
        // The corner shared by both edges appears twice.
        edge.sort();
        edge.dedup();
        if n > edge.len() {
            log::warn!(
                "requested {n} goals, but only {} edge positions available",
                edge.len()
            );
        }
        edge.choose_multiple(&mut self.rng, n).copied().collect()
    }

    /// A wall at a random spot, at most `max_size` cells on a side and
    /// inside the grid.
    fn random_wall(&mut self, layout: &Layout, max_size: i32) -> Wall {
        let x = self.rng.random_range(0..=layout.cols - 2);
        let y = self.rng.random_range(0..=layout.rows - 2);
        let w = self.rng.random_range(1..=max_size.min(layout.cols - x));
        let h = self.rng.random_range(1..=max_size.min(layout.rows - y));
        Wall::new(x, y, w, h)
    }

    fn random_walls(&mut self, layout: &Layout, count: usize) -> Vec<Wall> {
        for _ in 0..MAX_ATTEMPTS {
            let mut walls = Vec::with_capacity(count);
            for _ in 0..count {
                let wall = self.random_wall(layout, 3);
                if !layout.touches_buffer(wall) {
                    walls.push(wall);
                }
            }
            if layout.model(walls.clone()).is_some_and(|m| all_goals_reachable(&m)) {
                return walls;
            }
        }
        log::debug!("no reachable random layout after {MAX_ATTEMPTS} attempts");
        Vec::new()
    }

    fn unreachable_walls(&mut self, layout: &Layout, extra: usize) -> Vec<Wall> {
        let mut enclosure = Vec::new();
        for &g in &layout.goals {
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let p = g.shift(dx, dy);
                    let inside =
                        (0..layout.cols).contains(&p.x) && (0..layout.rows).contains(&p.y);
                    if (dx, dy) != (0, 0) && inside && p != layout.start {
                        enclosure.push(Wall::new(p.x, p.y, 1, 1));
                    }
                }
            }
        }

        for _ in 0..MAX_ATTEMPTS {
            let mut walls = enclosure.clone();
            for _ in 0..extra {
                let wall = self.random_wall(layout, 3);
                if !wall.contains(layout.start) {
                    walls.push(wall);
                }
            }
            if layout.model(walls.clone()).is_some_and(|m| no_goal_reachable(&m)) {
                return walls;
            }
        }
        log::debug!("no unreachable layout after {MAX_ATTEMPTS} attempts");
        enclosure
    }

    fn maze_walls(&mut self, layout: &Layout) -> Vec<Wall> {
        for _ in 0..MAX_ATTEMPTS {
            let mut walls = Vec::new();
            let rows = (0..layout.rows)
                .step_by(2)
                .flat_map(|y| (0..layout.cols).map(move |x| Point::new(x, y)));
            let cols = (0..layout.rows)
                .flat_map(|y| (0..layout.cols).step_by(2).map(move |x| Point::new(x, y)));
            for p in rows.chain(cols) {
                if !layout.in_buffer(p) && self.rng.random_bool(0.7) {
                    walls.push(Wall::new(p.x, p.y, 1, 1));
                }
            }
            if layout.model(walls.clone()).is_some_and(|m| all_goals_reachable(&m)) {
                return walls;
            }
        }
        log::debug!("no reachable maze after {MAX_ATTEMPTS} attempts");
        Vec::new()
    }

    fn dense_walls(&mut self, layout: &Layout) -> Vec<Wall> {
        let target = (layout.rows * layout.cols) as usize * 3 / 10;
        for _ in 0..MAX_ATTEMPTS {
            let mut walls = Vec::with_capacity(target);
            let mut tries = 0;
            while walls.len() < target && tries < MAX_ATTEMPTS {
                let wall = self.random_wall(layout, 2);
                if !layout.touches_buffer(wall) {
                    walls.push(wall);
                }
                tries += 1;
            }
            if layout.model(walls.clone()).is_some_and(|m| all_goals_reachable(&m)) {
                return walls;
            }
        }
        log::debug!("no reachable dense layout after {MAX_ATTEMPTS} attempts");
        Vec::new()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn params_round_trip() {
        let params = CaseParams {
            kind: CaseKind::Maze,
            rows: 9,
            cols: 11,
            goals: 2,
            walls: 33,
        };
        let json = serde_json::to_string(&params).unwrap();
        assert!(json.contains(r#""kind":"maze""#));
        let back: CaseParams = serde_json::from_str(&json).unwrap();
        assert_eq!(params, back);
    }
}
