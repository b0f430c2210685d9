//! The immutable search grid: bounds, walls, start and goals.
//!
//! A [`GridDescription`] is the plain value handed over by a parser or
//! generator. [`GridModel::new`] checks it once and precomputes a wall
//! bitmap so that [`GridModel::is_valid`] is O(1) regardless of how many
//! walls there are or how large they are.

use std::collections::HashSet;
use std::fmt;

use crate::geom::{Point, Range};
use crate::moves::Move;

// ---------------------------------------------------------------------------
// Wall
// ---------------------------------------------------------------------------

/// An axis-aligned obstacle covering `(x + i, y + j)` for
/// `0 ≤ i < width`, `0 ≤ j < height`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wall {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Wall {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The cells covered by this wall. Empty if either extent is zero.
    #[inline]
    pub fn range(self) -> Range {
        Range::sized(Point::new(self.x, self.y), self.width, self.height)
    }

    /// Whether `p` is one of the covered cells.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        self.range().contains(p)
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{},{})", self.x, self.y, self.width, self.height)
    }
}

// ---------------------------------------------------------------------------
// GridDescription
// ---------------------------------------------------------------------------

/// Structured description of a search problem, as produced by a map parser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDescription {
    pub rows: i32,
    pub cols: i32,
    pub start: Point,
    /// Goal cells in file order. Order matters for [`GridModel::closest_goal`]
    /// tie-breaking.
    pub goals: Vec<Point>,
    pub walls: Vec<Wall>,
}

/// Errors that make a [`GridDescription`] unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Rows or columns are zero or negative.
    #[error("grid size must be positive, got {rows} rows x {cols} cols")]
    InvalidSize { rows: i32, cols: i32 },
    /// The goal list is empty.
    #[error("grid has no goal states")]
    NoGoals,
    /// The start lies outside the grid.
    #[error("initial position {start} is outside the {rows}x{cols} grid")]
    StartOutOfBounds { start: Point, rows: i32, cols: i32 },
    /// A wall has a negative width or height.
    #[error("wall #{index} {wall} has a negative extent")]
    InvalidWall { index: usize, wall: Wall },
    /// A wall's far edge does not fit in an `i32`.
    #[error("wall #{index} {wall} extends past the coordinate range")]
    WallOverflow { index: usize, wall: Wall },
    /// The start cell is covered by a wall.
    #[error("initial position {start} is covered by wall #{index} {wall}")]
    StartOnWall { start: Point, index: usize, wall: Wall },
}

// ---------------------------------------------------------------------------
// GridModel
// ---------------------------------------------------------------------------

/// Read-only view of the grid answering validity and distance queries.
///
/// `GridModel` holds no per-search state, so one instance can be shared by
/// any number of searches, including across threads.
#[derive(Clone, Debug)]
pub struct GridModel {
    desc: GridDescription,
    bounds: Range,
    blocked: Vec<bool>,
    goal_set: HashSet<Point>,
}

impl GridModel {
    /// Validate `desc` and build the wall bitmap.
    pub fn new(desc: GridDescription) -> Result<Self, GridError> {
        if desc.rows <= 0 || desc.cols <= 0 {
            return Err(GridError::InvalidSize {
                rows: desc.rows,
                cols: desc.cols,
            });
        }
        if desc.goals.is_empty() {
            return Err(GridError::NoGoals);
        }
        let bounds = Range::sized(Point::ZERO, desc.cols, desc.rows);
        if !bounds.contains(desc.start) {
            return Err(GridError::StartOutOfBounds {
                start: desc.start,
                rows: desc.rows,
                cols: desc.cols,
            });
        }

        let mut blocked = vec![false; bounds.len()];
        for (index, &wall) in desc.walls.iter().enumerate() {
            if wall.width < 0 || wall.height < 0 {
                return Err(GridError::InvalidWall { index, wall });
            }
            if wall.x.checked_add(wall.width).is_none()
                || wall.y.checked_add(wall.height).is_none()
            {
                return Err(GridError::WallOverflow { index, wall });
            }
            if wall.contains(desc.start) {
                return Err(GridError::StartOnWall {
                    start: desc.start,
                    index,
                    wall,
                });
            }
            // Cells outside the grid are invalid anyway; only mark the overlap.
            for p in wall.range().clip(bounds) {
                if let Some(i) = bounds.index(p) {
                    blocked[i] = true;
                }
            }
        }

        for &g in &desc.goals {
            if !bounds.contains(g) {
                log::warn!("goal {g} lies outside the {}x{} grid", desc.rows, desc.cols);
            }
        }

        let goal_set = desc.goals.iter().copied().collect();
        Ok(Self {
            desc,
            bounds,
            blocked,
            goal_set,
        })
    }

    /// The description this model was built from.
    #[inline]
    pub fn description(&self) -> &GridDescription {
        &self.desc
    }

    /// Number of rows (height).
    #[inline]
    pub fn rows(&self) -> i32 {
        self.desc.rows
    }

    /// Number of columns (width).
    #[inline]
    pub fn cols(&self) -> i32 {
        self.desc.cols
    }

    /// The grid rectangle `[0, cols) × [0, rows)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Total number of cells, walls included.
    #[inline]
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    /// Always `false`: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.desc.start
    }

    /// Goals in their original order. Never empty.
    #[inline]
    pub fn goals(&self) -> &[Point] {
        &self.desc.goals
    }

    #[inline]
    pub fn walls(&self) -> &[Wall] {
        &self.desc.walls
    }

    /// Flat index of an in-bounds point, for per-cell side tables.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        self.bounds.index(p)
    }

    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Whether an in-bounds `p` is covered by a wall. Out-of-bounds points
    /// report `false`.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.bounds.index(p).is_some_and(|i| self.blocked[i])
    }

    /// `true` iff `p` is inside the grid and not covered by any wall.
    #[inline]
    pub fn is_valid(&self, p: Point) -> bool {
        self.bounds.index(p).is_some_and(|i| !self.blocked[i])
    }

    #[inline]
    pub fn is_goal(&self, p: Point) -> bool {
        self.goal_set.contains(&p)
    }

    /// The goal nearest to `p` by Manhattan distance. Ties go to the goal
    /// listed first.
    pub fn closest_goal(&self, p: Point) -> Point {
        let goals = &self.desc.goals;
        let mut best = goals[0];
        let mut best_dist = p.manhattan(best);
        for &g in &goals[1..] {
            let d = p.manhattan(g);
            if d < best_dist {
                best = g;
                best_dist = d;
            }
        }
        best
    }

    /// Valid neighbours of `p` in `order`, paired with the move reaching them.
    #[inline]
    pub fn successors(
        &self,
        p: Point,
        order: [Move; 4],
    ) -> impl Iterator<Item = (Move, Point)> + '_ {
        order
            .into_iter()
            .map(move |m| (m, m.apply(p)))
            .filter(|&(_, n)| self.is_valid(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desc(rows: i32, cols: i32, walls: Vec<Wall>) -> GridDescription {
        GridDescription {
            rows,
            cols,
            start: Point::new(0, 0),
            goals: vec![Point::new(cols - 1, rows - 1)],
            walls,
        }
    }

    #[test]
    fn bounds_follow_rows_and_cols() {
        let g = GridModel::new(desc(2, 5, vec![])).unwrap();
        assert!(g.is_valid(Point::new(4, 1)));
        assert!(!g.is_valid(Point::new(1, 4)));
        assert!(!g.is_valid(Point::new(5, 0)));
        assert!(!g.is_valid(Point::new(0, 2)));
        assert!(!g.is_valid(Point::new(-1, 0)));
        assert_eq!(g.len(), 10);
    }

    #[test]
    fn walls_cover_their_rectangle() {
        let g = GridModel::new(desc(5, 11, vec![Wall::new(2, 0, 2, 2), Wall::new(8, 0, 1, 2)]))
            .unwrap();
        for p in [(2, 0), (3, 0), (2, 1), (3, 1), (8, 0), (8, 1)] {
            let p = Point::from(p);
            assert!(g.is_wall(p), "{p} should be a wall");
            assert!(!g.is_valid(p));
        }
        for p in [(1, 0), (4, 0), (2, 2), (8, 2), (9, 0)] {
            assert!(g.is_valid(Point::from(p)));
        }
    }

    #[test]
    fn walls_are_clipped_to_bounds() {
        let g = GridModel::new(desc(3, 3, vec![Wall::new(2, 2, 10, 10)])).unwrap();
        assert!(g.is_wall(Point::new(2, 2)));
        assert!(!g.is_wall(Point::new(3, 3)));
        assert!(!g.is_valid(Point::new(3, 3)));
    }

    #[test]
    fn zero_sized_wall_covers_nothing() {
        let g = GridModel::new(desc(3, 3, vec![Wall::new(1, 1, 0, 3)])).unwrap();
        assert!(g.bounds().iter().all(|p| g.is_valid(p)));
    }

    #[test]
    fn closest_goal_prefers_first_on_tie() {
        let mut d = desc(5, 5, vec![]);
        d.goals = vec![Point::new(4, 0), Point::new(0, 4), Point::new(1, 1)];
        let g = GridModel::new(d).unwrap();
        assert_eq!(g.closest_goal(Point::new(0, 0)), Point::new(1, 1));
        assert_eq!(g.closest_goal(Point::new(2, 2)), Point::new(1, 1));
        // (4,0) and (0,4) are both 4 away from (4,4).
        assert_eq!(g.closest_goal(Point::new(4, 4)), Point::new(4, 0));
    }

    #[test]
    fn successors_follow_requested_order() {
        let g = GridModel::new(desc(3, 3, vec![Wall::new(1, 0, 1, 1)])).unwrap();
        let got: Vec<_> = g.successors(Point::new(1, 1), Move::ALL).collect();
        assert_eq!(
            got,
            vec![
                (Move::Left, Point::new(0, 1)),
                (Move::Down, Point::new(1, 2)),
                (Move::Right, Point::new(2, 1)),
            ]
        );
        let rev: Vec<_> = g.successors(Point::new(0, 0), Move::REVERSED).collect();
        assert_eq!(rev, vec![(Move::Down, Point::new(0, 1))]);
    }

    #[test]
    fn rejects_malformed_descriptions() {
        assert_eq!(
            GridModel::new(desc(0, 4, vec![])).unwrap_err(),
            GridError::InvalidSize { rows: 0, cols: 4 }
        );

        let mut d = desc(3, 3, vec![]);
        d.goals.clear();
        assert_eq!(GridModel::new(d).unwrap_err(), GridError::NoGoals);

        let mut d = desc(3, 3, vec![]);
        d.start = Point::new(3, 0);
        assert!(matches!(
            GridModel::new(d),
            Err(GridError::StartOutOfBounds { .. })
        ));

        let d = desc(3, 3, vec![Wall::new(1, 0, 1, 1), Wall::new(1, 1, -1, 2)]);
        assert!(matches!(
            GridModel::new(d),
            Err(GridError::InvalidWall { index: 1, .. })
        ));
    }

    #[test]
    fn rejects_wall_past_coordinate_range() {
        let d = desc(5, 5, vec![Wall::new(i32::MAX, 0, 5, 5)]);
        assert!(matches!(
            GridModel::new(d),
            Err(GridError::WallOverflow { index: 0, .. })
        ));
        let d = desc(5, 5, vec![Wall::new(1, 1, 1, 1), Wall::new(0, i32::MAX - 1, 2, 2)]);
        assert!(matches!(
            GridModel::new(d),
            Err(GridError::WallOverflow { index: 1, .. })
        ));
        // Reaching exactly i32::MAX still fits.
        let d = desc(5, 5, vec![Wall::new(i32::MAX - 3, 0, 3, 1)]);
        assert!(GridModel::new(d).is_ok());
    }

    #[test]
    fn rejects_start_under_a_wall() {
        let d = desc(3, 3, vec![Wall::new(1, 1, 1, 1), Wall::new(0, 0, 1, 1)]);
        let err = GridModel::new(d).unwrap_err();
        assert_eq!(
            err,
            GridError::StartOnWall {
                start: Point::new(0, 0),
                index: 1,
                wall: Wall::new(0, 0, 1, 1),
            }
        );
        assert!(err.to_string().contains("covered by wall #1"));
    }

    #[test]
    fn goal_membership() {
        let mut d = desc(4, 4, vec![]);
        d.goals = vec![Point::new(3, 3), Point::new(0, 3)];
        let g = GridModel::new(d).unwrap();
        assert!(g.is_goal(Point::new(0, 3)));
        assert!(!g.is_goal(Point::new(3, 0)));
    }
}
