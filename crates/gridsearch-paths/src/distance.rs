//! Breadth-first distance maps.

use std::collections::VecDeque;

use gridsearch_core::{GridModel, Move, Point, Range};

/// Step distances from a set of sources to every valid cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceMap {
    bounds: Range,
    dist: Vec<Option<u32>>,
}

impl DistanceMap {
    /// Distance from the nearest source to `p`, `None` when `p` is out of
    /// bounds or unreachable.
    #[inline]
    pub fn at(&self, p: Point) -> Option<u32> {
        self.bounds.index(p).and_then(|i| self.dist[i])
    }

    /// Whether `p` was reached from any source.
    #[inline]
    pub fn reaches(&self, p: Point) -> bool {
        self.at(p).is_some()
    }

    /// Every reached cell with its distance, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, u32)> + '_ {
        self.bounds
            .iter()
            .zip(self.dist.iter())
            .filter_map(|(p, d)| d.map(|d| (p, d)))
    }
}

/// Compute a multi-source breadth-first distance map over `grid`.
///
/// Each step has cost 1. Sources that are walls or out of bounds are
/// skipped; duplicate sources count once.
pub fn distance_map(grid: &GridModel, sources: &[Point]) -> DistanceMap {
    let bounds = grid.bounds();
    let mut dist = vec![None; bounds.len()];
    let mut queue = VecDeque::new();

    for &src in sources {
        if !grid.is_valid(src) {
            continue;
        }
        let Some(si) = bounds.index(src) else {
            continue;
        };
        if dist[si].is_some() {
            continue;
        }
        dist[si] = Some(0);
        queue.push_back(src);
    }

    while let Some(cur) = queue.pop_front() {
        let Some(d) = bounds.index(cur).and_then(|i| dist[i]) else {
            continue;
        };
        for (_, next) in grid.successors(cur, Move::ALL) {
            let Some(ni) = bounds.index(next) else {
                continue;
            };
            if dist[ni].is_none() {
                dist[ni] = Some(d + 1);
                queue.push_back(next);
            }
        }
    }

    DistanceMap { bounds, dist }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit;

    #[test]
    fn open_grid_is_manhattan() {
        let grid = testkit::open_5x5();
        let map = distance_map(&grid, &[Point::new(0, 0)]);
        for p in grid.bounds() {
            assert_eq!(map.at(p), Some(p.manhattan(Point::new(0, 0)) as u32));
        }
        assert_eq!(map.at(Point::new(5, 0)), None);
    }

    #[test]
    fn walls_and_enclosures() {
        let grid = testkit::enclosed_goal();
        let map = distance_map(&grid, &[grid.start()]);
        assert_eq!(map.at(Point::new(5, 5)), None);
        assert_eq!(map.at(Point::new(4, 4)), None);
        assert!(!map.reaches(Point::new(5, 5)));
        assert_eq!(map.iter().count(), 40);
    }

    #[test]
    fn several_sources_take_the_minimum() {
        let grid = testkit::grid(1, 7, (0, 0), &[(6, 0)], &[]);
        let map = distance_map(&grid, &[Point::new(0, 0), Point::new(6, 0), Point::new(0, 0)]);
        assert_eq!(map.at(Point::new(3, 0)), Some(3));
        assert_eq!(map.at(Point::new(5, 0)), Some(1));
    }

    #[test]
    fn wall_source_is_ignored() {
        let grid = testkit::grid(3, 3, (0, 0), &[(2, 2)], &[(1, 1, 1, 1)]);
        let map = distance_map(&grid, &[Point::new(1, 1)]);
        assert_eq!(map.iter().count(), 0);
    }
}
