use gridsearch_core::{GridModel, Move};

use crate::frontier::{Extract, FifoFrontier, Frontier};
use crate::report::SearchReport;
use crate::run::SearchRun;
use crate::strategy::Algorithm;
use crate::traits::SearchStrategy;

/// Breadth-first search.
///
/// Expands cells level by level in [`Move::ALL`] order. The first goal
/// taken off the queue is at minimum path length.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Bfs;

impl SearchStrategy for Bfs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bfs
    }

    fn search(&self, grid: &GridModel) -> SearchReport {
        let mut run = SearchRun::new(grid, Algorithm::Bfs);
        let mut queue = FifoFrontier::new();
        queue.push(run.root());

        while let Some(id) = queue.pop() {
            let cur = run.pos(id);
            if !run.mark_visited(cur) {
                continue;
            }
            if grid.is_goal(cur) {
                return run.succeed(id);
            }
            for (mv, next) in grid.successors(cur, Move::ALL) {
                if !run.is_visited(next) {
                    queue.push(run.child(id, mv));
                }
            }
        }

        run.fail()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{self, assert_sound};
    use gridsearch_core::Point;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn open_grid_shortest_path() {
        let grid = testkit::open_5x5();
        let r = Bfs.search(&grid);
        assert_eq!(r.goal, Some(Point::new(4, 4)));
        assert_eq!(r.path_len(), 8);
        // The goal is the only cell at distance 8, so every cell is processed.
        assert_eq!(r.nodes_visited, 25);
        assert_eq!(r.nodes_visited, r.visited.len());
        assert_sound(&grid, &r);
    }

    #[test]
    fn explores_in_move_order() {
        let grid = testkit::grid(3, 3, (1, 1), &[(2, 2)], &[]);
        let r = Bfs.search(&grid);
        assert_eq!(
            &r.visited[..5],
            &[
                Point::new(1, 1),
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(1, 2),
                Point::new(2, 1),
            ]
        );
        // Among the two shortest routes the one starting DOWN is queued first.
        assert_eq!(r.path, vec![Move::Down, Move::Right]);
    }

    #[test]
    fn start_on_goal() {
        let grid = testkit::grid(3, 3, (1, 1), &[(1, 1)], &[]);
        let r = Bfs.search(&grid);
        assert_eq!(r.goal, Some(Point::new(1, 1)));
        assert!(r.path.is_empty());
        assert_eq!(r.nodes_visited, 1);
        assert_eq!(r.nodes_generated, 1);
    }

    #[test]
    fn picks_nearest_of_two_goals() {
        let grid = testkit::two_goal_map();
        let r = Bfs.search(&grid);
        assert_sound(&grid, &r);
        assert_eq!(r.path_len() as u32, testkit::true_distance(&grid).unwrap());
    }

    #[test]
    fn enclosed_goal_fails() {
        let grid = testkit::enclosed_goal();
        let r = Bfs.search(&grid);
        assert_eq!(r.goal, None);
        assert!(r.path.is_empty());
        // Every open cell outside the box is processed.
        assert_eq!(r.nodes_visited, 49 - 8 - 1);
    }

    #[test]
    fn matches_independent_distance_on_random_grids() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let grid = testkit::random_grid(&mut rng, 9, 12, 2);
            let r = Bfs.search(&grid);
            assert_sound(&grid, &r);
            assert_eq!(r.goal.is_some(), testkit::true_distance(&grid).is_some());
            if let Some(d) = testkit::true_distance(&grid) {
                assert_eq!(r.path_len() as u32, d);
            }
        }
    }
}
