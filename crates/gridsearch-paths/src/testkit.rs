//! Grid builders and assertions shared by the strategy tests.

use gridsearch_core::{GridDescription, GridModel, Point, Wall};
use rand::Rng;

use crate::distance::distance_map;
use crate::report::SearchReport;

pub(crate) fn grid(
    rows: i32,
    cols: i32,
    start: (i32, i32),
    goals: &[(i32, i32)],
    walls: &[(i32, i32, i32, i32)],
) -> GridModel {
    GridModel::new(GridDescription {
        rows,
        cols,
        start: Point::from(start),
        goals: goals.iter().copied().map(Point::from).collect(),
        walls: walls
            .iter()
            .map(|&(x, y, w, h)| Wall::new(x, y, w, h))
            .collect(),
    })
    .unwrap()
}

/// 5×5, no walls, (0,0) to (4,4).
pub(crate) fn open_5x5() -> GridModel {
    grid(5, 5, (0, 0), &[(4, 4)], &[])
}

/// The goal at (5,5) is boxed in on all four sides.
pub(crate) fn enclosed_goal() -> GridModel {
    grid(
        7,
        7,
        (0, 0),
        &[(5, 5)],
        &[(4, 4, 3, 1), (4, 6, 3, 1), (4, 5, 1, 1), (6, 5, 1, 1)],
    )
}

/// Five rows by eleven columns with two vertical walls and two goals.
pub(crate) fn two_goal_map() -> GridModel {
    grid(
        5,
        11,
        (0, 1),
        &[(7, 0), (10, 3)],
        &[(2, 0, 2, 2), (8, 0, 1, 2), (10, 0, 1, 1), (5, 2, 1, 3)],
    )
}

/// A random grid with small rectangular walls; start and goals are kept
/// clear but reachability is not guaranteed.
pub(crate) fn random_grid(rng: &mut impl Rng, rows: i32, cols: i32, goals: usize) -> GridModel {
    let start = Point::new(rng.random_range(0..cols), rng.random_range(0..rows));
    let goals: Vec<Point> = (0..goals)
        .map(|_| Point::new(rng.random_range(0..cols), rng.random_range(0..rows)))
        .collect();
    let wall_count = (rows * cols) as usize / 6;
    let walls = (0..wall_count)
        .map(|_| {
            Wall::new(
                rng.random_range(0..cols),
                rng.random_range(0..rows),
                rng.random_range(1..=2),
                rng.random_range(1..=2),
            )
        })
        .filter(|w| !w.contains(start) && goals.iter().all(|&g| !w.contains(g)))
        .collect();
    GridModel::new(GridDescription {
        rows,
        cols,
        start,
        goals,
        walls,
    })
    .unwrap()
}

/// Shortest distance from the start to any goal, by independent BFS.
pub(crate) fn true_distance(grid: &GridModel) -> Option<u32> {
    let map = distance_map(grid, &[grid.start()]);
    grid.goals().iter().filter_map(|&g| map.at(g)).min()
}

/// The path stays on valid cells, moves one step at a time and ends on
/// the reported goal; ledger-based counters agree with the visited list.
pub(crate) fn assert_sound(grid: &GridModel, report: &SearchReport) {
    let cells = report.coordinates(grid.start());
    match report.goal {
        Some(goal) => {
            assert!(grid.is_goal(goal), "{goal} is not a goal");
            assert_eq!(cells.last(), Some(&goal));
            for p in &cells {
                assert!(grid.is_valid(*p), "path crosses invalid cell {p}");
            }
            for w in cells.windows(2) {
                assert_eq!(w[0].manhattan(w[1]), 1);
            }
        }
        None => assert!(report.path.is_empty()),
    }
    let mut unique = report.visited.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), report.visited.len());
}
