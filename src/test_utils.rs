use crate::{
    config::MazeFormat,
    search::{Coordinate, Grid, MazeSolver, NullObserver, RunResult, SearchEngineName},
};
use std::collections::{HashMap, HashSet};

pub const OPEN_3X3_TEXT: &str = "start 0, 0
end 2, 2
...
...
...
";

/// A 1x5 corridor cut in half by a wall.
pub const CORRIDOR_BLOCKED_TEXT: &str = "start 0, 0
end 0, 4
..#..
";

pub const SAME_START_END_TEXT: &str = "start 1, 1
end 1, 1
...
...
...
";

/// The end sits in the bottom right corner with walls to its west and north.
pub const ENCLOSED_END_TEXT: &str = "start 0, 0
end 2, 4
.....
....#
...#.
";

pub const ENCLOSED_END_REACHABLE: usize = 12;

/// The only shortest route runs along the top row and down the right
/// column. A longer one winds through the left and the middle.
pub const DETOUR_TEXT: &str = "start 0, 0
end 4, 4
.....
.###.
.#...
.#.#.
...#.
";

pub const DETOUR_SHORTEST: usize = 8;

pub fn grid_from_text(text: &str) -> Grid {
    Grid::from_text(text, &MazeFormat::default()).unwrap()
}

/// Solve with a fixed seed so random search is reproducible.
pub fn solve_text(text: &str, engine: SearchEngineName) -> RunResult {
    MazeSolver::new(grid_from_text(text))
        .with_random_seed(Some(0))
        .solve(engine, &mut NullObserver)
}

/// A route must lead from start to end through open, pairwise adjacent
/// cells without visiting any cell twice.
pub fn assert_valid_route(grid: &Grid, route: &[Coordinate]) {
    assert_eq!(route.first(), Some(&grid.start()));
    assert_eq!(route.last(), Some(&grid.end()));
    for coordinate in route {
        assert!(grid.in_bounds(*coordinate), "{coordinate} out of bounds");
        assert!(!grid.is_wall(*coordinate), "{coordinate} is a wall");
    }
    for pair in route.windows(2) {
        assert!(
            pair[0].is_adjacent_to(pair[1]),
            "{} and {} are not adjacent",
            pair[0],
            pair[1]
        );
    }
    let distinct: HashSet<_> = route.iter().collect();
    assert_eq!(distinct.len(), route.len(), "route revisits a cell");
}

fn open_cells(grid: &Grid) -> Vec<Coordinate> {
    (0..grid.rows())
        .flat_map(|row| (0..grid.cols()).map(move |col| Coordinate::new(row, col)))
        .filter(|coordinate| !grid.is_wall(*coordinate))
        .collect()
}

fn is_step(grid: &Grid, from: Coordinate, to: Coordinate) -> bool {
    from.is_adjacent_to(to) && !grid.is_wall(from) && !grid.is_wall(to)
}

/// Distances from the start computed by relaxing every pair of open cells
/// until nothing changes.
fn reference_distances(grid: &Grid) -> HashMap<Coordinate, usize> {
    let cells = open_cells(grid);
    let mut distances = HashMap::from([(grid.start(), 0)]);
    let mut changed = true;
    while changed {
        changed = false;
        for &from in &cells {
            let Some(&distance) = distances.get(&from) else {
                continue;
            };
            for &to in &cells {
                if !is_step(grid, from, to) {
                    continue;
                }
                let known = distances.get(&to).copied().unwrap_or(usize::MAX);
                if distance + 1 < known {
                    distances.insert(to, distance + 1);
                    changed = true;
                }
            }
        }
    }
    distances
}

/// Shortest number of steps from start to end, or `None` if unreachable.
pub fn reference_distance(grid: &Grid) -> Option<usize> {
    reference_distances(grid).get(&grid.end()).copied()
}

/// Number of open cells reachable from the start, the start included.
pub fn reachable_open_cells(grid: &Grid) -> usize {
    reference_distances(grid).len()
}
