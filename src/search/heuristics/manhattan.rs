use crate::search::{heuristics::Heuristic, Coordinate, HeuristicValue};

/// `|goal.row - row| + |goal.col - col|`, admissible and consistent for
/// 4-connected unit-cost grids.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManhattanDistance;

impl Heuristic for ManhattanDistance {
    fn evaluate(&self, coordinate: Coordinate, goal: Coordinate) -> HeuristicValue {
        coordinate.manhattan_distance(goal)
    }
}
