use crate::search::Coordinate;
use std::fmt::Debug;

/// Edge costs are unit, so estimates and path costs are whole numbers.
pub type HeuristicValue = usize;

pub trait Heuristic: Debug {
    /// Estimate the remaining cost from `coordinate` to `goal`.
    fn evaluate(&self, coordinate: Coordinate, goal: Coordinate) -> HeuristicValue;
}
