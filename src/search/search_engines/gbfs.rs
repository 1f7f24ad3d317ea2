//! This module implements the greedy best-first search algorithm.

use priority_queue::PriorityQueue;

use crate::search::{
    search_engines::{SearchEngine, SearchResult, SearchSpace},
    Heuristic, ManhattanDistance,
};
use std::cmp::Reverse;

/// Greedy best-first search
///
/// Always expands the frontier cell with the smallest heuristic estimate,
/// ignoring the cost already paid to reach it. Ties go to the cell that
/// entered the frontier first. Cells are queued once, when first discovered.
#[derive(Debug)]
pub struct GBFS {
    heuristic: Box<dyn Heuristic>,
}

impl GBFS {
    pub fn new() -> Self {
        Self::with_heuristic(Box::new(ManhattanDistance))
    }

    pub fn with_heuristic(heuristic: Box<dyn Heuristic>) -> Self {
        Self { heuristic }
    }
}

impl Default for GBFS {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchEngine for GBFS {
    fn search(&mut self, space: &mut SearchSpace<'_>) -> SearchResult {
        let goal = space.goal();
        let mut sequence = 0usize;
        let mut priority_queue = PriorityQueue::new();
        priority_queue.push(
            space.start(),
            Reverse((self.heuristic.evaluate(space.start(), goal), sequence)),
        );

        while let Some((current, _)) = priority_queue.pop() {
            if space.expand(current) {
                return SearchResult::Success;
            }

            for neighbor in space.neighbors(current) {
                if space.discover(neighbor, current) {
                    sequence += 1;
                    let h_value = self.heuristic.evaluate(neighbor, goal);
                    priority_queue.push(neighbor, Reverse((h_value, sequence)));
                }
            }
        }

        SearchResult::ProvablyUnsolvable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{Coordinate, HeuristicValue, MazeSolver, NullObserver, SearchEngineName};
    use crate::test_utils::*;

    #[test]
    fn heads_straight_for_the_goal() {
        let result = solve_text(OPEN_3X3_TEXT, SearchEngineName::Greedy);
        assert_eq!(result.nodes_expanded(), 5);
        assert_eq!(result.path_length(), 4);
    }

    #[test]
    fn expands_fewer_cells_than_breadth_first() {
        let greedy = solve_text(DETOUR_TEXT, SearchEngineName::Greedy);
        let bfs = solve_text(DETOUR_TEXT, SearchEngineName::BreadthFirst);
        assert!(greedy.is_found());
        assert!(greedy.nodes_expanded() <= bfs.nodes_expanded());
        assert_valid_route(&grid_from_text(DETOUR_TEXT), greedy.route().unwrap());
    }

    #[derive(Debug)]
    struct Blind;

    impl Heuristic for Blind {
        fn evaluate(&self, _: Coordinate, _: Coordinate) -> HeuristicValue {
            0
        }
    }

    #[test]
    fn constant_heuristic_degrades_to_breadth_first() {
        let grid = grid_from_text(OPEN_3X3_TEXT);
        let mut engine = GBFS::with_heuristic(Box::new(Blind));
        let mut observer = NullObserver;
        let mut space = SearchSpace::new(&grid, &mut observer);
        let result = engine.search(&mut space);
        let blind = space.into_result(SearchEngineName::Greedy, result);

        let bfs = MazeSolver::new(grid.clone())
            .solve(SearchEngineName::BreadthFirst, &mut NullObserver);
        assert_eq!(blind.nodes_expanded(), bfs.nodes_expanded());
        assert_eq!(blind.route(), bfs.route());
    }
}
