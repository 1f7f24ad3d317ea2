//! Breadth first search

use crate::search::search_engines::{SearchEngine, SearchResult, SearchSpace};
use std::collections::VecDeque;

/// Expands cells in order of their distance from the start, so the first
/// route found is a shortest one.
#[derive(Debug, Default)]
pub struct BFS {}

impl BFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for BFS {
    fn search(&mut self, space: &mut SearchSpace<'_>) -> SearchResult {
        let mut queue = VecDeque::from([space.start()]);

        while let Some(current) = queue.pop_front() {
            if space.expand(current) {
                return SearchResult::Success;
            }

            for neighbor in space.neighbors(current) {
                if space.discover(neighbor, current) {
                    queue.push_back(neighbor);
                }
            }
        }

        SearchResult::ProvablyUnsolvable
    }
}

#[cfg(test)]
mod tests {
    use crate::search::{CellState, Coordinate, SearchEngineName};
    use crate::test_utils::*;

    #[test]
    fn open_grid_expands_every_cell() {
        let result = solve_text(OPEN_3X3_TEXT, SearchEngineName::BreadthFirst);
        assert!(result.is_found());
        assert_eq!(result.path_length(), 4);
        assert_eq!(result.nodes_expanded(), 9);
    }

    #[test]
    fn prefers_east_before_south() {
        let result = solve_text(OPEN_3X3_TEXT, SearchEngineName::BreadthFirst);
        // (2, 2) is first discovered from (1, 2), which came from (0, 2)
        assert_eq!(
            result.route().unwrap(),
            &[
                Coordinate::new(0, 0),
                Coordinate::new(0, 1),
                Coordinate::new(0, 2),
                Coordinate::new(1, 2),
                Coordinate::new(2, 2),
            ]
        );
    }

    #[test]
    fn finds_shortest_route_around_walls() {
        let result = solve_text(DETOUR_TEXT, SearchEngineName::BreadthFirst);
        assert_eq!(result.path_length(), DETOUR_SHORTEST);
        assert_valid_route(&grid_from_text(DETOUR_TEXT), result.route().unwrap());
    }

    #[test]
    fn annotates_route_on_overlay() {
        let result = solve_text(OPEN_3X3_TEXT, SearchEngineName::BreadthFirst);
        let overlay = result.overlay();
        assert_eq!(overlay.get(Coordinate::new(0, 0)), Some(CellState::Start));
        assert_eq!(overlay.get(Coordinate::new(2, 2)), Some(CellState::End));
        assert_eq!(overlay.count(CellState::Path), 3);
        assert_eq!(overlay.count(CellState::Opened), 4);
    }
}
