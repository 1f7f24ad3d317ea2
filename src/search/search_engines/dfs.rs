//! Depth first search

use crate::search::search_engines::{SearchEngine, SearchResult, SearchSpace};

/// Same discovery discipline as [`BFS`](super::BFS) with a stack as the
/// frontier. The most recently discovered neighbor is expanded first, so
/// with the east, west, south, north neighbor order the search dives
/// north and south before it turns east.
#[derive(Debug, Default)]
pub struct DFS {}

impl DFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for DFS {
    fn search(&mut self, space: &mut SearchSpace<'_>) -> SearchResult {
        let mut stack = vec![space.start()];

        while let Some(current) = stack.pop() {
            if space.expand(current) {
                return SearchResult::Success;
            }

            for neighbor in space.neighbors(current) {
                if space.discover(neighbor, current) {
                    stack.push(neighbor);
                }
            }
        }

        SearchResult::ProvablyUnsolvable
    }
}
