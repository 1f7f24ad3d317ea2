//! A* search with decrease-key on the open list.

use priority_queue::PriorityQueue;

use crate::search::{
    search_engines::{SearchEngine, SearchResult, SearchSpace},
    Coordinate, Heuristic, HeuristicValue, ManhattanDistance,
};
use std::{
    cmp::Reverse,
    collections::{HashMap, HashSet},
};
use tracing::trace;

/// A* search
///
/// Orders the frontier by `g + h` where `g` is the number of steps taken
/// from the start and `h` the heuristic estimate to the end. With the
/// Manhattan distance the estimate is consistent, so a cell is never
/// improved after it has been closed and the returned route is shortest.
///
/// A cell already on the open list whose cost drops is re-prioritised in
/// place instead of being pushed a second time.
#[derive(Debug)]
pub struct AStar {
    heuristic: Box<dyn Heuristic>,
}

impl AStar {
    pub fn new() -> Self {
        Self::with_heuristic(Box::new(ManhattanDistance))
    }

    pub fn with_heuristic(heuristic: Box<dyn Heuristic>) -> Self {
        Self { heuristic }
    }
}

impl Default for AStar {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchEngine for AStar {
    fn search(&mut self, space: &mut SearchSpace<'_>) -> SearchResult {
        let start = space.start();
        let goal = space.goal();
        let mut sequence = 0usize;
        let mut g_values: HashMap<Coordinate, HeuristicValue> = HashMap::from([(start, 0)]);
        let mut closed = HashSet::new();
        let mut open_list = PriorityQueue::new();
        open_list.push(
            start,
            Reverse((self.heuristic.evaluate(start, goal), sequence)),
        );

        while let Some((current, Reverse((f_value, _)))) = open_list.pop() {
            if !closed.insert(current) {
                continue;
            }
            trace!(%current, f_value, "popped from open list");
            if space.expand(current) {
                return SearchResult::Success;
            }

            let g_value = g_values[&current] + 1;
            for neighbor in space.neighbors(current) {
                if closed.contains(&neighbor) {
                    continue;
                }

                let improved = match g_values.get(&neighbor) {
                    None => space.discover(neighbor, current),
                    Some(&known) if g_value < known => {
                        space.improve(neighbor, current);
                        true
                    }
                    Some(_) => false,
                };
                if improved {
                    g_values.insert(neighbor, g_value);
                    sequence += 1;
                    let f_value = g_value + self.heuristic.evaluate(neighbor, goal);
                    // Replaces the stale entry if the neighbor is already queued.
                    open_list.push_increase(neighbor, Reverse((f_value, sequence)));
                }
            }
        }

        SearchResult::ProvablyUnsolvable
    }
}
