use crate::search::Coordinate;
use std::collections::HashMap;

/// Maps each discovered coordinate to the coordinate it was reached from.
/// The root (the start of the search) is discovered but has no predecessor.
#[derive(Debug, Clone, Default)]
pub struct PathTracker {
    predecessors: HashMap<Coordinate, Option<Coordinate>>,
}

impl PathTracker {
    pub fn new(root: Coordinate) -> Self {
        Self {
            predecessors: HashMap::from([(root, None)]),
        }
    }

    /// Record (or overwrite) the predecessor of `coordinate`.
    pub fn record(&mut self, coordinate: Coordinate, predecessor: Coordinate) {
        self.predecessors.insert(coordinate, Some(predecessor));
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.predecessors.contains_key(&coordinate)
    }

    pub fn predecessor(&self, coordinate: Coordinate) -> Option<Coordinate> {
        self.predecessors.get(&coordinate).copied().flatten()
    }

    /// Walk the predecessors back from `target` to the root and return the
    /// route in root-to-target order. Returns `None` if `target` was never
    /// discovered or the chain loops.
    pub fn reconstruct(&self, target: Coordinate) -> Option<Vec<Coordinate>> {
        if !self.contains(target) {
            return None;
        }

        let mut route = vec![target];
        let mut current = target;
        while let Some(predecessor) = self.predecessor(current) {
            if route.len() > self.predecessors.len() {
                return None;
            }
            route.push(predecessor);
            current = predecessor;
        }
        route.reverse();
        Some(route)
    }
}
