//! Uniform random search

use crate::search::search_engines::{SearchEngine, SearchResult, SearchSpace};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

/// Expands a uniformly random member of the frontier at every step. Only
/// useful for comparison; seed it to make runs reproducible.
#[derive(Debug)]
pub struct RandomSearch {
    rng: StdRng,
}

impl RandomSearch {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => {
                debug!(seed, "seeding random search");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl SearchEngine for RandomSearch {
    fn search(&mut self, space: &mut SearchSpace<'_>) -> SearchResult {
        let mut frontier = vec![space.start()];

        while !frontier.is_empty() {
            let index = self.rng.gen_range(0..frontier.len());
            // Swap removal keeps the frontier an unordered bag.
            let current = frontier.swap_remove(index);

            if space.expand(current) {
                return SearchResult::Success;
            }

            for neighbor in space.neighbors(current) {
                if space.discover(neighbor, current) {
                    frontier.push(neighbor);
                }
            }
        }

        SearchResult::ProvablyUnsolvable
    }
}

#[cfg(test)]
mod tests {
    use crate::search::{MazeSolver, NullObserver, SearchEngineName};
    use crate::test_utils::*;

    #[test]
    fn same_seed_same_run() {
        let solver = MazeSolver::new(grid_from_text(DETOUR_TEXT)).with_random_seed(Some(7));
        let first = solver.solve(SearchEngineName::Random, &mut NullObserver);
        let second = solver.solve(SearchEngineName::Random, &mut NullObserver);
        assert_eq!(first, second);
    }

    #[test]
    fn every_seed_finds_a_valid_route() {
        let grid = grid_from_text(DETOUR_TEXT);
        for seed in 0..32 {
            let solver = MazeSolver::new(grid.clone()).with_random_seed(Some(seed));
            let result = solver.solve(SearchEngineName::Random, &mut NullObserver);
            assert!(result.is_found());
            assert_valid_route(&grid, result.route().unwrap());
        }
    }

    #[test]
    fn unseeded_runs_still_terminate() {
        let solver = MazeSolver::new(grid_from_text(ENCLOSED_END_TEXT));
        let result = solver.solve(SearchEngineName::Random, &mut NullObserver);
        assert!(!result.is_found());
        assert_eq!(result.nodes_expanded(), ENCLOSED_END_REACHABLE);
    }
}
