use crate::{
    config::MazeFormat,
    search::{
        search_engines::SearchSpace, Coordinate, ExpansionObserver, Grid, MazeError, Overlay,
        SearchEngineName, UnknownEngineError,
    },
};
use serde::Serialize;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The route from start to end, both included
    Found(Vec<Coordinate>),
    Unreachable,
}

/// What a single run leaves behind. Built once when the run ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    engine: SearchEngineName,
    outcome: SearchOutcome,
    overlay: Overlay,
    nodes_expanded: usize,
}

impl RunResult {
    pub fn new(
        engine: SearchEngineName,
        outcome: SearchOutcome,
        overlay: Overlay,
        nodes_expanded: usize,
    ) -> Self {
        Self {
            engine,
            outcome,
            overlay,
            nodes_expanded,
        }
    }

    pub fn engine(&self) -> SearchEngineName {
        self.engine
    }

    pub fn outcome(&self) -> &SearchOutcome {
        &self.outcome
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn into_overlay(self) -> Overlay {
        self.overlay
    }

    pub fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    pub fn is_found(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Found(_))
    }

    pub fn route(&self) -> Option<&[Coordinate]> {
        match &self.outcome {
            SearchOutcome::Found(route) => Some(route),
            SearchOutcome::Unreachable => None,
        }
    }

    /// Number of steps on the route. Zero when start and end coincide and
    /// when no route exists.
    pub fn path_length(&self) -> usize {
        self.route().map_or(0, |route| route.len().saturating_sub(1))
    }

    pub fn summary(&self, include_route: bool) -> RunSummary {
        RunSummary {
            engine: self.engine,
            found: self.is_found(),
            nodes_expanded: self.nodes_expanded,
            path_length: self.path_length(),
            route: if include_route {
                self.route().map(<[Coordinate]>::to_vec)
            } else {
                None
            },
        }
    }
}

/// Serializable digest of a [`RunResult`], printed by the command line front
/// end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RunSummary {
    pub engine: SearchEngineName,
    pub found: bool,
    pub nodes_expanded: usize,
    pub path_length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<Vec<Coordinate>>,
}

/// Owns a loaded maze and runs any strategy on it. Runs are independent:
/// every call to [`MazeSolver::solve`] starts from a clean overlay.
#[derive(Debug, Clone)]
pub struct MazeSolver {
    grid: Grid,
    random_seed: Option<u64>,
}

impl MazeSolver {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            random_seed: None,
        }
    }

    pub fn with_random_seed(mut self, random_seed: Option<u64>) -> Self {
        self.random_seed = random_seed;
        self
    }

    pub fn from_path(path: &Path, format: &MazeFormat) -> Result<Self, MazeError> {
        Ok(Self::new(Grid::from_path(path, format)?))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn solve(
        &self,
        engine: SearchEngineName,
        observer: &mut dyn ExpansionObserver,
    ) -> RunResult {
        info!(
            engine = %engine,
            rows = self.grid.rows(),
            cols = self.grid.cols(),
            "solving maze"
        );
        let mut space = SearchSpace::new(&self.grid, observer);

        if self.grid.start() == self.grid.end() {
            return space.into_trivial_result(engine);
        }

        let result = engine.create(self.random_seed).search(&mut space);
        space.into_result(engine, result)
    }

    /// Like [`MazeSolver::solve`] but with the strategy given by name.
    pub fn solve_by_name(
        &self,
        name: &str,
        observer: &mut dyn ExpansionObserver,
    ) -> Result<RunResult, UnknownEngineError> {
        let engine = SearchEngineName::from_name(name)?;
        Ok(self.solve(engine, observer))
    }
}
