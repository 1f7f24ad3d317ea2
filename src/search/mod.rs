//! The search engine: the grid model, the per-run overlay and path tracker,
//! and the strategies that explore a maze from its start to its end.

mod coordinate;
mod grid;
pub mod heuristics;
mod observer;
mod overlay;
mod path_tracker;
pub mod search_engines;
mod solver;
mod verbosity;

pub use coordinate::{Coordinate, Direction};
pub use grid::{CellKind, Grid, MazeError};
pub use heuristics::{Heuristic, HeuristicValue, ManhattanDistance};
pub use observer::{ExpansionObserver, NullObserver};
pub use overlay::{CellState, Overlay};
pub use path_tracker::PathTracker;
pub use search_engines::{
    SearchEngine, SearchEngineName, SearchResult, SearchSpace, SearchStatistics,
    UnknownEngineError,
};
pub use solver::{MazeSolver, RunResult, RunSummary, SearchOutcome};
pub use verbosity::Verbosity;
