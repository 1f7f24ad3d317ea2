mod astar;
mod bfs;
mod dfs;
mod gbfs;
mod random;
mod search_engine;
mod search_space;
mod search_statistics;

pub use astar::AStar;
pub use bfs::BFS;
pub use dfs::DFS;
pub use gbfs::GBFS;
pub use random::RandomSearch;
pub use search_engine::{SearchEngine, SearchEngineName, SearchResult, UnknownEngineError};
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
