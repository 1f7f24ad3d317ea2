use crate::search::search_engines::{AStar, RandomSearch, SearchSpace, BFS, DFS, GBFS};
use serde::Serialize;
use std::fmt::Debug;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchResult {
    /// The end of the maze was expanded
    Success,
    /// The frontier ran dry before the end was reached
    ProvablyUnsolvable,
}

/// A search strategy. Implementations drive their own frontier and talk to the
/// maze exclusively through the [`SearchSpace`], which owns the overlay, the
/// path tracker and the statistics of the run.
pub trait SearchEngine: Debug {
    fn search(&mut self, space: &mut SearchSpace<'_>) -> SearchResult;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search engine {name:?}, expected one of: {expected}")]
pub struct UnknownEngineError {
    pub name: String,
    pub expected: String,
}

#[derive(
    clap::ValueEnum,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Display,
    EnumIter,
    EnumString,
)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum SearchEngineName {
    #[value(name = "breadth-first", alias = "bfs")]
    #[strum(to_string = "breadth-first", serialize = "bfs")]
    BreadthFirst,
    #[value(name = "depth-first", alias = "dfs")]
    #[strum(to_string = "depth-first", serialize = "dfs")]
    DepthFirst,
    #[value(name = "a-star", alias = "astar")]
    #[strum(to_string = "a-star", serialize = "astar")]
    AStar,
    #[value(name = "greedy", alias = "gbfs")]
    #[strum(to_string = "greedy", serialize = "gbfs")]
    Greedy,
    #[value(name = "random")]
    #[strum(to_string = "random")]
    Random,
}

impl SearchEngineName {
    /// Look an engine up by name, ignoring case. Accepts the canonical names
    /// and the short aliases.
    pub fn from_name(name: &str) -> Result<Self, UnknownEngineError> {
        Self::from_str(name.trim()).map_err(|_| UnknownEngineError {
            name: name.to_string(),
            expected: Self::iter()
                .map(|engine| engine.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }

    /// Human readable name, used in menus.
    pub fn label(&self) -> &'static str {
        match self {
            SearchEngineName::BreadthFirst => "Breadth First Search (BFS)",
            SearchEngineName::DepthFirst => "Depth First Search (DFS)",
            SearchEngineName::AStar => "A* Search",
            SearchEngineName::Greedy => "Greedy Best-First Search",
            SearchEngineName::Random => "Random Search",
        }
    }

    /// Whether the engine always reports a shortest route.
    pub fn is_optimal(&self) -> bool {
        matches!(
            self,
            SearchEngineName::BreadthFirst | SearchEngineName::AStar
        )
    }

    /// `random_seed` only matters for [`SearchEngineName::Random`].
    pub fn create(&self, random_seed: Option<u64>) -> Box<dyn SearchEngine> {
        match self {
            SearchEngineName::BreadthFirst => Box::new(BFS::new()),
            SearchEngineName::DepthFirst => Box::new(DFS::new()),
            SearchEngineName::AStar => Box::new(AStar::new()),
            SearchEngineName::Greedy => Box::new(GBFS::new()),
            SearchEngineName::Random => Box::new(RandomSearch::new(random_seed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_round_trip() {
        for engine in SearchEngineName::iter() {
            assert_eq!(SearchEngineName::from_name(&engine.to_string()), Ok(engine));
        }
    }

    #[test]
    fn aliases_and_case_are_accepted() {
        assert_eq!(
            SearchEngineName::from_name("BFS"),
            Ok(SearchEngineName::BreadthFirst)
        );
        assert_eq!(
            SearchEngineName::from_name("AStar"),
            Ok(SearchEngineName::AStar)
        );
        assert_eq!(
            SearchEngineName::from_name(" Depth-First "),
            Ok(SearchEngineName::DepthFirst)
        );
        assert_eq!(
            SearchEngineName::from_name("gbfs"),
            Ok(SearchEngineName::Greedy)
        );
    }

    #[test]
    fn unknown_name_lists_the_choices() {
        let error = SearchEngineName::from_name("dijkstra").unwrap_err();
        assert_eq!(error.name, "dijkstra");
        assert_eq!(
            error.expected,
            "breadth-first, depth-first, a-star, greedy, random"
        );
    }

    #[test]
    fn clap_names_match_display() {
        use clap::ValueEnum;
        for engine in SearchEngineName::value_variants() {
            let possible_value = engine.to_possible_value().unwrap();
            assert_eq!(possible_value.get_name(), engine.to_string());
        }
        assert_eq!(
            <SearchEngineName as ValueEnum>::from_str("astar", true),
            Ok(SearchEngineName::AStar)
        );
    }

    #[test]
    fn serializes_as_kebab_case() {
        assert_eq!(
            serde_json::to_string(&SearchEngineName::BreadthFirst).unwrap(),
            "\"breadth-first\""
        );
        assert_eq!(
            serde_json::to_string(&SearchEngineName::AStar).unwrap(),
            "\"a-star\""
        );
    }
}
