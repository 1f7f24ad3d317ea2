use crate::search::{
    search_engines::{SearchResult, SearchStatistics},
    CellState, Coordinate, ExpansionObserver, Grid, Overlay, PathTracker, RunResult,
    SearchEngineName, SearchOutcome,
};
use smallvec::SmallVec;
use tracing::{debug, trace};

/// A [`SearchSpace`] holds everything a single run mutates: the overlay, the
/// path tracker (which doubles as the discovered set) and the statistics. It
/// is created fresh by the solver for every run and consumed when the run
/// ends, so nothing carries over between runs.
pub struct SearchSpace<'a> {
    grid: &'a Grid,
    overlay: Overlay,
    tracker: PathTracker,
    statistics: SearchStatistics,
    observer: &'a mut dyn ExpansionObserver,
}

impl<'a> SearchSpace<'a> {
    pub fn new(grid: &'a Grid, observer: &'a mut dyn ExpansionObserver) -> Self {
        Self {
            grid,
            overlay: Overlay::new(grid),
            tracker: PathTracker::new(grid.start()),
            statistics: SearchStatistics::new(),
            observer,
        }
    }

    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    pub fn start(&self) -> Coordinate {
        self.grid.start()
    }

    pub fn goal(&self) -> Coordinate {
        self.grid.end()
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn tracker(&self) -> &PathTracker {
        &self.tracker
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// See [`Grid::neighbors`].
    pub fn neighbors(&self, coordinate: Coordinate) -> SmallVec<[Coordinate; 4]> {
        self.grid.neighbors(coordinate)
    }

    pub fn is_discovered(&self, coordinate: Coordinate) -> bool {
        self.tracker.contains(coordinate)
    }

    /// Expand `coordinate`: mark it opened, count it and hand a snapshot to
    /// the observer. This is the only place snapshots are emitted during the
    /// search. Returns whether `coordinate` is the goal.
    pub fn expand(&mut self, coordinate: Coordinate) -> bool {
        self.overlay.mark_opened(coordinate);
        self.statistics.increment_expanded_nodes();
        trace!(%coordinate, expanded = self.statistics.expanded_nodes(), "expanding");
        self.observer.on_expansion(&self.overlay);
        coordinate == self.goal()
    }

    /// Register `coordinate` as reached from `predecessor` unless it has been
    /// discovered before. Returns whether it is new.
    pub fn discover(&mut self, coordinate: Coordinate, predecessor: Coordinate) -> bool {
        if self.tracker.contains(coordinate) {
            return false;
        }
        self.tracker.record(coordinate, predecessor);
        self.statistics.increment_generated_nodes();
        true
    }

    /// Replace the predecessor of an already discovered coordinate after a
    /// cheaper route to it was found.
    pub fn improve(&mut self, coordinate: Coordinate, predecessor: Coordinate) {
        debug_assert!(self.tracker.contains(coordinate));
        self.tracker.record(coordinate, predecessor);
        self.statistics.increment_improved_nodes();
        trace!(%coordinate, %predecessor, "found cheaper route");
    }

    /// Finish a maze whose start is its end without searching.
    pub fn into_trivial_result(mut self, engine: SearchEngineName) -> RunResult {
        let start = self.start();
        debug!(%start, "start and end coincide");
        self.overlay.set(start, CellState::Point);
        self.observer.on_expansion(&self.overlay);
        self.statistics.finalise_search();
        RunResult::new(engine, SearchOutcome::Found(vec![start]), self.overlay, 0)
    }

    /// Finish the run. On success the route is rebuilt from the tracker and
    /// drawn onto the overlay, and the observer gets one last snapshot.
    pub fn into_result(mut self, engine: SearchEngineName, result: SearchResult) -> RunResult {
        self.statistics.finalise_search();
        let nodes_expanded = self.statistics.expanded_nodes();

        let route = match result {
            SearchResult::Success => {
                let route = self.tracker.reconstruct(self.goal());
                debug_assert!(route.is_some(), "goal expanded without a recorded route");
                route
            }
            SearchResult::ProvablyUnsolvable => None,
        };

        match route {
            Some(route) => {
                for &coordinate in &route {
                    self.overlay.set(coordinate, CellState::Path);
                }
                self.overlay.set(self.start(), CellState::Start);
                self.overlay.set(self.goal(), CellState::End);
                self.observer.on_expansion(&self.overlay);
                debug!(path_length = route.len() - 1, "route found");
                RunResult::new(
                    engine,
                    SearchOutcome::Found(route),
                    self.overlay,
                    nodes_expanded,
                )
            }
            None => {
                debug!("no route found");
                RunResult::new(engine, SearchOutcome::Unreachable, self.overlay, nodes_expanded)
            }
        }
    }
}

impl std::fmt::Debug for SearchSpace<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchSpace")
            .field("grid", &self.grid)
            .field("overlay", &self.overlay)
            .field("tracker", &self.tracker)
            .field("statistics", &self.statistics)
            .finish_non_exhaustive()
    }
}
