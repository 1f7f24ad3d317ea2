//! Per-run render annotation of the grid.

use crate::search::{CellKind, Coordinate, Grid};
use serde::Serialize;

/// What a cell looks like in a snapshot of a search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellState {
    /// Open cell the search has not expanded
    Default,
    Wall,
    /// Expanded by the search
    Opened,
    /// Part of the reconstructed route
    Path,
    Start,
    End,
    /// The single cell of a maze whose start is its end
    Point,
}

/// A grid-shaped array of [`CellState`]s. A fresh overlay is built for every
/// run so no marks leak from one run into the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Overlay {
    /// Walls come from the grid, the start and end cells are marked, and every
    /// other cell is [`CellState::Default`].
    pub fn new(grid: &Grid) -> Self {
        let mut cells = Vec::with_capacity(grid.rows() * grid.cols());
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                cells.push(match grid.cell(Coordinate::new(row, col)) {
                    Some(CellKind::Wall) => CellState::Wall,
                    _ => CellState::Default,
                });
            }
        }

        let mut overlay = Self {
            rows: grid.rows(),
            cols: grid.cols(),
            cells,
        };
        overlay.set(grid.start(), CellState::Start);
        overlay.set(grid.end(), CellState::End);
        overlay
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, coordinate: Coordinate) -> Option<CellState> {
        self.index(coordinate).map(|index| self.cells[index])
    }

    /// The single mutation entry point. Writing outside the overlay is a bug
    /// in the caller: debug builds panic, release builds ignore the write.
    pub fn set(&mut self, coordinate: Coordinate, state: CellState) {
        debug_assert!(
            self.index(coordinate).is_some(),
            "coordinate {} outside the overlay",
            coordinate
        );
        if let Some(index) = self.index(coordinate) {
            self.cells[index] = state;
        }
    }

    /// Mark an expanded cell. The start and end cells keep their marks.
    pub fn mark_opened(&mut self, coordinate: Coordinate) {
        match self.get(coordinate) {
            Some(CellState::Start | CellState::End | CellState::Point) | None => {}
            Some(_) => self.set(coordinate, CellState::Opened),
        }
    }

    /// Iterate over the rows of the overlay, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.cols)
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    /// Every coordinate currently in `state`, in row-major order.
    pub fn coordinates_in(&self, state: CellState) -> Vec<Coordinate> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell == state)
            .map(|(index, _)| Coordinate::new(index / self.cols, index % self.cols))
            .collect()
    }

    fn index(&self, coordinate: Coordinate) -> Option<usize> {
        if coordinate.row < self.rows && coordinate.col < self.cols {
            Some(coordinate.row * self.cols + coordinate.col)
        } else {
            None
        }
    }
}
