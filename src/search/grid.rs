//! The immutable maze model a search runs on.

use crate::config::MazeFormat;
use crate::parsed_types::{Endpoint, MazeDescription};
use crate::parsers::{parse_maze, MazeSyntaxError};
use crate::search::{Coordinate, Direction};
use smallvec::SmallVec;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use thiserror::Error;
use tracing::{info, trace};

#[derive(Debug, Error)]
pub enum MazeError {
    #[error("failed to read maze file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Syntax(#[from] MazeSyntaxError),
    #[error("maze has no {0} line")]
    MissingEndpoint(Endpoint),
    #[error("duplicate {endpoint} line at line {line}")]
    DuplicateEndpoint { endpoint: Endpoint, line: usize },
    #[error("maze has no rows")]
    Empty,
    #[error("row at line {line} has {found} cells, expected {expected}")]
    IrregularRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("{endpoint} {coordinate} is outside the {rows}x{cols} maze")]
    OutOfBounds {
        endpoint: Endpoint,
        coordinate: Coordinate,
        rows: usize,
        cols: usize,
    },
    #[error("{endpoint} {coordinate} is on a wall")]
    OnWall {
        endpoint: Endpoint,
        coordinate: Coordinate,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Wall,
    Open,
}

/// A rectangular maze with a designated start and end. A [`Grid`] can only be
/// obtained through validation, so its start and end are always in bounds and
/// open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major cell kinds
    cells: Vec<CellKind>,
    start: Coordinate,
    end: Coordinate,
}

impl Grid {
    pub fn new(
        cells: Vec<Vec<CellKind>>,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<Self, MazeError> {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(MazeError::Empty);
        }

        if let Some((index, row)) = cells.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(MazeError::IrregularRow {
                line: index + 1,
                expected: cols,
                found: row.len(),
            });
        }

        let grid = Self {
            rows,
            cols,
            cells: cells.into_iter().flatten().collect(),
            start,
            end,
        };
        grid.check_endpoint(Endpoint::Start, start)?;
        grid.check_endpoint(Endpoint::End, end)?;

        Ok(grid)
    }

    pub fn from_path(path: &Path, format: &MazeFormat) -> Result<Self, MazeError> {
        let text = std::fs::read_to_string(path).map_err(|source| MazeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "loading maze");
        Self::from_text(&text, format)
    }

    pub fn from_text(text: &str, format: &MazeFormat) -> Result<Self, MazeError> {
        let description = parse_maze(text)?;
        Self::from_description(&description, format)
    }

    pub fn from_description(
        description: &MazeDescription,
        format: &MazeFormat,
    ) -> Result<Self, MazeError> {
        let mut start = None;
        let mut end = None;
        for (line, coordinate_line) in description.coordinate_lines() {
            let endpoint = coordinate_line.endpoint();
            let slot = match endpoint {
                Endpoint::Start => &mut start,
                Endpoint::End => &mut end,
            };
            if slot.is_some() {
                return Err(MazeError::DuplicateEndpoint { endpoint, line });
            }
            *slot = Some(
                format
                    .coordinate_order
                    .coordinate(coordinate_line.first(), coordinate_line.second()),
            );
        }
        let start = start.ok_or(MazeError::MissingEndpoint(Endpoint::Start))?;
        let end = end.ok_or(MazeError::MissingEndpoint(Endpoint::End))?;

        let mut rows = description.rows().peekable();
        let cols = match rows.peek() {
            Some((_, glyphs)) => glyphs.len(),
            None => return Err(MazeError::Empty),
        };

        let mut cells = vec![];
        for (line, glyphs) in rows {
            if glyphs.len() != cols {
                return Err(MazeError::IrregularRow {
                    line,
                    expected: cols,
                    found: glyphs.len(),
                });
            }
            cells.push(
                glyphs
                    .iter()
                    .map(|&glyph| {
                        if glyph == format.wall_glyph {
                            CellKind::Wall
                        } else {
                            CellKind::Open
                        }
                    })
                    .collect(),
            );
        }

        let grid = Self::new(cells, start, end)?;
        info!(
            rows = grid.rows,
            cols = grid.cols,
            open_cells = grid.open_cells(),
            start = %grid.start,
            end = %grid.end,
            "loaded maze"
        );
        Ok(grid)
    }

    fn check_endpoint(&self, endpoint: Endpoint, coordinate: Coordinate) -> Result<(), MazeError> {
        match self.cell(coordinate) {
            None => Err(MazeError::OutOfBounds {
                endpoint,
                coordinate,
                rows: self.rows,
                cols: self.cols,
            }),
            Some(CellKind::Wall) => Err(MazeError::OnWall {
                endpoint,
                coordinate,
            }),
            Some(CellKind::Open) => Ok(()),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn end(&self) -> Coordinate {
        self.end
    }

    pub fn in_bounds(&self, coordinate: Coordinate) -> bool {
        coordinate.row < self.rows && coordinate.col < self.cols
    }

    /// The kind of the cell at `coordinate`, `None` when out of bounds.
    pub fn cell(&self, coordinate: Coordinate) -> Option<CellKind> {
        if self.in_bounds(coordinate) {
            Some(self.cells[coordinate.row * self.cols + coordinate.col])
        } else {
            None
        }
    }

    /// Out of bounds coordinates are not walls, they are simply not part of
    /// the grid.
    pub fn is_wall(&self, coordinate: Coordinate) -> bool {
        self.cell(coordinate) == Some(CellKind::Wall)
    }

    /// The in-bounds, open cells adjacent to `coordinate`, in
    /// [`Direction`] order.
    pub fn neighbors(&self, coordinate: Coordinate) -> SmallVec<[Coordinate; 4]> {
        let neighbors: SmallVec<[Coordinate; 4]> = Direction::iter()
            .filter_map(|direction| coordinate.step(direction))
            .filter(|&neighbor| self.cell(neighbor) == Some(CellKind::Open))
            .collect();
        trace!(%coordinate, count = neighbors.len(), "neighbors");
        neighbors
    }

    pub fn open_cells(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&kind| kind == CellKind::Open)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CoordinateOrder;
    use crate::test_utils::*;
    use std::io::Write;

    #[test]
    fn loads_open_grid() {
        let grid = grid_from_text(OPEN_3X3_TEXT);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.start(), Coordinate::new(0, 0));
        assert_eq!(grid.end(), Coordinate::new(2, 2));
        assert_eq!(grid.open_cells(), 9);
    }

    #[test]
    fn wall_glyph_is_configurable() {
        let format = MazeFormat {
            wall_glyph: 'X',
            ..MazeFormat::default()
        };
        let grid = Grid::from_text("start 0, 0\nend 0, 2\n.X.\n", &format).unwrap();
        assert!(grid.is_wall(Coordinate::new(0, 1)));
        assert!(!grid.is_wall(Coordinate::new(0, 0)));
    }

    #[test]
    fn column_first_coordinates() {
        let format = MazeFormat {
            coordinate_order: CoordinateOrder::ColumnRow,
            ..MazeFormat::default()
        };
        let grid = Grid::from_text("start 3, 0\nend 0, 1\n....\n....\n", &format).unwrap();
        assert_eq!(grid.start(), Coordinate::new(0, 3));
        assert_eq!(grid.end(), Coordinate::new(1, 0));
    }

    #[test]
    fn neighbors_skip_walls_and_edges() {
        let grid = grid_from_text(CORRIDOR_BLOCKED_TEXT);
        assert_eq!(
            grid.neighbors(Coordinate::new(0, 1)).as_slice(),
            &[Coordinate::new(0, 0)]
        );
        assert_eq!(
            grid.neighbors(Coordinate::new(0, 3)).as_slice(),
            &[Coordinate::new(0, 4)]
        );
    }

    #[test]
    fn out_of_bounds_is_not_a_wall() {
        let grid = grid_from_text(CORRIDOR_BLOCKED_TEXT);
        assert!(!grid.in_bounds(Coordinate::new(1, 0)));
        assert!(!grid.is_wall(Coordinate::new(1, 0)));
        assert_eq!(grid.cell(Coordinate::new(0, 5)), None);
    }

    #[test]
    fn missing_start_is_rejected() {
        let result = Grid::from_text("end 0, 0\n...\n", &MazeFormat::default());
        assert!(matches!(
            result,
            Err(MazeError::MissingEndpoint(Endpoint::Start))
        ));
    }

    #[test]
    fn missing_end_is_rejected() {
        let result = Grid::from_text("start 0, 0\n...\n", &MazeFormat::default());
        assert!(matches!(result, Err(MazeError::MissingEndpoint(Endpoint::End))));
    }

    #[test]
    fn duplicate_endpoint_is_rejected() {
        let result = Grid::from_text(
            "start 0, 0\nend 0, 2\nstart 0, 1\n...\n",
            &MazeFormat::default(),
        );
        assert!(matches!(
            result,
            Err(MazeError::DuplicateEndpoint {
                endpoint: Endpoint::Start,
                line: 3
            })
        ));
    }

    #[test]
    fn irregular_rows_are_rejected() {
        let result = Grid::from_text("start 0, 0\nend 0, 1\n...\n..\n", &MazeFormat::default());
        assert!(matches!(
            result,
            Err(MazeError::IrregularRow {
                line: 4,
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn no_rows_is_rejected() {
        let result = Grid::from_text("start 0, 0\nend 0, 0\n", &MazeFormat::default());
        assert!(matches!(result, Err(MazeError::Empty)));
    }

    #[test]
    fn end_out_of_bounds_is_rejected() {
        let result = Grid::from_text("start 0, 0\nend 3, 0\n...\n", &MazeFormat::default());
        assert!(matches!(
            result,
            Err(MazeError::OutOfBounds {
                endpoint: Endpoint::End,
                rows: 1,
                cols: 3,
                ..
            })
        ));
    }

    #[test]
    fn start_on_wall_is_rejected() {
        let result = Grid::from_text("start 0, 1\nend 0, 2\n.#.\n", &MazeFormat::default());
        assert!(matches!(
            result,
            Err(MazeError::OnWall {
                endpoint: Endpoint::Start,
                ..
            })
        ));
    }

    #[test]
    fn syntax_errors_carry_the_line() {
        let result = Grid::from_text("start 0, 0\nend one, 2\n...\n", &MazeFormat::default());
        match result {
            Err(MazeError::Syntax(error)) => assert_eq!(error.line, 2),
            other => panic!("expected a syntax error, got {:?}", other),
        }
    }

    #[test]
    fn from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", OPEN_3X3_TEXT).unwrap();
        let grid = Grid::from_path(file.path(), &MazeFormat::default()).unwrap();
        assert_eq!(grid, grid_from_text(OPEN_3X3_TEXT));
    }

    #[test]
    fn from_path_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Grid::from_path(&dir.path().join("missing.txt"), &MazeFormat::default());
        assert!(matches!(result, Err(MazeError::Io { .. })));
    }
}
