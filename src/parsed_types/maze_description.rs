//! Contains the [`MazeDescription`] type.

use crate::parsed_types::{CoordinateLine, MazeLine, NumberedLine};

/// All meaningful lines of a maze file, in file order. Blank lines are not
/// kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MazeDescription {
    lines: Vec<NumberedLine>,
}

impl MazeDescription {
    pub const fn new(lines: Vec<NumberedLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[NumberedLine] {
        &self.lines
    }

    /// Iterate over the coordinate lines with their line numbers.
    pub fn coordinate_lines(&self) -> impl Iterator<Item = (usize, &CoordinateLine)> {
        self.lines.iter().filter_map(|numbered| match &numbered.line {
            MazeLine::Coordinate(coordinate) => Some((numbered.number, coordinate)),
            MazeLine::Row(_) => None,
        })
    }

    /// Iterate over the glyph rows with their line numbers.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &[char])> {
        self.lines.iter().filter_map(|numbered| match &numbered.line {
            MazeLine::Row(glyphs) => Some((numbered.number, glyphs.as_slice())),
            MazeLine::Coordinate(_) => None,
        })
    }
}
