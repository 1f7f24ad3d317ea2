//! Contains the [`MazeLine`] type, the classification of a single line of a
//! maze file.

use crate::parsed_types::CoordinateLine;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeLine {
    /// A `start`/`end` line
    Coordinate(CoordinateLine),
    /// A literal row of cell glyphs
    Row(Vec<char>),
}

/// A [`MazeLine`] together with its 1-based line number in the source text,
/// kept so that load errors can point at the offending line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedLine {
    pub number: usize,
    pub line: MazeLine,
}

impl NumberedLine {
    pub const fn new(number: usize, line: MazeLine) -> Self {
        Self { number, line }
    }
}
