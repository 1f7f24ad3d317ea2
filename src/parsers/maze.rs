//! Provides the parser for a whole maze file.

use crate::parsed_types::{MazeDescription, NumberedLine};
use crate::parsers::{parse_maze_line, Span};
use thiserror::Error;

/// A line of the maze source that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed line {line}, column {column}: {text:?}")]
pub struct MazeSyntaxError {
    /// 1-based line number
    pub line: usize,
    /// 1-based column at which the parser gave up
    pub column: usize,
    /// The offending line
    pub text: String,
}

/// Splits `text` into lines and parses each one, skipping blank lines.
///
/// ## Example
/// ```
/// # use gridsearch::parsers::parse_maze;
/// let description = parse_maze("start 0, 0\nend 0, 2\n   \n").unwrap();
/// assert_eq!(description.lines().len(), 3);
/// assert_eq!(description.rows().count(), 1);
///
/// let error = parse_maze("start 0, 0\nend zero, 2\n").unwrap_err();
/// assert_eq!(error.line, 2);
///```
pub fn parse_maze(text: &str) -> Result<MazeDescription, MazeSyntaxError> {
    let mut lines = vec![];

    for (index, raw_line) in text.lines().enumerate() {
        if raw_line.is_empty() {
            continue;
        }

        match parse_maze_line(Span::new(raw_line)) {
            Ok((_, line)) => lines.push(NumberedLine::new(index + 1, line)),
            Err(e) => {
                let column = match &e {
                    nom::Err::Error(inner) | nom::Err::Failure(inner) => {
                        nom_greedyerror::error_position(inner).unwrap_or(0) + 1
                    }
                    nom::Err::Incomplete(_) => 1,
                };
                return Err(MazeSyntaxError {
                    line: index + 1,
                    column,
                    text: raw_line.to_string(),
                });
            }
        }
    }

    Ok(MazeDescription::new(lines))
}
