//! Provides the parser classifying a single line of a maze file.

use crate::parsed_types::MazeLine;
use crate::parsers::{parse_coordinate_line, parse_endpoint, ParseResult, Span};
use nom::combinator::{all_consuming, map, peek, rest};

/// Parses one line of a maze file (without its line terminator). A line that
/// begins with a `start`/`end` keyword must be a well-formed coordinate line;
/// any other line is a row of glyphs.
///
/// ## Example
/// ```
/// # use gridsearch::parsers::{parse_maze_line, preamble::*};
/// # use gridsearch::parsed_types::{CoordinateLine, Endpoint, MazeLine};
/// assert!(parse_maze_line("start 0, 1").is_value(MazeLine::Coordinate(CoordinateLine::new(Endpoint::Start, 0, 1))));
/// assert!(parse_maze_line("#. #").is_value(MazeLine::Row(vec!['#', '.', ' ', '#'])));
/// assert!(parse_maze_line("end 1, 1 extra").is_err());
///```
pub fn parse_maze_line<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, MazeLine> {
    let input = input.into();

    if peek(parse_endpoint)(input).is_ok() {
        return map(all_consuming(parse_coordinate_line), MazeLine::Coordinate)(input);
    }

    map(rest, |row: Span| MazeLine::Row(row.fragment().chars().collect()))(input)
}

impl crate::parsers::Parser for MazeLine {
    type Item = MazeLine;

    /// Parses a maze line.
    ///
    /// ## See also
    /// See [`parse_maze_line`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_maze_line(input)
    }
}
