//! Parsers for the line-oriented maze format, built with `nom`.
//!
//! A maze file consists of a `start <a>, <b>` line, an `end <a>, <b>` line
//! and the literal rows of the maze. The keywords are case-insensitive and
//! the two integers may be separated by a comma, whitespace, or both.

mod coordinate_line;
mod maze;
mod maze_line;
mod test_helpers;
mod utilities;

pub use test_helpers::UnwrapValue;

pub trait Parser {
    type Item;

    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item>;

    /// Parse a string slice into the desired type. Discards any remaining
    /// input.
    fn from_str(input: &str) -> Result<Self::Item, nom::Err<ParseError>> {
        let (_, value) = Self::parse(input)?;
        Ok(value)
    }
}

pub type Span<'a> = nom_locate::LocatedSpan<&'a str>;

pub type ParseError<'a> = nom_greedyerror::GreedyError<Span<'a>, nom::error::ErrorKind>;

pub type ParseResult<'a, T, E = ParseError<'a>> = nom::IResult<Span<'a>, T, E>;

/// Re-exports commonly used types.
pub mod preamble {
    pub use crate::parsers::test_helpers::UnwrapValue;
    pub use crate::parsers::Parser;
    pub use crate::parsers::{ParseError, ParseResult, Span};
}

// Parsers
pub use coordinate_line::{parse_coordinate_line, parse_endpoint, parse_index};
pub use maze::{parse_maze, MazeSyntaxError};
pub use maze_line::parse_maze_line;

pub(crate) use utilities::coordinate_separator;
