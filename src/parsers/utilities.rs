//! Utility parsers.

use nom::{
    branch::alt,
    character::complete::{char, space0, space1},
    combinator::value,
    sequence::delimited,
};

use crate::parsers::{ParseResult, Span};

/// Consumes the separator between the two integers of a coordinate line: a
/// comma with optional surrounding spaces, or plain whitespace.
pub fn coordinate_separator(input: Span) -> ParseResult<()> {
    alt((
        value((), delimited(space0, char(','), space0)),
        value((), space1),
    ))(input)
}
