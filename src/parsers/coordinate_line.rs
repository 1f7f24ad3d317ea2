//! Provides parsers for `start`/`end` coordinate lines.

use crate::parsed_types::{CoordinateLine, Endpoint};
use crate::parsers::{coordinate_separator, ParseResult, Span};
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{space0, space1, u64};
use nom::combinator::{map, map_opt, value};
use nom::sequence::tuple;

pub const START_KEYWORD: &str = "start";
pub const END_KEYWORD: &str = "end";

/// Parses the keyword of a coordinate line, ignoring case.
///
/// ## Example
/// ```
/// # use gridsearch::parsers::{parse_endpoint, preamble::*};
/// # use gridsearch::parsed_types::Endpoint;
/// assert!(parse_endpoint("start").is_value(Endpoint::Start));
/// assert!(parse_endpoint("START").is_value(Endpoint::Start));
/// assert!(parse_endpoint("End").is_value(Endpoint::End));
/// assert!(parse_endpoint("goal").is_err());
///```
pub fn parse_endpoint<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Endpoint> {
    alt((
        value(Endpoint::Start, tag_no_case(START_KEYWORD)),
        value(Endpoint::End, tag_no_case(END_KEYWORD)),
    ))(input.into())
}

/// Parses a non-negative cell index.
pub fn parse_index<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, usize> {
    map_opt(u64, |index| usize::try_from(index).ok())(input.into())
}

/// Parses a coordinate line, i.e. `<start|end> <int>[,] <int>`. Trailing
/// spaces are consumed.
///
/// ## Example
/// ```
/// # use gridsearch::parsers::{parse_coordinate_line, preamble::*};
/// # use gridsearch::parsed_types::{CoordinateLine, Endpoint};
/// assert!(parse_coordinate_line("start 1, 2").is_value(CoordinateLine::new(Endpoint::Start, 1, 2)));
/// assert!(parse_coordinate_line("end 3 4").is_value(CoordinateLine::new(Endpoint::End, 3, 4)));
/// assert!(parse_coordinate_line("start x, 2").is_err());
///```
pub fn parse_coordinate_line<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, CoordinateLine> {
    map(
        tuple((
            parse_endpoint,
            space1,
            parse_index,
            coordinate_separator,
            parse_index,
            space0,
        )),
        |(endpoint, _, first, _, second, _)| CoordinateLine::new(endpoint, first, second),
    )(input.into())
}

impl crate::parsers::Parser for CoordinateLine {
    type Item = CoordinateLine;

    /// Parses a coordinate line.
    ///
    /// ## See also
    /// See [`parse_coordinate_line`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_coordinate_line(input)
    }
}
