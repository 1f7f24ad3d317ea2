use crate::parsers::ParseResult;

/// Helpers for inspecting the outcome of a parser, mostly useful in tests
/// and documentation examples.
pub trait UnwrapValue<T> {
    /// Whether the parser succeeded and produced `value`.
    fn is_value(&self, value: T) -> bool;

    /// The produced value, panicking if the parser failed.
    fn unwrap_value(self) -> T;
}

impl<'a, T: PartialEq> UnwrapValue<T> for ParseResult<'a, T> {
    fn is_value(&self, value: T) -> bool {
        match self {
            Ok((_, parsed)) => *parsed == value,
            Err(_) => false,
        }
    }

    fn unwrap_value(self) -> T {
        match self {
            Ok((_, parsed)) => parsed,
            Err(e) => panic!("parser failed: {:?}", e),
        }
    }
}
