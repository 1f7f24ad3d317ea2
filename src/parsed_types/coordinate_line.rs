//! Contains the [`CoordinateLine`] type, i.e. a `start <a>, <b>` or
//! `end <a>, <b>` line of a maze file.

use std::fmt::Display;

/// Which designated cell a coordinate line refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    End,
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::End => write!(f, "end"),
        }
    }
}

/// The two integers of a coordinate line, in the order they appear in the
/// file. How they map onto rows and columns is decided by the
/// [`CoordinateOrder`](crate::config::CoordinateOrder) used when loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateLine {
    endpoint: Endpoint,
    first: usize,
    second: usize,
}

impl CoordinateLine {
    pub const fn new(endpoint: Endpoint, first: usize, second: usize) -> Self {
        Self {
            endpoint,
            first,
            second,
        }
    }

    pub const fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub const fn first(&self) -> usize {
        self.first
    }

    pub const fn second(&self) -> usize {
        self.second
    }
}
