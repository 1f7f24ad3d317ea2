#![warn(missing_debug_implementations)]
#![deny(non_ascii_idents)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unit_bindings)]
#![warn(unused_crate_dependencies)]
#![warn(unused_qualifications)]

// Crate dependencies used in binary but not in library. Unfortunately cargo
// does not yet allow specifying dependencies for binaries only.
use dialoguer as _;
use serde_json as _;
use tracing_subscriber as _;

pub mod config;
pub mod parsed_types;
pub mod parsers;
pub mod render;
pub mod search;

pub use config::{
    ConfigError, ConfigOverrides, CoordinateOrder, Glyphs, MazeFormat, RenderConfig, SolverConfig,
};
pub use render::{render_overlay, ConsoleRenderer};
pub use search::{
    Coordinate, Grid, MazeError, MazeSolver, Overlay, RunResult, SearchEngineName, Verbosity,
};

#[cfg(test)]
mod test_utils;
