//! Solver configuration, read from a TOML file. Every key is optional.
//!
//! ```toml
//! random-seed = 42
//!
//! [maze]
//! wall-glyph = "#"
//! coordinate-order = "row-column"
//!
//! [render]
//! frame-delay = "20ms"
//! animate = true
//! colour = true
//!
//! [render.glyphs]
//! opened = "."
//! path = "*"
//! ```

use crate::search::Coordinate;
use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid frame delay {value:?}: {source}")]
    FrameDelay {
        value: String,
        #[source]
        source: humantime::DurationError,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct SolverConfig {
    pub maze: MazeFormat,
    pub render: RenderConfig,
    pub random_seed: Option<u64>,
}

/// Settings given on the command line. Every `Some` replaces the value read
/// from the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub colour: Option<bool>,
    pub frame_delay: Option<String>,
    pub animate: Option<bool>,
    pub random_seed: Option<u64>,
}

impl SolverConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        text.parse()
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(colour) = overrides.colour {
            self.render.colour = colour;
        }
        if let Some(frame_delay) = overrides.frame_delay {
            self.render.frame_delay = frame_delay;
        }
        if let Some(animate) = overrides.animate {
            self.render.animate = animate;
        }
        if overrides.random_seed.is_some() {
            self.random_seed = overrides.random_seed;
        }
    }
}

impl FromStr for SolverConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

/// Which of the two numbers on a `start`/`end` line is the row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoordinateOrder {
    #[default]
    RowColumn,
    ColumnRow,
}

impl CoordinateOrder {
    pub fn coordinate(&self, first: usize, second: usize) -> Coordinate {
        match self {
            CoordinateOrder::RowColumn => Coordinate::new(first, second),
            CoordinateOrder::ColumnRow => Coordinate::new(second, first),
        }
    }
}

/// How maze files are read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct MazeFormat {
    pub wall_glyph: char,
    pub coordinate_order: CoordinateOrder,
}

impl Default for MazeFormat {
    fn default() -> Self {
        Self {
            wall_glyph: '#',
            coordinate_order: CoordinateOrder::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Pause after every frame, in `humantime` notation
    pub frame_delay: String,
    /// Draw every expansion rather than only the final picture
    pub animate: bool,
    pub colour: bool,
    pub glyphs: Glyphs,
}

impl RenderConfig {
    pub fn frame_delay(&self) -> Result<Duration, ConfigError> {
        humantime::parse_duration(&self.frame_delay).map_err(|source| ConfigError::FrameDelay {
            value: self.frame_delay.clone(),
            source,
        })
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            frame_delay: "20ms".to_string(),
            animate: true,
            colour: true,
            glyphs: Glyphs::default(),
        }
    }
}

/// One character per cell state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Glyphs {
    pub open: char,
    pub wall: char,
    pub opened: char,
    pub path: char,
    pub start: char,
    pub end: char,
    pub point: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            open: ' ',
            wall: '#',
            opened: '.',
            path: '*',
            start: 'S',
            end: 'E',
            point: '@',
        }
    }
}
