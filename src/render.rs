//! Drawing overlays to the terminal.

use crate::{
    config::{ConfigError, RenderConfig},
    search::{CellState, ExpansionObserver, Overlay},
};
use console::{Style, Term};
use itertools::Itertools;
use std::{io, time::Duration};
use tracing::warn;

fn style_for(state: CellState) -> Style {
    match state {
        CellState::Path | CellState::Point => Style::new().red().bold(),
        CellState::Start | CellState::End => Style::new().cyan(),
        CellState::Opened => Style::new().yellow(),
        CellState::Default | CellState::Wall => Style::new(),
    }
}

/// Render one snapshot as text, one line per row and no trailing newline.
pub fn render_overlay(overlay: &Overlay, config: &RenderConfig) -> String {
    let glyphs = &config.glyphs;
    overlay
        .iter_rows()
        .map(|row| {
            row.iter()
                .map(|&state| {
                    let glyph = match state {
                        CellState::Default => glyphs.open,
                        CellState::Wall => glyphs.wall,
                        CellState::Opened => glyphs.opened,
                        CellState::Path => glyphs.path,
                        CellState::Start => glyphs.start,
                        CellState::End => glyphs.end,
                        CellState::Point => glyphs.point,
                    };
                    if config.colour {
                        style_for(state).apply_to(glyph).to_string()
                    } else {
                        glyph.to_string()
                    }
                })
                .collect::<String>()
        })
        .join("\n")
}

/// Animates a search on stdout. Every snapshot replaces the previous one.
#[derive(Debug)]
pub struct ConsoleRenderer {
    term: Term,
    config: RenderConfig,
    frame_delay: Duration,
}

impl ConsoleRenderer {
    pub fn new(config: RenderConfig) -> Result<Self, ConfigError> {
        let frame_delay = config.frame_delay()?;
        Ok(Self {
            term: Term::stdout(),
            config,
            frame_delay,
        })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Clear the terminal and draw `overlay`.
    pub fn present(&self, overlay: &Overlay) -> io::Result<()> {
        self.term.clear_screen()?;
        self.term.write_line(&render_overlay(overlay, &self.config))
    }
}

impl ExpansionObserver for ConsoleRenderer {
    fn on_expansion(&mut self, overlay: &Overlay) {
        if !self.config.animate {
            return;
        }
        if let Err(error) = self.present(overlay) {
            warn!(%error, "failed to draw frame");
            return;
        }
        if !self.frame_delay.is_zero() {
            std::thread::sleep(self.frame_delay);
        }
    }
}
