use std::time::Duration;

use ratatui::style::Color;

use crate::grid::{GeometryError, GridGeometry};

/// Default playfield width in pixels.
pub const DEFAULT_WIDTH_PX: u32 = 800;

/// Default playfield height in pixels.
pub const DEFAULT_HEIGHT_PX: u32 = 600;

/// Default edge length of one cell in pixels.
pub const DEFAULT_CELL_SIZE: u32 = 20;

/// Accumulated time that must be exceeded before the snake moves.
pub const TICK_INTERVAL: Duration = Duration::from_millis(300);

/// How long the frame loop waits for input before drawing again.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Display settings handed to the presentation layer and the grid.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DisplayConfig {
    pub width_px: u32,
    pub height_px: u32,
    pub cell_size: u32,
    /// Stretch the board over the whole terminal instead of a centered
    /// viewport.
    pub fullscreen: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width_px: DEFAULT_WIDTH_PX,
            height_px: DEFAULT_HEIGHT_PX,
            cell_size: DEFAULT_CELL_SIZE,
            fullscreen: false,
        }
    }
}

impl DisplayConfig {
    /// Builds the cell grid these settings describe.
    pub fn geometry(&self) -> Result<GridGeometry, GeometryError> {
        GridGeometry::new(self.width_px, self.height_px, self.cell_size)
    }
}

/// Colors for everything drawn on the board.
#[derive(Debug)]
pub struct Palette {
    pub border: Color,
    pub snake: Color,
    pub apple: Color,
    pub score: Color,
    pub background: Color,
}

/// Grey walls, blue snake, green apple, amber score.
pub const PALETTE: Palette = Palette {
    border: Color::Rgb(0xcc, 0xcc, 0xcc),
    snake: Color::Rgb(0x00, 0x00, 0xdd),
    apple: Color::Rgb(0x00, 0xff, 0x00),
    score: Color::Rgb(0xff, 0xcc, 0x00),
    background: Color::Black,
};
