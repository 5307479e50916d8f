use thiserror::Error;

use crate::snake::INITIAL_BODY;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Top-left corner of a cell in pixel space.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
}

/// Inclusive rectangle of cells not covered by the border ring.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Interior {
    pub min: Cell,
    pub max: Cell,
}

impl Interior {
    /// Returns true when `cell` lies inside the interior.
    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        (self.min.x..=self.max.x).contains(&cell.x) && (self.min.y..=self.max.y).contains(&cell.y)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum GeometryError {
    #[error("cell size must be greater than zero")]
    ZeroCellSize,
    #[error("playfield of {cols}x{rows} cells cannot hold the starting snake inside its walls")]
    TooSmall { cols: u32, rows: u32 },
    #[error("playfield pixel dimensions do not fit in a signed 32-bit coordinate")]
    TooLarge,
}

/// Playfield dimensions in pixels, carved into square cells.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridGeometry {
    width_px: u32,
    height_px: u32,
    cell_size: u32,
}

impl GridGeometry {
    pub fn new(width_px: u32, height_px: u32, cell_size: u32) -> Result<Self, GeometryError> {
        if cell_size == 0 {
            return Err(GeometryError::ZeroCellSize);
        }

        if i32::try_from(width_px).is_err() || i32::try_from(height_px).is_err() {
            return Err(GeometryError::TooLarge);
        }

        let geometry = Self {
            width_px,
            height_px,
            cell_size,
        };
        let interior = geometry.interior();
        if !INITIAL_BODY.iter().all(|cell| interior.contains(*cell)) {
            return Err(GeometryError::TooSmall {
                cols: width_px / cell_size,
                rows: height_px / cell_size,
            });
        }

        Ok(geometry)
    }

    #[must_use]
    pub fn width_px(self) -> u32 {
        self.width_px
    }

    #[must_use]
    pub fn height_px(self) -> u32 {
        self.height_px
    }

    #[must_use]
    pub fn cell_size(self) -> u32 {
        self.cell_size
    }

    /// Number of cell columns.
    #[must_use]
    pub fn cols(self) -> i32 {
        // `new` guarantees the pixel width fits in an i32.
        (self.width_px / self.cell_size) as i32
    }

    /// Number of cell rows.
    #[must_use]
    pub fn rows(self) -> i32 {
        (self.height_px / self.cell_size) as i32
    }

    /// Returns the pixel origin of `cell`.
    #[must_use]
    pub fn cell_origin(self, cell: Cell) -> Pixel {
        let size = self.cell_size as i32;
        Pixel {
            x: cell.x * size,
            y: cell.y * size,
        }
    }

    /// Cells where an apple may be placed.
    #[must_use]
    pub fn interior(self) -> Interior {
        Interior {
            min: Cell::new(1, 1),
            max: Cell::new(self.cols() - 2, self.rows() - 2),
        }
    }

    /// Returns true when `cell` counts as a wall hit.
    ///
    /// The far column and row are painted as border but only coordinates at or
    /// past `cols`/`rows` collide, mirroring the near edge at zero.
    #[must_use]
    pub fn is_wall(self, cell: Cell) -> bool {
        cell.x <= 0 || cell.x >= self.cols() || cell.y <= 0 || cell.y >= self.rows()
    }
}
