//! Pixel geometry of the drawing canvas.

use super::board::{COLS, ROWS};
use tracing::instrument;

/// Default size of one square cell, in canvas pixels.
pub const DEFAULT_CELL_SIZE: u32 = 100;
/// Largest accepted cell size. Keeps every canvas pixel, and any terminal
/// offset scaled onto the canvas, well inside `i32`.
pub const MAX_CELL_SIZE: u32 = 10_000;

/// Square canvas of `ROWS` x `COLS` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_getters::Getters)]
pub struct Canvas {
    /// Width and height of a single cell.
    cell_size: u32,
}

impl Canvas {
    /// Creates a canvas with the given cell size.
    ///
    /// The size is clamped to `1..=MAX_CELL_SIZE`; settings loading rejects
    /// values outside that range before they get here.
    #[instrument]
    pub fn new(cell_size: u32) -> Self {
        Self {
            cell_size: cell_size.clamp(1, MAX_CELL_SIZE),
        }
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.cell_size * COLS as u32
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.cell_size * ROWS as u32
    }

    /// Maps a pixel to the (row, col) of the cell under it.
    ///
    /// Returns `None` for anything outside the grid, including negative
    /// coordinates.
    #[instrument(skip(self))]
    pub fn cell_at(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let size = i64::from(self.cell_size);
        let row = i64::from(y).div_euclid(size);
        let col = i64::from(x).div_euclid(size);
        let in_range = |v: i64, limit: usize| (0..limit as i64).contains(&v);
        (in_range(row, ROWS) && in_range(col, COLS)).then_some((row as usize, col as usize))
    }

    /// Pixel at the centre of (`row`, `col`).
    ///
    /// Indices past the grid saturate at `i32::MAX`, which is off the board.
    pub fn center_of(&self, row: usize, col: usize) -> (i32, i32) {
        let size = i64::from(self.cell_size);
        let center = |index: usize| {
            let pixel = i64::try_from(index)
                .unwrap_or(i64::MAX)
                .saturating_mul(size)
                .saturating_add(size / 2);
            i32::try_from(pixel).unwrap_or(i32::MAX)
        };
        (center(col), center(row))
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_SIZE)
    }
}
