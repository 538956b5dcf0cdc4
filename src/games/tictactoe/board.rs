//! The 3x3 grid of cells.

use super::rules;
use super::types::{CellState, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows on the board.
pub const ROWS: usize = 3;
/// Number of columns on the board.
pub const COLS: usize = 3;

/// 3x3 noughts-and-crosses board, row-major.
///
/// Cells only ever go from [`CellState::Empty`] to a player's marker.
/// The only way back is [`Board::reset`], which clears every cell at once.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[CellState; COLS]; ROWS],
}

impl Board {
    /// Creates an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [[CellState::Empty; COLS]; ROWS];
    }

    /// Places `player`'s marker at (`row`, `col`).
    ///
    /// The caller checks bounds and emptiness first; see
    /// [`GameController::handle_click`](super::GameController::handle_click).
    /// Out-of-range indices panic like any array index.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: usize, col: usize, player: Player) {
        debug_assert!(self.is_empty(row, col), "placing onto an occupied cell");
        self.cells[row][col] = player.marker();
    }

    /// Returns the cell at (`row`, `col`), or `None` off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<CellState> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// True if (`row`, `col`) is on the board and holds no marker.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(CellState::Empty))
    }

    /// Returns the whole grid.
    pub fn cells(&self) -> &[[CellState; COLS]; ROWS] {
        &self.cells
    }

    /// Did the move `player` just made at (`row`, `col`) complete a line?
    #[instrument(skip(self))]
    pub fn has_won(&self, player: Player, row: usize, col: usize) -> bool {
        rules::has_won(self, player, row, col)
    }

    /// True once no cell is empty.
    #[instrument(skip(self))]
    pub fn is_draw(&self) -> bool {
        rules::is_full(self)
    }

    /// Counts the markers `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == player.marker())
            .count()
    }

    /// Formats the board as three lines of `X`, `O` and `.`.
    pub fn display(&self) -> String {
        self.cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
