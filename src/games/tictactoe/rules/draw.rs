//! Draw detection.

use super::super::{Board, CellState};
use tracing::instrument;

/// Checks if every cell is occupied.
///
/// A full board only counts as a draw when the move that filled it did not
/// also win; the controller checks for a win first.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().flatten().all(|c| *c != CellState::Empty)
}
