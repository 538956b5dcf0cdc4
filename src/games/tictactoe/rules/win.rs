//! Win detection.
//!
//! Only lines through the last move are checked: a new line can only be
//! completed by the cell that was just filled.

use super::super::{Board, Player};
use tracing::instrument;

/// Returns true if `player` owns all three cells of a row, column or
/// diagonal passing through (`row`, `col`).
///
/// Diagonals are only considered when (`row`, `col`) lies on them.
#[instrument(skip(board))]
pub fn has_won(board: &Board, player: Player, row: usize, col: usize) -> bool {
    let owns = |r: usize, c: usize| board.get(r, c) == Some(player.marker());

    let full_row = (0..3).all(|c| owns(row, c));
    let full_col = (0..3).all(|r| owns(r, col));
    let main_diagonal = row == col && (0..3).all(|i| owns(i, i));
    let anti_diagonal = row + col == 2 && (0..3).all(|i| owns(i, 2 - i));

    full_row || full_col || main_diagonal || anti_diagonal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[(usize, usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(row, col, player) in cells {
            board.place(row, col, player);
        }
        board
    }

    #[test]
    fn test_no_win_on_single_mark() {
        let board = board_with(&[(1, 1, Player::Cross)]);
        assert!(!has_won(&board, Player::Cross, 1, 1));
    }

    #[test]
    fn test_row_win() {
        let board = board_with(&[
            (0, 0, Player::Cross),
            (0, 1, Player::Cross),
            (0, 2, Player::Cross),
        ]);
        for col in 0..3 {
            assert!(has_won(&board, Player::Cross, 0, col));
        }
        assert!(!has_won(&board, Player::Nought, 0, 2));
    }

    #[test]
    fn test_column_win() {
        let board = board_with(&[
            (0, 1, Player::Nought),
            (1, 1, Player::Nought),
            (2, 1, Player::Nought),
        ]);
        assert!(has_won(&board, Player::Nought, 2, 1));
    }

    #[test]
    fn test_main_diagonal_win() {
        let board = board_with(&[
            (0, 0, Player::Cross),
            (1, 1, Player::Cross),
            (2, 2, Player::Cross),
        ]);
        assert!(has_won(&board, Player::Cross, 2, 2));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = board_with(&[
            (0, 2, Player::Nought),
            (1, 1, Player::Nought),
            (2, 0, Player::Nought),
        ]);
        assert!(has_won(&board, Player::Nought, 2, 0));
        assert!(has_won(&board, Player::Nought, 1, 1));
    }

    #[test]
    fn test_lines_not_through_move_are_ignored() {
        // Cross owns the top row, but the move being judged is elsewhere.
        let board = board_with(&[
            (0, 0, Player::Cross),
            (0, 1, Player::Cross),
            (0, 2, Player::Cross),
            (2, 1, Player::Cross),
        ]);
        assert!(!has_won(&board, Player::Cross, 2, 1));
    }

    #[test]
    fn test_diagonal_only_checked_when_on_it() {
        // Main diagonal is complete but (1, 0) is not on it.
        let board = board_with(&[
            (0, 0, Player::Cross),
            (1, 1, Player::Cross),
            (2, 2, Player::Cross),
            (1, 0, Player::Cross),
        ]);
        assert!(!has_won(&board, Player::Cross, 1, 0));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (1, 0, Player::Cross),
            (1, 1, Player::Nought),
            (1, 2, Player::Cross),
        ]);
        assert!(!has_won(&board, Player::Cross, 1, 2));
    }
}
