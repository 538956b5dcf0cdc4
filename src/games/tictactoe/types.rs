//! Core domain types for noughts and crosses.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player making a move.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Cross ('X'), always moves first.
    #[strum(to_string = "X")]
    Cross,
    /// Nought ('O').
    #[strum(to_string = "O")]
    Nought,
}

impl Player {
    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Cross => Player::Nought,
            Player::Nought => Player::Cross,
        }
    }

    /// Returns the marker this player leaves on the board.
    pub fn marker(self) -> CellState {
        match self {
            Player::Cross => CellState::Cross,
            Player::Nought => CellState::Nought,
        }
    }

    /// Returns the phase reached when this player completes a line.
    #[instrument]
    pub fn winning_phase(self) -> GamePhase {
        match self {
            Player::Cross => GamePhase::CrossWon,
            Player::Nought => GamePhase::NoughtWon,
        }
    }
}

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellState {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Holds a cross.
    Cross,
    /// Holds a nought.
    Nought,
}

impl CellState {
    /// Returns the player owning this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            CellState::Empty => None,
            CellState::Cross => Some(Player::Cross),
            CellState::Nought => Some(Player::Nought),
        }
    }

    /// Single-character symbol used by the text board.
    pub fn symbol(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Cross => 'X',
            CellState::Nought => 'O',
        }
    }
}

/// Overall status of the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
pub enum GamePhase {
    /// Moves are being accepted.
    #[default]
    Playing,
    /// Board filled with no line.
    Draw,
    /// Cross completed a line.
    CrossWon,
    /// Nought completed a line.
    NoughtWon,
}

impl GamePhase {
    /// Returns true for `Draw`, `CrossWon` and `NoughtWon`.
    pub fn is_terminal(self) -> bool {
        match self {
            GamePhase::Playing => false,
            GamePhase::Draw | GamePhase::CrossWon | GamePhase::NoughtWon => true,
        }
    }

    /// Returns the winner, if the phase records one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GamePhase::CrossWon => Some(Player::Cross),
            GamePhase::NoughtWon => Some(Player::Nought),
            GamePhase::Playing | GamePhase::Draw => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_toggles() {
        assert_eq!(Player::Cross.opponent(), Player::Nought);
        assert_eq!(Player::Nought.opponent(), Player::Cross);
    }

    #[test]
    fn test_marker_and_owner_agree() {
        for player in <Player as strum::IntoEnumIterator>::iter() {
            assert_eq!(player.marker().owner(), Some(player));
        }
        assert_eq!(CellState::Empty.owner(), None);
    }

    #[test]
    fn test_terminal_phases() {
        assert!(!GamePhase::Playing.is_terminal());
        assert!(GamePhase::Draw.is_terminal());
        assert!(GamePhase::CrossWon.is_terminal());
        assert!(GamePhase::NoughtWon.is_terminal());
    }

    #[test]
    fn test_winning_phase_round_trips_to_winner() {
        assert_eq!(Player::Cross.winning_phase().winner(), Some(Player::Cross));
        assert_eq!(Player::Nought.winning_phase().winner(), Some(Player::Nought));
        assert_eq!(GamePhase::Draw.winner(), None);
    }

    #[test]
    fn test_player_display() {
        assert_eq!(Player::Cross.to_string(), "X");
        assert_eq!(Player::Nought.to_string(), "O");
    }
}
