//! Status-bar text derived from the game phase.

use super::types::{GamePhase, Player};
use tracing::instrument;

/// Window title.
pub const TITLE: &str = "Tic Tac Toe";

/// How prominently a status message should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusTone {
    /// Cross to move.
    Normal,
    /// Nought to move.
    Accent,
    /// The game is over.
    Alert,
}

/// Status message and tone for the given phase and player to move.
#[instrument]
pub fn status_message(phase: GamePhase, current: Player) -> (String, StatusTone) {
    match (phase, current) {
        (GamePhase::Playing, Player::Cross) => {
            (format!("It is '{current}'s Turn"), StatusTone::Normal)
        }
        (GamePhase::Playing, Player::Nought) => {
            (format!("It is '{current}'s Turn"), StatusTone::Accent)
        }
        (GamePhase::Draw, _) => (
            "It's a Draw! Click to play again.".to_string(),
            StatusTone::Alert,
        ),
        (GamePhase::CrossWon, _) => (
            format!("'{}' Won! Click to play again.", Player::Cross),
            StatusTone::Alert,
        ),
        (GamePhase::NoughtWon, _) => (
            format!("'{}' Won! Click to play again.", Player::Nought),
            StatusTone::Alert,
        ),
    }
}
