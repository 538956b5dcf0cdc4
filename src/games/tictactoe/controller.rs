//! Turn loop and phase transitions.

use super::action::{ClickOutcome, IgnoreReason, PointerClicked};
use super::board::Board;
use super::canvas::Canvas;
use super::invariants;
use super::types::{GamePhase, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// When a full board without a winning line is reported as a draw.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DrawRule {
    /// Only when Cross made the filling move. A full board filled by Nought
    /// stays in `Playing`.
    #[default]
    CrossOnly,
    /// Whoever made the filling move.
    AnyPlayer,
}

/// Owns the board, the phase and the player to move.
///
/// One instance per game session. All input arrives through
/// [`handle_click`](Self::handle_click); everything else is read-only.
#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    phase: GamePhase,
    current_player: Player,
    canvas: Canvas,
    draw_rule: DrawRule,
}

impl GameController {
    /// Creates a game on the default canvas with the default draw rule.
    #[instrument]
    pub fn new() -> Self {
        Self::with_options(Canvas::default(), DrawRule::default())
    }

    /// Creates a game on `canvas` using `draw_rule`.
    #[instrument]
    pub fn with_options(canvas: Canvas, draw_rule: DrawRule) -> Self {
        let mut game = Self {
            board: Board::new(),
            phase: GamePhase::Playing,
            current_player: Player::Cross,
            canvas,
            draw_rule,
        };
        game.init_game();
        game
    }

    /// Clears the board and hands the first move to Cross.
    #[instrument(skip(self))]
    pub fn init_game(&mut self) {
        self.board.reset();
        self.phase = GamePhase::Playing;
        self.current_player = Player::Cross;
        info!("New game started");
    }

    /// Handles a typed click event.
    pub fn handle_event(&mut self, event: PointerClicked) -> ClickOutcome {
        self.handle_click(event.x, event.y)
    }

    /// Handles a click at canvas pixel (`x`, `y`).
    ///
    /// In a terminal phase any click restarts the game, wherever it lands.
    /// While playing, clicks outside the grid or on an occupied cell change
    /// nothing.
    #[instrument(skip(self), fields(phase = %self.phase, player = %self.current_player))]
    pub fn handle_click(&mut self, x: i32, y: i32) -> ClickOutcome {
        let outcome = match self.phase {
            GamePhase::Draw | GamePhase::CrossWon | GamePhase::NoughtWon => {
                self.init_game();
                ClickOutcome::Restarted
            }
            GamePhase::Playing => match self.canvas.cell_at(x, y) {
                None => ClickOutcome::Ignored(IgnoreReason::OutOfBounds),
                Some((row, col)) if !self.board.is_empty(row, col) => {
                    ClickOutcome::Ignored(IgnoreReason::Occupied(row, col))
                }
                Some((row, col)) => self.play(row, col),
            },
        };

        match outcome {
            ClickOutcome::Ignored(reason) => debug!(%reason, "Click ignored"),
            _ => debug!(%outcome, "Click handled"),
        }
        invariants::assert_invariants(self);
        outcome
    }

    fn play(&mut self, row: usize, col: usize) -> ClickOutcome {
        #[cfg(debug_assertions)]
        let before = self.board.clone();

        let player = self.current_player;
        self.board.place(row, col, player);
        self.evaluate(player, row, col);
        if self.phase == GamePhase::Playing {
            self.current_player = player.opponent();
        }

        #[cfg(debug_assertions)]
        debug_assert!(invariants::is_monotonic(&before, &self.board));

        ClickOutcome::Placed {
            player,
            row,
            col,
            phase: self.phase,
        }
    }

    /// Sets the phase after `player` moved at (`row`, `col`).
    ///
    /// A win takes precedence over a full board. Whether a full board is a
    /// draw depends on the [`DrawRule`].
    #[instrument(skip(self), fields(draw_rule = %self.draw_rule))]
    pub fn evaluate(&mut self, player: Player, row: usize, col: usize) {
        self.phase = if self.board.has_won(player, row, col) {
            player.winning_phase()
        } else if self.board.is_draw() {
            match (self.draw_rule, player) {
                (DrawRule::AnyPlayer, _) | (DrawRule::CrossOnly, Player::Cross) => GamePhase::Draw,
                (DrawRule::CrossOnly, Player::Nought) => {
                    debug!("Board full after Nought's move; not reported as a draw");
                    GamePhase::Playing
                }
            }
        } else {
            GamePhase::Playing
        };

        if self.phase.is_terminal() {
            info!(phase = %self.phase, board = %self.board.display(), "Game over");
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Player whose click will place the next marker.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Canvas used to map clicks to cells.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Draw rule in force.
    pub fn draw_rule(&self) -> DrawRule {
        self.draw_rule
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // X O X / X O O / O X _ : no line for anyone, (2, 2) left open.
    const NO_LINE_FILL: [(usize, usize, Player); 8] = [
        (0, 0, Player::Cross),
        (0, 1, Player::Nought),
        (0, 2, Player::Cross),
        (1, 0, Player::Cross),
        (1, 1, Player::Nought),
        (1, 2, Player::Nought),
        (2, 0, Player::Nought),
        (2, 1, Player::Cross),
    ];

    fn nearly_full(draw_rule: DrawRule) -> GameController {
        let mut game = GameController::with_options(Canvas::default(), draw_rule);
        for (row, col, player) in NO_LINE_FILL {
            game.board.place(row, col, player);
        }
        game
    }

    #[test]
    fn test_init_game_state() {
        let game = GameController::new();
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.current_player(), Player::Cross);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_evaluate_win() {
        let mut game = GameController::new();
        for col in 0..3 {
            game.board.place(0, col, Player::Nought);
        }
        game.evaluate(Player::Nought, 0, 1);
        assert_eq!(game.phase(), GamePhase::NoughtWon);
    }

    #[test]
    fn test_evaluate_draw_after_cross() {
        let mut game = nearly_full(DrawRule::CrossOnly);
        game.board.place(2, 2, Player::Cross);
        game.evaluate(Player::Cross, 2, 2);
        assert_eq!(game.phase(), GamePhase::Draw);
    }

    #[test]
    fn test_evaluate_full_board_after_nought_stays_playing() {
        let mut game = nearly_full(DrawRule::CrossOnly);
        game.board.place(2, 2, Player::Nought);
        game.evaluate(Player::Nought, 2, 2);
        assert_eq!(game.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_any_player_rule_reports_nought_draw() {
        let mut game = nearly_full(DrawRule::AnyPlayer);
        game.board.place(2, 2, Player::Nought);
        game.evaluate(Player::Nought, 2, 2);
        assert_eq!(game.phase(), GamePhase::Draw);
    }

    #[test]
    fn test_win_on_last_cell_beats_draw() {
        let mut game = GameController::new();
        // X O O / O X X / X O X: the last cell fills the board and the diagonal.
        for (row, col, player) in [
            (0, 0, Player::Cross),
            (0, 1, Player::Nought),
            (0, 2, Player::Nought),
            (1, 0, Player::Nought),
            (1, 1, Player::Cross),
            (1, 2, Player::Cross),
            (2, 0, Player::Cross),
            (2, 1, Player::Nought),
            (2, 2, Player::Cross),
        ] {
            game.board.place(row, col, player);
        }
        game.evaluate(Player::Cross, 2, 2);
        assert_eq!(game.phase(), GamePhase::CrossWon);
    }
}
