//! Application state for the terminal front end.

use super::input::{move_cursor, to_canvas};
use crossterm::event::KeyCode;
use noughts_and_crosses::{ClickOutcome, GameController, Position};
use ratatui::layout::Rect;
use tracing::{debug, info};

/// Game controller plus the keyboard cursor.
pub struct App {
    game: GameController,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates an application around a fresh game.
    pub fn new(game: GameController) -> Self {
        Self {
            game,
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Cell highlighted for keyboard play.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    ///
    /// Enter and Space click the centre of the cursor cell, so keyboard play
    /// goes through the same path as the mouse.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<ClickOutcome> {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let (x, y) = self.game.canvas().center_of(self.cursor.row(), self.cursor.col());
                Some(self.game.handle_click(x, y))
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
                debug!(cursor = %self.cursor, "Cursor moved");
                None
            }
            _ => None,
        }
    }

    /// Handles a left click at terminal cell (`column`, `row`).
    pub fn handle_mouse(&mut self, column: u16, row: u16, board: Rect) -> ClickOutcome {
        let (x, y) = to_canvas(column, row, board, self.game.canvas());
        if let Some((r, c)) = self.game.canvas().cell_at(x, y)
            && let Some(pos) = Position::from_row_col(r, c)
        {
            self.cursor = pos;
        }
        self.game.handle_click(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::{CELL_HEIGHT, CELL_WIDTH};
    use noughts_and_crosses::{CellState, GamePhase, Player};

    fn board_rect() -> Rect {
        Rect::new(4, 2, CELL_WIDTH * 3, CELL_HEIGHT * 3)
    }

    #[test]
    fn test_enter_places_at_cursor() {
        let mut app = App::new(GameController::new());
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Left);
        let outcome = app.handle_key(KeyCode::Enter);
        assert!(matches!(outcome, Some(ClickOutcome::Placed { row: 0, col: 0, .. })));
        assert_eq!(app.game().board().get(0, 0), Some(CellState::Cross));
        assert_eq!(app.game().current_player(), Player::Nought);
    }

    #[test]
    fn test_mouse_click_places_and_moves_cursor() {
        let mut app = App::new(GameController::new());
        let board = board_rect();
        let outcome = app.handle_mouse(board.x + 2 * CELL_WIDTH + 1, board.y + CELL_HEIGHT, board);
        assert!(matches!(outcome, ClickOutcome::Placed { row: 1, col: 2, .. }));
        assert_eq!(app.cursor(), Position::MiddleRight);
    }

    #[test]
    fn test_mouse_click_outside_board_ignored() {
        let mut app = App::new(GameController::new());
        let outcome = app.handle_mouse(0, 0, board_rect());
        assert!(!outcome.changed_state());
        assert_eq!(app.game().phase(), GamePhase::Playing);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(GameController::new());
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
