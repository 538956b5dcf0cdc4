//! Noughts and Crosses - two-player tic-tac-toe driven by pointer clicks
//!
//! # Architecture
//!
//! - **Board**: fixed 3x3 grid with win and draw rules
//! - **GameController**: player to move, game phase, and the click handler
//! - **Settings**: TOML-backed canvas and draw-rule configuration
//!
//! # Example
//!
//! ```
//! use noughts_and_crosses::{GameController, GamePhase, Player};
//!
//! let mut game = GameController::new();
//! for (x, y) in [(10, 10), (10, 150), (150, 10), (150, 150), (250, 10)] {
//!     game.handle_click(x, y);
//! }
//! assert_eq!(game.phase(), GamePhase::CrossWon);
//!
//! // Any click after the game ends starts a new one.
//! game.handle_click(0, 0);
//! assert_eq!(game.phase(), GamePhase::Playing);
//! assert_eq!(game.current_player(), Player::Cross);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod games;
mod settings;

// Crate-level exports - Game types
pub use games::tictactoe::{
    Board, COLS, Canvas, CellState, ClickOutcome, DEFAULT_CELL_SIZE, DrawRule, GameController,
    GamePhase, IgnoreReason, MAX_CELL_SIZE, Player, PointerClicked, Position, ROWS, StatusTone,
    TITLE, status_message,
};

// Crate-level exports - Rules and invariants
pub use games::tictactoe::invariants::{
    BalancedMarksInvariant, ControllerInvariants, Invariant, InvariantSet, InvariantViolation,
    TurnOrderInvariant, is_monotonic,
};
pub use games::tictactoe::rules;

// Crate-level exports - Settings
pub use settings::{ConfigError, GameSettings};
