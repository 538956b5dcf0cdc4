//! Noughts and crosses: board, rules and the click-driven controller.

pub mod action;
pub mod board;
pub mod canvas;
pub mod controller;
pub mod invariants;
pub mod position;
pub mod rules;
pub mod status;
pub mod types;

pub use action::{ClickOutcome, IgnoreReason, PointerClicked};
pub use board::{Board, COLS, ROWS};
pub use canvas::{Canvas, DEFAULT_CELL_SIZE, MAX_CELL_SIZE};
pub use controller::{DrawRule, GameController};
pub use position::Position;
pub use status::{StatusTone, TITLE, status_message};
pub use types::{CellState, GamePhase, Player};
