//! Input events and what became of them.
//!
//! The game accepts exactly one kind of input, a pointer click on the
//! canvas. Every click is absorbed: it places a marker, restarts a finished
//! game, or is ignored for a reason the caller can log.

use super::types::{GamePhase, Player};
use serde::{Deserialize, Serialize};

/// A pointer click at canvas pixel (`x`, `y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointerClicked {
    /// Horizontal pixel offset from the canvas' left edge.
    pub x: i32,
    /// Vertical pixel offset from the canvas' top edge.
    pub y: i32,
}

impl PointerClicked {
    /// Creates a click event.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Why a click during play changed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum IgnoreReason {
    /// The click landed outside the 3x3 grid.
    #[display("click outside the board")]
    OutOfBounds,
    /// The cell already holds a marker.
    #[display("cell ({}, {}) is already occupied", _0, _1)]
    Occupied(usize, usize),
}

/// Result of handling one click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ClickOutcome {
    /// A marker was placed and the phase re-evaluated.
    #[display("{player} played ({row}, {col}), phase now {phase}")]
    Placed {
        /// Who moved.
        player: Player,
        /// Row of the new marker.
        row: usize,
        /// Column of the new marker.
        col: usize,
        /// Phase after evaluation.
        phase: GamePhase,
    },
    /// The game was over, so the click started a new one.
    #[display("game restarted")]
    Restarted,
    /// Nothing changed.
    #[display("click ignored: {_0}")]
    Ignored(IgnoreReason),
}

impl ClickOutcome {
    /// True if the click changed the game state.
    pub fn changed_state(&self) -> bool {
        match self {
            ClickOutcome::Placed { .. } | ClickOutcome::Restarted => true,
            ClickOutcome::Ignored(_) => false,
        }
    }
}
