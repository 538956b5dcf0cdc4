//! Properties the controller must preserve across clicks.
//!
//! Checked after every click in debug builds; tests call them directly.

use super::board::Board;
use super::controller::GameController;
use super::types::{CellState, GamePhase, Player};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok(())`.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ]
        .into_iter()
        .filter(|(held, _)| !held)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Cross moves first, so Cross has as many markers as Nought or one more.
pub struct BalancedMarksInvariant;

impl Invariant<GameController> for BalancedMarksInvariant {
    fn holds(game: &GameController) -> bool {
        let crosses = game.board().count(Player::Cross);
        let noughts = game.board().count(Player::Nought);
        crosses == noughts || crosses == noughts + 1
    }

    fn description() -> &'static str {
        "Cross has as many markers as Nought, or one more"
    }
}

/// While playing, the player to move is the one with fewer markers.
pub struct TurnOrderInvariant;

impl Invariant<GameController> for TurnOrderInvariant {
    fn holds(game: &GameController) -> bool {
        if game.phase() != GamePhase::Playing {
            return true;
        }
        let expected = if game.board().count(Player::Cross) == game.board().count(Player::Nought) {
            Player::Cross
        } else {
            Player::Nought
        };
        game.current_player() == expected
    }

    fn description() -> &'static str {
        "While playing, the player to move has fewer markers (Cross on ties)"
    }
}

/// Invariants checked after each click.
pub type ControllerInvariants = (BalancedMarksInvariant, TurnOrderInvariant);

/// True if no cell of `before` was overwritten or cleared in `after`.
pub fn is_monotonic(before: &Board, after: &Board) -> bool {
    before
        .cells()
        .iter()
        .flatten()
        .zip(after.cells().iter().flatten())
        .all(|(old, new)| *old == CellState::Empty || old == new)
}

/// Logs and, in debug builds, panics on any violated controller invariant.
pub fn assert_invariants(game: &GameController) {
    if let Err(violations) = ControllerInvariants::check_all(game) {
        for violation in &violations {
            warn!(%violation, board = %game.board().display(), "Controller invariant failed");
        }
        debug_assert!(violations.is_empty(), "{violations:?}");
    }
}
