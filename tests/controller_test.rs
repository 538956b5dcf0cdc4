//! Click-driven game flow through the public API.

use noughts_and_crosses::{
    Board, CellState, ClickOutcome, GameController, GamePhase, IgnoreReason, Player,
    PointerClicked,
};

/// Clicks the centre of (row, col) on the default 100px canvas.
fn click(game: &mut GameController, row: usize, col: usize) -> ClickOutcome {
    let (x, y) = game.canvas().center_of(row, col);
    game.handle_click(x, y)
}

fn snapshot(game: &GameController) -> (Board, GamePhase, Player) {
    (game.board().clone(), game.phase(), game.current_player())
}

#[test]
fn test_players_alternate_while_playing() {
    let mut game = GameController::new();
    let mut expected = Player::Cross;
    for (row, col) in [(1, 1), (0, 0), (2, 2), (0, 2), (0, 1)] {
        assert_eq!(game.current_player(), expected);
        let outcome = click(&mut game, row, col);
        assert!(matches!(outcome, ClickOutcome::Placed { player, .. } if player == expected));
        assert_eq!(game.phase(), GamePhase::Playing);
        expected = expected.opponent();
    }
}

#[test]
fn test_cross_wins_top_row() {
    let mut game = GameController::new();
    click(&mut game, 0, 0);
    click(&mut game, 1, 0);
    click(&mut game, 0, 1);
    click(&mut game, 1, 1);
    let outcome = click(&mut game, 0, 2);

    assert_eq!(
        outcome,
        ClickOutcome::Placed {
            player: Player::Cross,
            row: 0,
            col: 2,
            phase: GamePhase::CrossWon,
        }
    );
    assert!(game.board().has_won(Player::Cross, 0, 2));
    assert_eq!(game.phase(), GamePhase::CrossWon);
    // The winner is not handed the turn away.
    assert_eq!(game.current_player(), Player::Cross);
}

#[test]
fn test_nought_wins_column() {
    let mut game = GameController::new();
    for (row, col) in [(0, 0), (0, 1), (2, 2), (1, 1), (1, 0), (2, 1)] {
        click(&mut game, row, col);
    }
    assert_eq!(game.phase(), GamePhase::NoughtWon);
    assert_eq!(game.current_player(), Player::Nought);
}

#[test]
fn test_full_board_on_cross_move_is_draw() {
    let mut game = GameController::new();
    // Final board: X O X / X O O / O X X
    for (row, col) in [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ] {
        assert_eq!(game.phase(), GamePhase::Playing);
        click(&mut game, row, col);
    }
    assert_eq!(game.phase(), GamePhase::Draw);
    assert!(game.board().is_draw());
}

#[test]
fn test_occupied_cell_click_is_noop() {
    let mut game = GameController::new();
    click(&mut game, 1, 1);
    let before = snapshot(&game);

    let outcome = click(&mut game, 1, 1);
    assert_eq!(outcome, ClickOutcome::Ignored(IgnoreReason::Occupied(1, 1)));
    assert_eq!(snapshot(&game), before);
}

#[test]
fn test_out_of_bounds_click_is_noop() {
    let mut game = GameController::new();
    click(&mut game, 0, 0);
    let before = snapshot(&game);

    for (x, y) in [(300, 10), (10, 300), (-5, 10), (10, -1), (1000, 1000)] {
        let outcome = game.handle_click(x, y);
        assert_eq!(outcome, ClickOutcome::Ignored(IgnoreReason::OutOfBounds));
        assert_eq!(snapshot(&game), before);
    }
}

#[test]
fn test_any_click_after_game_over_resets() {
    for (x, y) in [(50, 50), (999, -999), (250, 250)] {
        let mut game = GameController::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            click(&mut game, row, col);
        }
        assert!(game.phase().is_terminal());

        assert_eq!(game.handle_click(x, y), ClickOutcome::Restarted);
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.current_player(), Player::Cross);
    }
}

#[test]
fn test_restart_click_does_not_place() {
    let mut game = GameController::new();
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        click(&mut game, row, col);
    }
    click(&mut game, 2, 2);
    assert_eq!(game.board().get(2, 2), Some(CellState::Empty));

    // The next click plays normally again.
    click(&mut game, 2, 2);
    assert_eq!(game.board().get(2, 2), Some(CellState::Cross));
}

#[test]
fn test_accessors_are_idempotent() {
    let mut game = GameController::new();
    click(&mut game, 2, 0);
    let first = snapshot(&game);
    for _ in 0..3 {
        assert_eq!(snapshot(&game), first);
    }
}

#[test]
fn test_handle_event_matches_handle_click() {
    let mut by_event = GameController::new();
    let mut by_click = GameController::new();
    for (x, y) in [(120, 30), (30, 120), (500, 500), (120, 30)] {
        assert_eq!(
            by_event.handle_event(PointerClicked::new(x, y)),
            by_click.handle_click(x, y)
        );
    }
    assert_eq!(snapshot(&by_event), snapshot(&by_click));
}
