//! Keyboard cursor movement and mouse-to-canvas mapping.

use crossterm::event::KeyCode;
use noughts_and_crosses::{Canvas, Position};
use ratatui::layout::Rect;

/// Terminal columns occupied by one board cell.
pub const CELL_WIDTH: u16 = 9;
/// Terminal rows occupied by one board cell.
pub const CELL_HEIGHT: u16 = 3;

/// Moves the cursor one cell in the arrow's direction, stopping at edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

/// Scales a terminal cell position onto canvas pixels.
///
/// `board` is where the grid was drawn. Positions left of or above it map
/// to negative pixels, which the canvas treats as off the board.
pub fn to_canvas(column: u16, row: u16, board: Rect, canvas: Canvas) -> (i32, i32) {
    let size = i64::from(*canvas.cell_size());
    let scale = |pos: u16, origin: u16, span: u16| {
        let pixel = ((i64::from(pos) - i64::from(origin)) * size).div_euclid(i64::from(span));
        i32::try_from(pixel).unwrap_or(if pixel < 0 { i32::MIN } else { i32::MAX })
    };
    (
        scale(column, board.x, CELL_WIDTH),
        scale(row, board.y, CELL_HEIGHT),
    )
}
