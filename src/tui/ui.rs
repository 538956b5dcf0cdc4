//! Stateless rendering of the board and status bar.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use super::input::{CELL_HEIGHT, CELL_WIDTH};
use noughts_and_crosses::{COLS, CellState, Position, ROWS, StatusTone, TITLE, status_message};

/// Splits the frame into title, board and status areas.
fn layout(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(CELL_HEIGHT * ROWS as u16),
            Constraint::Length(3),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Where the 3x3 grid is drawn inside a frame of size `area`.
pub fn board_area(area: Rect) -> Rect {
    let [_, board, _] = layout(area);
    center_rect(board, CELL_WIDTH * COLS as u16, CELL_HEIGHT * ROWS as u16)
}

/// Draws the whole screen. Reads the app, never changes it.
pub fn draw(frame: &mut Frame, app: &App) {
    let [title_area, _, status_area] = layout(frame.area());

    let title = Paragraph::new(TITLE)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    let board = board_area(frame.area());
    for pos in Position::ALL {
        let cell = Rect::new(
            board.x + pos.col() as u16 * CELL_WIDTH,
            board.y + pos.row() as u16 * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(frame.area());
        if !cell.is_empty() {
            draw_cell(frame, cell, app, pos);
        }
    }

    let (message, tone) = status_message(app.game().phase(), app.game().current_player());
    let color = match tone {
        StatusTone::Normal => Color::White,
        StatusTone::Accent => Color::Blue,
        StatusTone::Alert => Color::Red,
    };
    let status = Paragraph::new(message)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, status_area);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let cell = app
        .game()
        .board()
        .get(pos.row(), pos.col())
        .unwrap_or(CellState::Empty);

    let glyph_style = match cell {
        CellState::Empty => Style::default().fg(Color::DarkGray),
        CellState::Cross => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        CellState::Nought => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
    };
    let border_style = if pos == app.cursor() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let glyph = match cell {
        CellState::Empty => " ",
        CellState::Cross => "X",
        CellState::Nought => "O",
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(glyph, glyph_style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
