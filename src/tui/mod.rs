//! Terminal UI: draws the board and feeds mouse and keyboard input to the
//! game controller.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

use app::App;
use noughts_and_crosses::GameSettings;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs an interactive game until the user quits.
pub fn run_tui(settings: &GameSettings) -> Result<()> {
    // Log to a file so output doesn't interfere with the TUI
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(
        cell_size = settings.cell_size(),
        draw_rule = %settings.draw_rule(),
        "Starting terminal UI"
    );

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = App::new(settings.new_game());
    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// One event at a time: redraw, wait for input, apply it.
#[instrument(skip_all)]
fn run_loop(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        let frame_area = terminal.draw(|f| ui::draw(f, app))?.area;

        if app.should_quit() {
            return Ok(());
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(outcome) = app.handle_key(key.code) {
                    info!(%outcome, "Key click");
                }
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                let outcome = app.handle_mouse(column, row, ui::board_area(frame_area));
                info!(%outcome, column, row, "Mouse click");
            }
            _ => {}
        }
    }
}
