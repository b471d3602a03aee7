use crate::tui::app::{AppState, InputAction};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    poll_rate: Duration,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(poll_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
                    break;
                }
            }
        }
    }
    Ok(())
}

/// Map a key to an action. Returns true when the viewer should quit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    if app.help_open() {
        if matches!(code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::F(1)) {
            let _ = app.handle_input(InputAction::ToggleHelp);
        }
        return false;
    }

    match code {
        KeyCode::Esc => {
            // First Esc clears the input line, the next one quits
            if app.input().is_empty() {
                return true;
            }
            let _ = app.handle_input(InputAction::ClearInput);
        }
        KeyCode::Char('?') | KeyCode::F(1) => {
            let _ = app.handle_input(InputAction::ToggleHelp);
        }
        KeyCode::Enter => {
            let _ = app.handle_input(InputAction::Submit);
        }
        KeyCode::Backspace => {
            let _ = app.handle_input(InputAction::Backspace);
        }
        KeyCode::Up => {
            let _ = app.handle_input(InputAction::FocusPrev);
        }
        KeyCode::Down => {
            let _ = app.handle_input(InputAction::FocusNext);
        }
        KeyCode::Delete => {
            let _ = app.handle_input(InputAction::RemoveFocused);
        }
        KeyCode::F(5) => {
            let _ = app.handle_input(InputAction::ClearHands);
        }
        KeyCode::Char(c) => {
            let _ = app.handle_input(InputAction::Char(c));
        }
        _ => {}
    }
    false
}
