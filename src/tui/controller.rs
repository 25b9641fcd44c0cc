use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Draw, poll input, and tick the seat agents until the user exits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        let wait = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(wait)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
                    return Ok(());
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.agents_on_turn();
            last_tick = Instant::now();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyOutcome {
    Exit,
    Input(InputAction),
    Ignored,
}

fn map_key(app: &AppState, code: KeyCode) -> KeyOutcome {
    use InputAction as A;
    use KeyOutcome::{Exit, Ignored, Input};

    match code {
        KeyCode::Char('?') => return Input(A::ToggleHelp),
        KeyCode::Char('h' | 'H') => return Input(A::ToggleHistory),
        _ => {}
    }
    // Overlays swallow everything but their own keys.
    if app.help_open() {
        return if code == KeyCode::Esc { Input(A::ToggleHelp) } else { Ignored };
    }
    if app.history_open() {
        return match code {
            KeyCode::Up => Input(A::HistoryUp),
            KeyCode::Down => Input(A::HistoryDown),
            KeyCode::Esc => Input(A::ToggleHistory),
            _ => Ignored,
        };
    }

    match (app.scene, code) {
        (_, KeyCode::Char('q' | 'Q')) => Exit,
        (_, KeyCode::Char('m' | 'M')) => Input(A::ToggleMenu),

        (Scene::Menu, KeyCode::Up) => Input(A::MenuPrev),
        (Scene::Menu, KeyCode::Down) => Input(A::MenuNext),
        (Scene::Menu, KeyCode::Char('+' | '=') | KeyCode::Right) => Input(A::MenuInc),
        (Scene::Menu, KeyCode::Char('-' | '_') | KeyCode::Left) => Input(A::MenuDec),
        (Scene::Menu, KeyCode::Enter) => Input(A::MenuApply),
        (Scene::Menu, KeyCode::Esc) => Input(A::MenuCancel),

        (Scene::Table, KeyCode::Char('d' | 'D')) => Input(A::Draw),
        (Scene::Table, KeyCode::Char(c @ '1'..='4')) => Input(A::Steal((c as u8 - b'1') as usize)),
        (Scene::Table, KeyCode::Left) => Input(A::CursorLeft),
        (Scene::Table, KeyCode::Right) => Input(A::CursorRight),
        (Scene::Table, KeyCode::Enter) => Input(A::Discard),
        (Scene::Table, KeyCode::Char('n' | 'N')) => Input(A::NewGame),
        (Scene::Table, KeyCode::Char('x' | 'X')) => Input(A::Forfeit),
        _ => Ignored,
    }
}

/// Apply a key press to the app. Returns `true` when the app should exit.
///
/// A queued seat action is played straight away instead of on the next tick.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    match map_key(app, code) {
        KeyOutcome::Exit => true,
        KeyOutcome::Input(action) => {
            if app.handle_input(action) {
                app.agents_on_turn();
            }
            false
        }
        KeyOutcome::Ignored => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::AppSettings;

    #[test]
    fn digits_map_to_seats() {
        let mut app = AppState::new(AppSettings::default()).unwrap();
        app.scene = Scene::Table;
        assert_eq!(map_key(&app, KeyCode::Char('1')), KeyOutcome::Input(InputAction::Steal(0)));
        assert_eq!(map_key(&app, KeyCode::Char('4')), KeyOutcome::Input(InputAction::Steal(3)));
        assert_eq!(map_key(&app, KeyCode::Char('5')), KeyOutcome::Ignored);
    }

    #[test]
    fn help_overlay_swallows_table_keys() {
        let mut app = AppState::new(AppSettings::default()).unwrap();
        app.scene = Scene::Table;
        let _ = app.handle_input(InputAction::ToggleHelp);
        assert_eq!(map_key(&app, KeyCode::Char('d')), KeyOutcome::Ignored);
        assert_eq!(map_key(&app, KeyCode::Esc), KeyOutcome::Input(InputAction::ToggleHelp));
    }
}
