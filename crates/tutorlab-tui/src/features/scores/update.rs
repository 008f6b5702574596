//! Key handling for the scores screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the scores screen asks the app to do. The screen itself has no
/// mutable state; transitions are applied by the top-level reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoresAction {
    None,
    /// Back to setup, keeping tutor name and problem prefilled.
    NewSession,
    Quit,
}

pub fn handle_key(key: KeyEvent) -> ScoresAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return ScoresAction::Quit;
    }
    match key.code {
        KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char('N') => ScoresAction::NewSession,
        KeyCode::Char('q') | KeyCode::Esc => ScoresAction::Quit,
        _ => ScoresAction::None,
    }
}
