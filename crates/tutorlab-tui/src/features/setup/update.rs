//! Key handling for the setup screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{SetupField, SetupState};
use crate::effects::UiEffect;

/// Handles a key press on the setup screen, returning effects to execute.
pub fn handle_key(setup: &mut SetupState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Edits are ignored while the start request is in flight; the only
    // escape hatch is quitting.
    if setup.pending {
        if ctrl && key.code == KeyCode::Char('c') {
            return vec![UiEffect::Quit];
        }
        return Vec::new();
    }

    match key.code {
        KeyCode::Char('c') if ctrl => return vec![UiEffect::Quit],
        KeyCode::Char('s') if ctrl => return submit(setup),
        KeyCode::Tab => setup.focus = setup.focus.next(),
        KeyCode::BackTab => setup.focus = setup.focus.prev(),
        KeyCode::Enter => {
            // Enter advances through the form; on the persona list it
            // submits, matching the original form's single submit button.
            if setup.focus == SetupField::Persona {
                return submit(setup);
            }
            setup.focus = setup.focus.next();
        }
        _ => match setup.focus {
            SetupField::Name => edit_buffer(&mut setup.name, key, ctrl),
            SetupField::Problem => edit_buffer(&mut setup.problem, key, ctrl),
            SetupField::Persona => match key.code {
                KeyCode::Up if setup.selected > 0 => setup.selected -= 1,
                KeyCode::Down if setup.selected + 1 < setup.personas.len() => {
                    setup.selected += 1;
                }
                _ => {}
            },
        },
    }
    Vec::new()
}

fn submit(setup: &mut SetupState) -> Vec<UiEffect> {
    let Some(request) = setup.start_request() else {
        setup.error = Some("Enter your name and a math problem first.".to_string());
        return Vec::new();
    };
    setup.pending = true;
    setup.error = None;
    vec![UiEffect::StartSession(request)]
}

fn edit_buffer(buffer: &mut crate::common::TextBuffer, key: KeyEvent, ctrl: bool) {
    match key.code {
        KeyCode::Char(c) if !ctrl => buffer.insert_char(c),
        KeyCode::Backspace => buffer.backspace(),
        KeyCode::Delete => buffer.delete(),
        KeyCode::Left => buffer.move_left(),
        KeyCode::Right => buffer.move_right(),
        KeyCode::Home => buffer.move_home(),
        KeyCode::End => buffer.move_end(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use tutorlab_core::config::Config;

    use super::*;
    use crate::state::SetupPrefill;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn filled_state() -> SetupState {
        let prefill = SetupPrefill {
            tutor_name: Some("Ada".to_string()),
            math_problem: Some("2x = 8".to_string()),
            persona: None,
        };
        SetupState::new(&Config::default(), prefill)
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut s = SetupState::new(&Config::default(), SetupPrefill::default());
        handle_key(&mut s, key(KeyCode::Char('A')));
        assert_eq!(s.name.text(), "A");
        handle_key(&mut s, key(KeyCode::Tab));
        handle_key(&mut s, key(KeyCode::Char('x')));
        assert_eq!(s.problem.text(), "x");
        assert_eq!(s.name.text(), "A");
    }

    #[test]
    fn test_persona_navigation_clamps() {
        let mut s = filled_state();
        s.focus = SetupField::Persona;
        handle_key(&mut s, key(KeyCode::Up));
        assert_eq!(s.selected, 0);
        for _ in 0..10 {
            handle_key(&mut s, key(KeyCode::Down));
        }
        assert_eq!(s.selected, s.personas.len() - 1);
    }

    #[test]
    fn test_enter_on_persona_submits() {
        let mut s = filled_state();
        s.focus = SetupField::Persona;
        let effects = handle_key(&mut s, key(KeyCode::Enter));
        assert!(matches!(effects.as_slice(), [UiEffect::StartSession(_)]));
        assert!(s.pending);
    }

    #[test]
    fn test_ctrl_s_submits_from_any_field() {
        let mut s = filled_state();
        let effects = handle_key(&mut s, ctrl('s'));
        assert!(matches!(effects.as_slice(), [UiEffect::StartSession(_)]));
    }

    #[test]
    fn test_incomplete_submit_sets_error() {
        let mut s = SetupState::new(&Config::default(), SetupPrefill::default());
        let effects = handle_key(&mut s, ctrl('s'));
        assert!(effects.is_empty());
        assert!(s.error.is_some());
        assert!(!s.pending);
    }

    #[test]
    fn test_pending_ignores_edits_but_allows_quit() {
        let mut s = filled_state();
        s.pending = true;
        assert!(handle_key(&mut s, key(KeyCode::Char('x'))).is_empty());
        assert_eq!(s.name.text(), "Ada");
        assert_eq!(handle_key(&mut s, ctrl('c')), vec![UiEffect::Quit]);
    }

    #[test]
    fn test_double_submit_guard() {
        let mut s = filled_state();
        assert_eq!(handle_key(&mut s, ctrl('s')).len(), 1);
        // Second submit while pending produces nothing.
        assert!(handle_key(&mut s, ctrl('s')).is_empty());
    }
}
