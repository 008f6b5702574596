//! Top-level reducer: applies a `UiEvent` to `AppState`, returns effects.
//!
//! Screen-local input handling lives in each feature's `update` module; this
//! module owns the transitions between screens (setup → chat → scores) and
//! routes async API results to whichever screen they belong to. Results for
//! a screen that is no longer active are dropped.

use crossterm::event::{Event as CrosstermEvent, KeyEventKind};
use tracing::debug;

use crate::effects::UiEffect;
use crate::events::{ApiUiEvent, UiEvent};
use crate::features::chat::{self, ChatPending, ChatState};
use crate::features::scores::{self, ScoresAction, ScoresState};
use crate::features::setup::{self, SetupState};
use crate::state::{AppState, Screen, SetupPrefill};

/// Applies one event, mutating state and returning effects for the runtime.
pub fn update(state: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    let effects = match event {
        UiEvent::Frame { width, height } => {
            clamp_scroll(state, width, height);
            Vec::new()
        }
        UiEvent::Tick => {
            state.tick = state.tick.wrapping_add(1);
            Vec::new()
        }
        UiEvent::Terminal(event) => handle_terminal(state, event),
        UiEvent::Api(event) => handle_api(state, event),
    };

    if effects.contains(&UiEffect::Quit) {
        state.should_quit = true;
    }
    effects
}

/// Clamps the chat scroll offset to the transcript so repeated PageUp cannot
/// push it past the first line.
fn clamp_scroll(state: &mut AppState, width: u16, height: u16) {
    if let Screen::Chat(chat) = &mut state.screen {
        let total = chat::transcript_line_count(chat, width);
        let view = chat::transcript_height(height);
        chat.scroll.clamp(total.saturating_sub(view));
    }
}

fn handle_terminal(state: &mut AppState, event: CrosstermEvent) -> Vec<UiEffect> {
    match event {
        CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => {
            match &mut state.screen {
                Screen::Setup(setup) => setup::handle_key(setup, key),
                Screen::Chat(chat) => chat::handle_key(chat, key),
                Screen::Scores(_) => match scores::handle_key(key) {
                    ScoresAction::None => Vec::new(),
                    ScoresAction::Quit => vec![UiEffect::Quit],
                    ScoresAction::NewSession => new_session(state),
                },
            }
        }
        CrosstermEvent::Mouse(mouse) => match &mut state.screen {
            Screen::Chat(chat) => chat::handle_mouse(chat, mouse),
            _ => Vec::new(),
        },
        CrosstermEvent::Paste(text) => {
            paste(state, &text);
            Vec::new()
        }
        _ => Vec::new(),
    }
}

fn paste(state: &mut AppState, text: &str) {
    match &mut state.screen {
        Screen::Setup(setup) => {
            if let Some(buffer) = setup.focused_buffer_mut() {
                buffer.insert_str(text);
            }
        }
        Screen::Chat(chat) if chat.can_send() => chat.input.insert_str(text),
        _ => {}
    }
}

/// Tears down the scores screen and returns to setup, keeping the problem
/// prefilled so a tutor can retry the same exercise with another persona.
fn new_session(state: &mut AppState) -> Vec<UiEffect> {
    let Screen::Scores(scores) = &state.screen else {
        return Vec::new();
    };
    let prefill = SetupPrefill {
        tutor_name: state.config.tutor_name.clone(),
        math_problem: Some(scores.problem.clone()),
        persona: None,
    };
    state.screen = Screen::Setup(SetupState::new(&state.config, prefill));
    vec![UiEffect::LoadPersonas]
}

fn handle_api(state: &mut AppState, event: ApiUiEvent) -> Vec<UiEffect> {
    match event {
        ApiUiEvent::PersonasLoaded(personas) => {
            if let Screen::Setup(setup) = &mut state.screen {
                setup.set_personas(personas);
            }
            Vec::new()
        }
        ApiUiEvent::SessionStarted(result) => session_started(state, result),
        ApiUiEvent::ReplyReceived(result) => {
            if let Screen::Chat(chat) = &mut state.screen {
                chat.apply_reply(result);
            } else {
                debug!("dropping reply for inactive chat screen");
            }
            Vec::new()
        }
        ApiUiEvent::SessionEnded(result) => session_ended(state, result),
    }
}

fn session_started(
    state: &mut AppState,
    result: Result<tutorlab_core::api::SessionStartResponse, String>,
) -> Vec<UiEffect> {
    let Screen::Setup(setup) = &mut state.screen else {
        debug!("dropping session start result for inactive setup screen");
        return Vec::new();
    };

    match result {
        Ok(response) => {
            let name = setup.name.text().trim().to_string();
            let problem = setup.problem.text().trim().to_string();
            state.screen = Screen::Chat(ChatState::from_start(response, problem));

            // Remember the tutor name for the next run.
            let mut effects = Vec::new();
            if !name.is_empty() && state.config.tutor_name.as_deref() != Some(name.as_str()) {
                state.config.tutor_name = Some(name.clone());
                effects.push(UiEffect::PersistTutorName { name });
            }
            effects
        }
        Err(error) => {
            setup.pending = false;
            setup.error = Some(error);
            Vec::new()
        }
    }
}

fn session_ended(
    state: &mut AppState,
    result: Result<tutorlab_core::api::SessionEndResponse, String>,
) -> Vec<UiEffect> {
    let Screen::Chat(chat) = &mut state.screen else {
        debug!("dropping session end result for inactive chat screen");
        return Vec::new();
    };

    match result {
        Ok(response) => {
            let scores = ScoresState::new(
                chat.persona_name.clone(),
                chat.problem.clone(),
                response,
            );
            state.screen = Screen::Scores(scores);
        }
        Err(error) => {
            chat.pending = ChatPending::Idle;
            chat.error = Some(error);
        }
    }
    Vec::new()
}
