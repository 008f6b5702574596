//! UI event types.
//!
//! All inputs to the TUI (terminal, timers, API results) are converted to
//! `UiEvent` before being processed by the reducer. API calls run on tokio
//! tasks in the runtime and report back through `ApiUiEvent`s; errors are
//! pre-rendered to strings so the reducer never needs the error types.

use crossterm::event::Event as CrosstermEvent;
use tutorlab_core::api::{MessageResponse, SessionEndResponse, SessionStartResponse};
use tutorlab_core::personas::PersonaInfo;

/// Results of async API calls.
#[derive(Debug)]
pub enum ApiUiEvent {
    /// `POST /sessions/start` finished.
    SessionStarted(Result<SessionStartResponse, String>),

    /// `POST /sessions/{id}/message` finished.
    ReplyReceived(Result<MessageResponse, String>),

    /// `POST /sessions/{id}/end` finished.
    SessionEnded(Result<SessionEndResponse, String>),

    /// `GET /personas` finished (never fails; degrades to built-ins).
    PersonasLoaded(Vec<PersonaInfo>),
}

/// Unified event enum for the TUI.
#[derive(Debug)]
pub enum UiEvent {
    /// Current terminal size, emitted by the runtime at the start of every
    /// loop iteration so the reducer can do geometry-aware work (scroll
    /// clamping) without touching the terminal.
    Frame { width: u16, height: u16 },

    /// Timer tick (for spinner animation and poll cadence).
    Tick,

    /// Terminal input event (key, mouse, paste, resize).
    Terminal(CrosstermEvent),

    /// Async API result delivered through the runtime inbox.
    Api(ApiUiEvent),
}
