//! UI effect types.
//!
//! Effects are commands returned by the reducer for the runtime to execute.
//! They represent I/O only: the reducer mutates state and returns effects,
//! never performs network calls or file writes itself.

use tutorlab_core::api::{MessageRequest, SessionStartRequest};

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Fetch the persona catalog for the setup screen.
    LoadPersonas,

    /// Start a new tutoring session.
    StartSession(SessionStartRequest),

    /// Send a tutor message to the running session.
    SendMessage {
        session_id: String,
        request: MessageRequest,
    },

    /// End the session and request scores.
    EndSession { session_id: String },

    /// Persist the tutor name to config for next time.
    PersistTutorName { name: String },
}
