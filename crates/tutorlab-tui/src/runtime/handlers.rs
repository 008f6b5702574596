//! Effect handlers for the TUI runtime.
//!
//! Handlers are pure async functions that return a `UiEvent`; the runtime
//! spawns them and forwards the result to the inbox. Errors are flattened to
//! their `anyhow` chain here so the reducer only sees strings.

use std::sync::Arc;

use tutorlab_core::api::{MessageRequest, SessionClient, SessionStartRequest};

use crate::events::{ApiUiEvent, UiEvent};

pub async fn load_personas(client: Arc<SessionClient>) -> UiEvent {
    UiEvent::Api(ApiUiEvent::PersonasLoaded(client.personas().await))
}

pub async fn start_session(client: Arc<SessionClient>, request: SessionStartRequest) -> UiEvent {
    let result = client
        .start_session(&request)
        .await
        .map_err(|e| format!("{e:#}"));
    UiEvent::Api(ApiUiEvent::SessionStarted(result))
}

pub async fn send_message(
    client: Arc<SessionClient>,
    session_id: String,
    request: MessageRequest,
) -> UiEvent {
    let result = client
        .send_message(&session_id, &request)
        .await
        .map_err(|e| format!("{e:#}"));
    UiEvent::Api(ApiUiEvent::ReplyReceived(result))
}

pub async fn end_session(client: Arc<SessionClient>, session_id: String) -> UiEvent {
    let result = client
        .end_session(&session_id)
        .await
        .map_err(|e| format!("{e:#}"));
    UiEvent::Api(ApiUiEvent::SessionEnded(result))
}
