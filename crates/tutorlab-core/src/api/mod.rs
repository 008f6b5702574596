//! Backend REST API: request/response types and the session client.

mod client;
mod types;

pub use client::SessionClient;
pub use types::{
    HealthResponse, MessageRequest, MessageResponse, PersonaSummary, Scores, ScoringCategory,
    Sender, SessionEndResponse, SessionStartRequest, SessionStartResponse,
};
