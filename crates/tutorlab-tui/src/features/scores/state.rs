//! Scores screen state.

use tutorlab_core::api::SessionEndResponse;

/// Final results for a finished session.
#[derive(Debug, Clone)]
pub struct ScoresState {
    pub persona_name: String,
    pub problem: String,
    pub results: SessionEndResponse,
}

impl ScoresState {
    pub fn new(persona_name: String, problem: String, results: SessionEndResponse) -> Self {
        Self {
            persona_name,
            problem,
            results,
        }
    }
}
