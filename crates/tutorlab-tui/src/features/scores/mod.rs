//! Scores screen: rubric results shown after a session ends.

mod render;
mod state;
mod update;

pub use render::render_scores;
pub use state::ScoresState;
pub use update::{ScoresAction, handle_key};
