//! Session setup screen: tutor name, math problem, persona picker.

mod render;
mod state;
mod update;

pub use render::render_setup;
pub use state::{SetupField, SetupState};
pub use update::handle_key;
