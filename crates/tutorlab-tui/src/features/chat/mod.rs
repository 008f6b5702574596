//! Tutoring chat screen: transcript, typing indicator, message input.

mod render;
mod state;
mod update;

pub use render::{render_chat, transcript_height, transcript_line_count};
pub use state::{ChatPending, ChatState, Message, ScrollState};
pub use update::{handle_key, handle_mouse};
