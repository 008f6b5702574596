//! Shared building blocks for the screens.

pub mod math;
pub mod text;
pub mod text_buffer;

pub use text_buffer::TextBuffer;
