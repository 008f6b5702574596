//! Per-screen features: state, key handling, and rendering.

pub mod chat;
pub mod scores;
pub mod setup;
