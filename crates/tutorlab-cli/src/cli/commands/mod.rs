//! Command handlers.

pub mod categories;
pub mod chat;
pub mod config;
pub mod health;
pub mod personas;
