//! Core library for tutorlab: configuration, backend REST client, and the
//! shared persona catalog.
//!
//! The actual tutoring logic (persona simulation, rubric scoring) lives in the
//! backend service; this crate only talks to it.

pub mod api;
pub mod config;
pub mod interrupt;
pub mod logging;
pub mod personas;
