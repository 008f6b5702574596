//! Full-screen terminal UI for tutorlab.
//!
//! Three screens driven by an Elm-style reducer: session setup, the
//! tutoring chat, and the final rubric scores.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr, stdout};

use anyhow::Result;
pub use runtime::TuiRuntime;
pub use state::SetupPrefill;
use tutorlab_core::config::Config;

/// Runs the interactive tutoring session UI.
///
/// Must be called inside a tokio runtime; API calls are spawned as tasks.
pub async fn run_chat(config: Config, prefill: SetupPrefill) -> Result<()> {
    if !stdout().is_terminal() || !stderr().is_terminal() {
        anyhow::bail!(
            "chat requires a terminal.\n\
             Use `tutorlab personas` or `tutorlab health` for non-interactive checks."
        );
    }

    let mut runtime = TuiRuntime::new(config, prefill)?;
    runtime.run()
}
