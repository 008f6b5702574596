//! Application state composition.
//!
//! The TUI is a three-screen state machine:
//!
//! ```text
//! Setup ──start──▶ Chat ──end──▶ Scores ──new session──▶ Setup
//! ```
//!
//! Each screen owns its own state struct (under `features/`); `AppState`
//! holds whichever screen is active plus the few cross-screen fields.
//! Nothing is persisted: a new session starts from a fresh `SetupState`.

use tutorlab_core::config::Config;

use crate::features::chat::ChatState;
use crate::features::scores::ScoresState;
use crate::features::setup::SetupState;

/// Which screen is active, with its state.
#[derive(Debug)]
pub enum Screen {
    Setup(SetupState),
    Chat(ChatState),
    Scores(ScoresState),
}

/// Top-level TUI state.
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub screen: Screen,
    pub should_quit: bool,
    /// Monotonic tick counter driving spinner/typing-indicator animation.
    pub tick: u64,
}

impl AppState {
    /// Creates the initial state on the setup screen.
    ///
    /// `prefill` carries CLI `--name/--problem/--persona` overrides.
    pub fn new(config: Config, prefill: SetupPrefill) -> Self {
        let setup = SetupState::new(&config, prefill);
        Self {
            config,
            screen: Screen::Setup(setup),
            should_quit: false,
            tick: 0,
        }
    }

    /// Returns true if a network request is in flight on the active screen.
    ///
    /// Used by the runtime to pick the fast poll cadence while the
    /// spinner/typing indicator animates.
    pub fn is_busy(&self) -> bool {
        match &self.screen {
            Screen::Setup(setup) => setup.pending,
            Screen::Chat(chat) => chat.is_busy(),
            Screen::Scores(_) => false,
        }
    }
}

/// Values pre-filled into the setup form from the command line.
#[derive(Debug, Clone, Default)]
pub struct SetupPrefill {
    pub tutor_name: Option<String>,
    pub math_problem: Option<String>,
    pub persona: Option<String>,
}
