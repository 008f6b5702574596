//! TUI runtime: owns the terminal, runs the event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here. The
//! reducer stays pure and produces effects; this module executes them.
//!
//! Async API calls use an inbox pattern: handlers are spawned on tokio and
//! send their result `UiEvent` to `inbox_tx`; the loop drains `inbox_rx`
//! each frame alongside terminal events.

mod handlers;

use std::future::Future;
use std::io::Stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;
use tutorlab_core::api::SessionClient;
use tutorlab_core::config::Config;
use tutorlab_core::interrupt;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::{AppState, SetupPrefill};
use crate::{render, terminal, update};

/// Poll cadence while a spinner is animating or input arrived recently.
const FAST_POLL: Duration = Duration::from_millis(16);

/// Poll cadence when nothing is in flight; keeps CPU usage down.
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Terminal state is restored on drop, panic,
/// or Ctrl+C.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    client: Arc<SessionClient>,
    inbox_tx: mpsc::UnboundedSender<UiEvent>,
    inbox_rx: mpsc::UnboundedReceiver<UiEvent>,
    last_tick: Instant,
    /// Last terminal input, for the fast-tick window while typing/scrolling.
    last_terminal_event: Instant,
}

impl TuiRuntime {
    pub fn new(config: Config, prefill: SetupPrefill) -> Result<Self> {
        // The panic hook must be installed before entering the alternate
        // screen, and Ctrl+C must restore the terminal too.
        terminal::install_panic_hook();
        interrupt::set_restore_hook(|| {
            let _ = terminal::restore_terminal();
        });
        interrupt::reset();

        let client = Arc::new(SessionClient::new(
            &config.server_url,
            config.request_timeout(),
        )?);

        let terminal = terminal::setup_terminal().context("setup terminal")?;
        let state = AppState::new(config, prefill);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        let now = Instant::now();
        Ok(Self {
            terminal,
            state,
            client,
            inbox_tx,
            inbox_rx,
            last_tick: now,
            last_terminal_event: now,
        })
    }

    /// Runs the event loop until quit, then restores the terminal.
    pub fn run(&mut self) -> Result<()> {
        // Fetch the persona catalog up front so the setup list is live.
        self.execute_effect(UiEffect::LoadPersonas);

        let result = self.event_loop();
        let _ = terminal::restore_terminal();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.should_quit {
            // A signal-driven interrupt quits with the interrupt exit code;
            // in-app Ctrl+C arrives as a key event and quits normally.
            if interrupt::is_interrupted() || interrupt::should_terminate() {
                return Err(interrupt::InterruptedError.into());
            }

            let mut events = self.collect_events()?;

            // Prepend a Frame event with the current terminal size so scroll
            // state can be clamped against real layout before anything else.
            let size = self.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            for event in events {
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = Instant::now();
                }
                // Only Tick triggers a render; terminal events batch their
                // state updates into the next Tick frame.
                if matches!(&event, UiEvent::Tick) {
                    dirty = true;
                }
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(frame, &self.state);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Collects pending events: drains the inbox, polls the terminal until
    /// the next tick is due, then emits `Tick`.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let tick_interval = tick_interval(self.state.is_busy(), self.last_terminal_event.elapsed());

        while let Ok(event) = self.inbox_rx.try_recv() {
            events.push(event);
        }

        // Block until the tick is due unless there is already work to do,
        // so input stays responsive without busy-waiting.
        let poll_duration = if events.is_empty() {
            tick_interval.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async handler and forwards its result to the inbox.
    fn spawn_effect<F, Fut>(&self, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(f().await);
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::LoadPersonas => {
                let client = self.client.clone();
                self.spawn_effect(|| handlers::load_personas(client));
            }
            UiEffect::StartSession(request) => {
                let client = self.client.clone();
                self.spawn_effect(|| handlers::start_session(client, request));
            }
            UiEffect::SendMessage {
                session_id,
                request,
            } => {
                let client = self.client.clone();
                self.spawn_effect(|| handlers::send_message(client, session_id, request));
            }
            UiEffect::EndSession { session_id } => {
                let client = self.client.clone();
                self.spawn_effect(|| handlers::end_session(client, session_id));
            }
            UiEffect::PersistTutorName { name } => {
                // Config writes are quick; a failure only costs the prefill.
                if let Err(error) = Config::save_tutor_name(&name) {
                    tracing::warn!("failed to save tutor name: {error:#}");
                }
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}

/// Picks the poll cadence: fast while a request is in flight (spinner
/// animation) or right after terminal input (keystroke echo), idle otherwise.
fn tick_interval(busy: bool, since_terminal: Duration) -> Duration {
    if busy || since_terminal < IDLE_POLL {
        FAST_POLL
    } else {
        IDLE_POLL
    }
}
