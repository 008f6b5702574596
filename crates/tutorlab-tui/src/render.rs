//! Top-level frame rendering: dispatches to the active screen.

use ratatui::Frame;

use crate::features::{chat, scores, setup};
use crate::state::{AppState, Screen};

const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Picks the spinner glyph for the current tick.
pub(crate) fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()]
}

/// Renders the full frame for the active screen.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    match &state.screen {
        Screen::Setup(s) => setup::render_setup(frame, area, s, state.tick),
        Screen::Chat(c) => chat::render_chat(frame, area, c, state.tick),
        Screen::Scores(s) => scores::render_scores(frame, area, s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner_frame(0), "◐");
        assert_eq!(spinner_frame(4), "◐");
        assert_eq!(spinner_frame(3), "◒");
    }
}
