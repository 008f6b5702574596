//! Key and mouse handling for the chat screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use tutorlab_core::api::{MessageRequest, Sender};

use super::state::{ChatPending, ChatState, Message};
use crate::effects::UiEffect;

/// Lines per PageUp/PageDown step.
const PAGE_SCROLL: usize = 10;
/// Lines per mouse wheel notch.
const WHEEL_SCROLL: usize = 3;

/// Handles a key press on the chat screen.
pub fn handle_key(chat: &mut ChatState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => return vec![UiEffect::Quit],
        KeyCode::Char('e') if ctrl => return end_session(chat),
        KeyCode::Enter => return send(chat),
        KeyCode::Esc => chat.input.clear(),
        KeyCode::PageUp => chat.scroll.scroll_up(PAGE_SCROLL),
        KeyCode::PageDown => chat.scroll.scroll_down(PAGE_SCROLL),
        KeyCode::Up => chat.scroll.scroll_up(1),
        KeyCode::Down => chat.scroll.scroll_down(1),
        KeyCode::Char(c) if !ctrl && chat.can_send() => chat.input.insert_char(c),
        KeyCode::Backspace => chat.input.backspace(),
        KeyCode::Delete => chat.input.delete(),
        KeyCode::Left => chat.input.move_left(),
        KeyCode::Right => chat.input.move_right(),
        KeyCode::Home => chat.input.move_home(),
        KeyCode::End => chat.input.move_end(),
        _ => {}
    }
    Vec::new()
}

/// Handles mouse wheel scrolling over the transcript.
pub fn handle_mouse(chat: &mut ChatState, mouse: MouseEvent) -> Vec<UiEffect> {
    match mouse.kind {
        MouseEventKind::ScrollUp => chat.scroll.scroll_up(WHEEL_SCROLL),
        MouseEventKind::ScrollDown => chat.scroll.scroll_down(WHEEL_SCROLL),
        _ => {}
    }
    Vec::new()
}

fn send(chat: &mut ChatState) -> Vec<UiEffect> {
    if !chat.can_send() || chat.input.is_blank() {
        return Vec::new();
    }

    let content = chat.input.take_trimmed();
    chat.push_message(Message::tutor(content.clone()));
    chat.pending = ChatPending::AwaitingReply;
    chat.error = None;

    vec![UiEffect::SendMessage {
        session_id: chat.session_id.clone(),
        request: MessageRequest {
            message: content,
            sender: Sender::Tutor,
        },
    }]
}

fn end_session(chat: &mut ChatState) -> Vec<UiEffect> {
    if chat.is_busy() {
        return Vec::new();
    }
    chat.pending = ChatPending::Ending;
    chat.error = None;
    vec![UiEffect::EndSession {
        session_id: chat.session_id.clone(),
    }]
}

#[cfg(test)]
mod tests {
    use tutorlab_core::api::{PersonaSummary, SessionStartResponse};

    use super::*;

    fn chat() -> ChatState {
        ChatState::from_start(
            SessionStartResponse {
                session_id: "s-1".to_string(),
                initial_response: "Hi!".to_string(),
                persona_info: PersonaSummary {
                    name: "Struggling Sam".to_string(),
                    kind: "struggling_sam".to_string(),
                },
            },
            "2x = 8".to_string(),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(chat: &mut ChatState, text: &str) {
        for c in text.chars() {
            handle_key(chat, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_enter_sends_and_appends_tutor_bubble() {
        let mut c = chat();
        type_text(&mut c, "What do you know?");
        let effects = handle_key(&mut c, key(KeyCode::Enter));

        assert_eq!(c.messages.len(), 2);
        assert_eq!(c.messages[1].sender, Sender::Tutor);
        assert_eq!(c.pending, ChatPending::AwaitingReply);
        assert!(c.input.is_blank());
        match effects.as_slice() {
            [UiEffect::SendMessage { session_id, request }] => {
                assert_eq!(session_id, "s-1");
                assert_eq!(request.message, "What do you know?");
                assert_eq!(request.sender, Sender::Tutor);
            }
            other => panic!("unexpected effects: {other:?}"),
        }
    }

    #[test]
    fn test_blank_input_does_not_send() {
        let mut c = chat();
        type_text(&mut c, "   ");
        assert!(handle_key(&mut c, key(KeyCode::Enter)).is_empty());
        assert_eq!(c.messages.len(), 1);
    }

    #[test]
    fn test_no_send_while_awaiting_reply() {
        let mut c = chat();
        c.pending = ChatPending::AwaitingReply;
        type_text(&mut c, "hello");
        // Typing is swallowed while busy, and Enter sends nothing.
        assert!(c.input.is_blank());
        assert!(handle_key(&mut c, key(KeyCode::Enter)).is_empty());
    }

    #[test]
    fn test_no_send_after_session_inactive() {
        let mut c = chat();
        c.session_active = false;
        type_text(&mut c, "hello");
        assert!(handle_key(&mut c, key(KeyCode::Enter)).is_empty());
        assert_eq!(c.messages.len(), 1);
    }

    #[test]
    fn test_ctrl_e_ends_session_once() {
        let mut c = chat();
        let effects = handle_key(&mut c, ctrl('e'));
        assert_eq!(
            effects,
            vec![UiEffect::EndSession {
                session_id: "s-1".to_string()
            }]
        );
        assert_eq!(c.pending, ChatPending::Ending);
        // Guarded while the end request is in flight.
        assert!(handle_key(&mut c, ctrl('e')).is_empty());
    }

    #[test]
    fn test_esc_clears_input() {
        let mut c = chat();
        type_text(&mut c, "half a thought");
        handle_key(&mut c, key(KeyCode::Esc));
        assert!(c.input.is_blank());
    }

    #[test]
    fn test_scroll_keys_move_transcript() {
        let mut c = chat();
        handle_key(&mut c, key(KeyCode::PageUp));
        assert_eq!(c.scroll.from_bottom, PAGE_SCROLL);
        handle_key(&mut c, key(KeyCode::Down));
        assert_eq!(c.scroll.from_bottom, PAGE_SCROLL - 1);
        handle_key(&mut c, key(KeyCode::PageDown));
        assert!(c.scroll.is_following());
    }
}
