//! Chat screen state.

use chrono::{DateTime, Local};
use tutorlab_core::api::{MessageResponse, Sender, SessionStartResponse};

use crate::common::TextBuffer;

/// Shown as the learner's reply when a send fails, so the conversation keeps
/// a consistent shape instead of surfacing a transport error mid-roleplay.
pub const SEND_FAILURE_REPLY: &str =
    "Sorry, I had trouble understanding that. Can you try again?";

/// One transcript message. Client-local; the backend keeps its own history.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Local>,
}

impl Message {
    pub fn tutor(content: impl Into<String>) -> Self {
        Self::new(content, Sender::Tutor)
    }

    pub fn learner(content: impl Into<String>) -> Self {
        Self::new(content, Sender::Learner)
    }

    fn new(content: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content: content.into(),
            sender,
            timestamp: Local::now(),
        }
    }
}

/// What the chat screen is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatPending {
    Idle,
    /// Tutor message sent, learner reply not yet received.
    AwaitingReply,
    /// End-session request in flight.
    Ending,
}

/// Transcript scroll position, counted in lines from the bottom.
///
/// Zero means "follow": stick to the newest message as lines arrive.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollState {
    pub from_bottom: usize,
}

impl ScrollState {
    pub fn is_following(&self) -> bool {
        self.from_bottom == 0
    }

    pub fn scroll_up(&mut self, lines: usize) {
        // Clamped against content height on the next frame.
        self.from_bottom = self.from_bottom.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.from_bottom = self.from_bottom.saturating_sub(lines);
    }

    pub fn follow(&mut self) {
        self.from_bottom = 0;
    }

    /// Clamp to the real content height, known once the frame size is.
    pub fn clamp(&mut self, max_from_bottom: usize) {
        self.from_bottom = self.from_bottom.min(max_from_bottom);
    }
}

/// State of a running (or just-finished) tutoring session.
#[derive(Debug)]
pub struct ChatState {
    pub session_id: String,
    pub persona_name: String,
    pub problem: String,
    pub messages: Vec<Message>,
    pub input: TextBuffer,
    pub pending: ChatPending,
    /// False once the backend considers the session over; input is disabled
    /// and only ending remains.
    pub session_active: bool,
    pub scroll: ScrollState,
    /// Error from a failed end-session attempt, shown in the status line.
    pub error: Option<String>,
}

impl ChatState {
    /// Builds the chat screen from a successful session start.
    ///
    /// The learner's opening message becomes transcript entry #1.
    pub fn from_start(response: SessionStartResponse, problem: String) -> Self {
        Self {
            session_id: response.session_id,
            persona_name: response.persona_info.name,
            problem,
            messages: vec![Message::learner(response.initial_response)],
            input: TextBuffer::new(),
            pending: ChatPending::Idle,
            session_active: true,
            scroll: ScrollState::default(),
            error: None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending != ChatPending::Idle
    }

    /// Input accepts a new tutor message only when idle and the session is
    /// still active.
    pub fn can_send(&self) -> bool {
        !self.is_busy() && self.session_active
    }

    /// Appends a message and snaps the transcript back to the bottom.
    pub fn push_message(&mut self, message: Message) {
        self.messages.push(message);
        self.scroll.follow();
    }

    /// Applies the learner's reply (or the failure fallback).
    pub fn apply_reply(&mut self, result: Result<MessageResponse, String>) {
        self.pending = ChatPending::Idle;
        match result {
            Ok(response) => {
                self.session_active = response.session_active;
                self.push_message(Message::learner(response.response));
            }
            Err(error) => {
                tracing::warn!("send message failed: {error}");
                self.push_message(Message::learner(SEND_FAILURE_REPLY));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tutorlab_core::api::PersonaSummary;

    use super::*;

    fn start_response() -> SessionStartResponse {
        SessionStartResponse {
            session_id: "s-1".to_string(),
            initial_response: "Hi! I'm ready to work on this problem.".to_string(),
            persona_info: PersonaSummary {
                name: "Struggling Sam".to_string(),
                kind: "struggling_sam".to_string(),
            },
        }
    }

    #[test]
    fn test_from_start_seeds_learner_message() {
        let chat = ChatState::from_start(start_response(), "2x = 8".to_string());
        assert_eq!(chat.messages.len(), 1);
        assert_eq!(chat.messages[0].sender, Sender::Learner);
        assert!(chat.session_active);
        assert!(chat.can_send());
    }

    #[test]
    fn test_apply_reply_appends_and_tracks_session_active() {
        let mut chat = ChatState::from_start(start_response(), "2x = 8".to_string());
        chat.pending = ChatPending::AwaitingReply;
        chat.apply_reply(Ok(MessageResponse {
            response: "So x is 4?".to_string(),
            session_active: false,
        }));
        assert_eq!(chat.pending, ChatPending::Idle);
        assert_eq!(chat.messages.len(), 2);
        assert!(!chat.session_active);
        assert!(!chat.can_send());
    }

    #[test]
    fn test_apply_reply_failure_appends_fallback() {
        let mut chat = ChatState::from_start(start_response(), "2x = 8".to_string());
        chat.pending = ChatPending::AwaitingReply;
        chat.apply_reply(Err("connection refused".to_string()));
        assert_eq!(chat.messages.len(), 2);
        assert_eq!(chat.messages[1].content, SEND_FAILURE_REPLY);
        assert!(chat.session_active, "a transport error doesn't end the session");
    }

    #[test]
    fn test_push_message_resumes_following() {
        let mut chat = ChatState::from_start(start_response(), "2x = 8".to_string());
        chat.scroll.scroll_up(10);
        assert!(!chat.scroll.is_following());
        chat.push_message(Message::tutor("hello"));
        assert!(chat.scroll.is_following());
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = Message::tutor("x");
        let b = Message::tutor("x");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_scroll_clamps() {
        let mut scroll = ScrollState::default();
        scroll.scroll_up(100);
        scroll.clamp(7);
        assert_eq!(scroll.from_bottom, 7);
        scroll.scroll_down(3);
        assert_eq!(scroll.from_bottom, 4);
        scroll.scroll_down(100);
        assert!(scroll.is_following());
    }
}
