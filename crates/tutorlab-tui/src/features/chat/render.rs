//! Chat screen rendering: header, message bubbles, input, status line.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use tutorlab_core::api::Sender;
use unicode_width::UnicodeWidthStr;

use super::state::{ChatPending, ChatState, Message};
use crate::common::math::{MathSegment, split_math};
use crate::common::text::{truncate_with_ellipsis, wrap_text};
use crate::render::spinner_frame;

/// Bubbles take at most this fraction of the transcript width.
const BUBBLE_WIDTH_PERCENT: u16 = 70;
const INPUT_HEIGHT: u16 = 3;
const HEADER_HEIGHT: u16 = 2;
const STATUS_HEIGHT: u16 = 1;

const MATH_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::ITALIC);

pub fn render_chat(frame: &mut Frame, area: Rect, chat: &ChatState, tick: u64) {
    let [header_area, transcript_area, input_area, status_area] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .areas(area);

    render_header(frame, header_area, chat);
    render_transcript(frame, transcript_area, chat, tick);
    render_input(frame, input_area, chat);
    render_status(frame, status_area, chat, tick);
}

fn render_header(frame: &mut Frame, area: Rect, chat: &ChatState) {
    let width = area.width as usize;
    let title = format!("Tutoring Session with {}", chat.persona_name);
    let problem = format!("Problem: {}", chat.problem);
    let lines = vec![
        Line::from(Span::styled(
            truncate_with_ellipsis(&title, width),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate_with_ellipsis(&problem, width),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Bubble wrap width for a transcript of the given total width (the left
/// border column is excluded first).
fn bubble_width(area_width: u16) -> usize {
    let width = area_width.saturating_sub(2) as usize;
    (width * BUBBLE_WIDTH_PERCENT as usize / 100).max(10)
}

/// Total transcript lines at the given frame width, counting every bubble
/// plus the typing indicator. Lets the reducer clamp scroll without a render.
pub fn transcript_line_count(chat: &ChatState, frame_width: u16) -> usize {
    let bubble_width = bubble_width(frame_width);
    let mut total: usize = chat
        .messages
        .iter()
        .map(|m| bubble_lines(m, bubble_width).len())
        .sum();
    if chat.pending == ChatPending::AwaitingReply {
        total += 2;
    }
    total
}

/// Transcript viewport height for the given frame height (header, input and
/// status rows subtracted).
pub fn transcript_height(frame_height: u16) -> usize {
    frame_height.saturating_sub(HEADER_HEIGHT + INPUT_HEIGHT + STATUS_HEIGHT) as usize
}

fn render_transcript(frame: &mut Frame, area: Rect, chat: &ChatState, tick: u64) {
    let bubble_width = bubble_width(area.width);

    let mut lines: Vec<Line<'static>> = Vec::new();
    for message in &chat.messages {
        lines.extend(bubble_lines(message, bubble_width));
    }
    if chat.pending == ChatPending::AwaitingReply {
        lines.push(typing_indicator(tick));
        lines.push(Line::default());
    }

    // Scroll: from_bottom counts lines hidden below the viewport.
    let height = area.height as usize;
    let total = lines.len();
    let max_from_bottom = total.saturating_sub(height);
    let from_bottom = chat.scroll.from_bottom.min(max_from_bottom);
    let top = total.saturating_sub(height + from_bottom);

    let visible: Vec<Line<'static>> = lines
        .into_iter()
        .skip(top)
        .take(height)
        .collect();

    let block = Block::default().borders(Borders::LEFT).border_style(
        Style::default().fg(Color::DarkGray),
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(visible), inner);
}

/// Renders one message as bubble lines: sender header, math-aware content,
/// timestamp, and a blank separator. Tutor bubbles are right-aligned.
fn bubble_lines(message: &Message, bubble_width: usize) -> Vec<Line<'static>> {
    let is_tutor = message.sender == Sender::Tutor;
    let alignment = if is_tutor {
        Alignment::Right
    } else {
        Alignment::Left
    };
    let label = if is_tutor { "You (Tutor)" } else { "Student" };
    let label_color = if is_tutor { Color::Blue } else { Color::Green };

    let mut lines = Vec::new();
    lines.push(
        Line::from(Span::styled(
            label.to_string(),
            Style::default()
                .fg(label_color)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(alignment),
    );

    for spans in content_lines(&message.content, bubble_width) {
        lines.push(Line::from(spans).alignment(alignment));
    }

    lines.push(
        Line::from(Span::styled(
            message.timestamp.format("%H:%M:%S").to_string(),
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(alignment),
    );
    lines.push(Line::default());
    lines
}

/// Splits message content on math delimiters and wraps it to the bubble
/// width, producing styled spans per line. Display math gets its own lines.
fn content_lines(content: &str, width: usize) -> Vec<Vec<Span<'static>>> {
    let mut flow = SpanFlow::new(width);

    for segment in split_math(content) {
        match segment {
            MathSegment::Display(math) => {
                flow.flush();
                for line in wrap_text(math.trim(), width) {
                    flow.lines.push(vec![Span::styled(line, MATH_STYLE)]);
                }
            }
            MathSegment::Text(text) => flow.push_run(&text, None),
            MathSegment::Inline(math) => flow.push_run(&math, Some(MATH_STYLE)),
        }
    }
    flow.flush();

    if flow.lines.is_empty() {
        flow.lines.push(vec![Span::raw("")]);
    }
    flow.lines
}

/// Word-wraps styled runs into a shared line flow, following the same word
/// semantics as [`wrap_text`]: spaces collapse to single separators and
/// over-long words are split mid-word.
struct SpanFlow {
    width: usize,
    lines: Vec<Vec<Span<'static>>>,
    current: Vec<Span<'static>>,
    current_width: usize,
    // A space was seen since the last placed word.
    pending_sep: bool,
}

impl SpanFlow {
    fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
            lines: Vec::new(),
            current: Vec::new(),
            current_width: 0,
            pending_sep: false,
        }
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.lines.push(std::mem::take(&mut self.current));
            self.current_width = 0;
        }
        self.pending_sep = false;
    }

    fn break_line(&mut self) {
        self.lines.push(std::mem::take(&mut self.current));
        self.current_width = 0;
        self.pending_sep = false;
    }

    fn push_run(&mut self, text: &str, style: Option<Style>) {
        for (i, hard_line) in text.split('\n').enumerate() {
            if i > 0 {
                self.break_line();
            }
            for (j, word) in hard_line.split(' ').enumerate() {
                if j > 0 {
                    self.pending_sep = true;
                }
                if !word.is_empty() {
                    self.push_word(word, style);
                }
            }
        }
    }

    fn push_word(&mut self, word: &str, style: Option<Style>) {
        let make_span = |s: String| match style {
            Some(style) => Span::styled(s, style),
            None => Span::raw(s),
        };
        let word_width = word.width();
        let sep = usize::from(self.pending_sep && self.current_width > 0);

        if self.current_width + sep + word_width <= self.width {
            if sep == 1 {
                self.current.push(Span::raw(" "));
            }
            self.current.push(make_span(word.to_string()));
            self.current_width += sep + word_width;
        } else if word_width <= self.width {
            self.break_line();
            self.current.push(make_span(word.to_string()));
            self.current_width = word_width;
        } else {
            // Word longer than the line: flush and hard-split it.
            if self.current_width > 0 {
                self.break_line();
            }
            for piece in wrap_text(word, self.width) {
                if self.current_width > 0 {
                    self.break_line();
                }
                self.current_width = piece.width();
                self.current.push(make_span(piece));
            }
        }
        self.pending_sep = false;
    }
}

fn typing_indicator(tick: u64) -> Line<'static> {
    let dots = match tick % 4 {
        0 => "·",
        1 => "··",
        2 => "···",
        _ => " ··",
    };
    Line::from(vec![
        Span::styled(
            "Student ".to_string(),
            Style::default().fg(Color::Green).add_modifier(Modifier::DIM),
        ),
        Span::styled(dots.to_string(), Style::default().fg(Color::DarkGray)),
    ])
}

fn render_input(frame: &mut Frame, area: Rect, chat: &ChatState) {
    let enabled = chat.can_send();
    let (title, border_style) = if enabled {
        ("Message", Style::default().fg(Color::Cyan))
    } else {
        ("Message (waiting…)", Style::default().fg(Color::DarkGray))
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(chat.input.text()), inner);

    if enabled {
        let x = inner.x
            + chat
                .input
                .cursor_col()
                .min(inner.width.saturating_sub(1) as usize) as u16;
        frame.set_cursor_position((x, inner.y));
    }
}

fn render_status(frame: &mut Frame, area: Rect, chat: &ChatState, tick: u64) {
    let line = match (&chat.pending, &chat.error) {
        (ChatPending::Ending, _) => Line::from(Span::styled(
            format!("{} Scoring session…", spinner_frame(tick)),
            Style::default().fg(Color::Yellow),
        )),
        (_, Some(error)) => Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )),
        _ if !chat.session_active => Line::from(Span::styled(
            "Session over — press Ctrl+E for your results",
            Style::default().fg(Color::Yellow),
        )),
        _ => Line::from(Span::styled(
            "Enter send · Ctrl+E end session · PgUp/PgDn scroll · Ctrl+C quit",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(lines: &[Vec<Span<'static>>]) -> Vec<String> {
        lines
            .iter()
            .map(|spans| spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_content_lines_plain_wrap() {
        let lines = content_lines("subtract five from both sides", 13);
        assert_eq!(flat(&lines), vec!["subtract five", "from both", "sides"]);
    }

    #[test]
    fn test_content_lines_inline_math_styled() {
        let lines = content_lines("solve $x$ now", 40);
        assert_eq!(lines.len(), 1);
        let math_span = lines[0]
            .iter()
            .find(|s| s.content.as_ref() == "x")
            .expect("math span present");
        assert_eq!(math_span.style.fg, Some(Color::Cyan));
    }

    #[test]
    fn test_display_math_gets_own_line() {
        let lines = content_lines("before $$2x = 8$$ after", 40);
        let texts = flat(&lines);
        assert!(texts.contains(&"2x = 8".to_string()));
        // Display math is alone on its line.
        let idx = texts.iter().position(|t| t == "2x = 8").unwrap();
        assert_eq!(lines[idx].len(), 1);
    }

    #[test]
    fn test_empty_content_yields_one_blank_line() {
        assert_eq!(content_lines("", 40).len(), 1);
    }

    #[test]
    fn test_bubble_has_header_content_timestamp_separator() {
        let message = Message::learner("hello");
        let lines = bubble_lines(&message, 40);
        // label + 1 content line + timestamp + blank
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].spans[0].content.as_ref(), "Student");
    }

    #[test]
    fn test_tutor_bubble_right_aligned() {
        let message = Message::tutor("hi");
        let lines = bubble_lines(&message, 40);
        assert_eq!(lines[0].alignment, Some(Alignment::Right));
    }
}
