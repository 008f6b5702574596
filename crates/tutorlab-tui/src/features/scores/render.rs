//! Scores screen rendering: rubric bars, feedback, and session summary.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use tutorlab_core::api::Scores;

use super::state::ScoresState;
use crate::common::text::{truncate_with_ellipsis, wrap_text};

const BAR_WIDTH: usize = 10;

pub fn render_scores(frame: &mut Frame, area: Rect, scores: &ScoresState) {
    let [title_area, rubric_area, body_area, hint_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(Scores::CATEGORIES.len() as u16 + 2),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_title(frame, title_area, scores);
    render_rubric(frame, rubric_area, &scores.results.scores);
    render_body(frame, body_area, scores);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Enter/n new session · q quit",
            Style::default().fg(Color::DarkGray),
        ))),
        hint_area,
    );
}

fn render_title(frame: &mut Frame, area: Rect, scores: &ScoresState) {
    let width = area.width as usize;
    let subtitle = format!("{} · {}", scores.persona_name, scores.problem);
    let lines = vec![
        Line::from(Span::styled(
            "Session Results",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate_with_ellipsis(&subtitle, width),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_rubric(frame: &mut Frame, area: Rect, scores: &Scores) {
    let label_width = Scores::CATEGORIES
        .iter()
        .map(|(_, label)| label.len())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::new();
    for (key, label) in Scores::CATEGORIES {
        // Every rubric key is in the fixed score set.
        let value = scores.get(key).unwrap_or(0);
        lines.push(score_line(label, value, label_width));
    }

    let block = Block::default().borders(Borders::ALL).title("Scores");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(lines), inner);
}

fn score_line(label: &str, value: u8, label_width: usize) -> Line<'static> {
    let filled = (value.min(Scores::MAX) as usize * BAR_WIDTH) / Scores::MAX as usize;
    let bar: String = "█".repeat(filled) + &"░".repeat(BAR_WIDTH - filled);
    Line::from(vec![
        Span::raw(format!("{label:<label_width$}  ")),
        Span::styled(bar, Style::default().fg(score_color(value))),
        Span::raw(format!("  {value}/{}", Scores::MAX)),
    ])
}

fn score_color(value: u8) -> Color {
    match value {
        v if v >= 4 => Color::Green,
        3 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_body(frame: &mut Frame, area: Rect, scores: &ScoresState) {
    let width = area.width.saturating_sub(2) as usize;
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Feedback",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for line in wrap_text(&scores.results.feedback, width.max(1)) {
        lines.push(Line::from(line));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Session Summary",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for line in wrap_text(&scores.results.session_summary, width.max(1)) {
        lines.push(Line::from(line));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_color_thresholds() {
        assert_eq!(score_color(5), Color::Green);
        assert_eq!(score_color(4), Color::Green);
        assert_eq!(score_color(3), Color::Yellow);
        assert_eq!(score_color(2), Color::Red);
        assert_eq!(score_color(0), Color::Red);
    }

    #[test]
    fn test_score_line_bar_proportions() {
        let line = score_line("Clarity", 3, 7);
        let bar = line.spans[1].content.as_ref();
        assert_eq!(bar.chars().filter(|&c| c == '█').count(), 6);
        assert_eq!(bar.chars().filter(|&c| c == '░').count(), 4);
    }

    #[test]
    fn test_score_line_shows_value_over_max() {
        let line = score_line("Clarity", 4, 7);
        assert_eq!(line.spans[2].content.as_ref().trim(), "4/5");
    }
}
