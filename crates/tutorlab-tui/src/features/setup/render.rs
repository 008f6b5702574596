//! Setup screen rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::state::{SetupField, SetupState};
use crate::common::TextBuffer;
use crate::render::spinner_frame;

const TITLE: &str = "Start a New Tutoring Session";

pub fn render_setup(frame: &mut Frame, area: Rect, setup: &SetupState, tick: u64) {
    let persona_rows = setup.personas.len() as u16 + 2;
    let [title_area, name_area, problem_area, persona_area, status_area, hint_area] =
        Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(persona_rows),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        ))),
        title_area,
    );

    render_text_field(
        frame,
        name_area,
        "Your Name",
        &setup.name,
        setup.focus == SetupField::Name && !setup.pending,
    );
    render_text_field(
        frame,
        problem_area,
        "Math Problem (e.g. 'Solve for x: 2x + 5 = 13')",
        &setup.problem,
        setup.focus == SetupField::Problem && !setup.pending,
    );
    render_persona_list(frame, persona_area, setup);
    render_status(frame, status_area, setup, tick);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Tab next field · ↑↓ persona · Enter/Ctrl+S start · Ctrl+C quit",
            Style::default().fg(Color::DarkGray),
        ))),
        hint_area,
    );
}

fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    buffer: &TextBuffer,
    focused: bool,
) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(label.to_string());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(buffer.text()), inner);

    if focused {
        let x = inner.x + buffer.cursor_col().min(inner.width.saturating_sub(1) as usize) as u16;
        frame.set_cursor_position((x, inner.y));
    }
}

fn render_persona_list(frame: &mut Frame, area: Rect, setup: &SetupState) {
    let focused = setup.focus == SetupField::Persona && !setup.pending;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("Student Persona");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = setup
        .personas
        .iter()
        .enumerate()
        .map(|(i, persona)| {
            let marker = if i == setup.selected { "●" } else { "○" };
            let mut style = Style::default();
            if i == setup.selected {
                style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
            }
            Line::from(vec![
                Span::styled(format!("{marker} {}", persona.name), style),
                Span::styled(
                    format!("  {}", persona.description),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_status(frame: &mut Frame, area: Rect, setup: &SetupState, tick: u64) {
    let line = if setup.pending {
        Line::from(Span::styled(
            format!("{} Starting session…", spinner_frame(tick)),
            Style::default().fg(Color::Yellow),
        ))
    } else if let Some(error) = &setup.error {
        Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        ))
    } else {
        Line::default()
    };
    frame.render_widget(Paragraph::new(line), area);
}
