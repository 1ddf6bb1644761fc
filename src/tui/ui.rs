//! UI rendering functions for the TUI.
//!
//! Draws the question input, the submit control, and the output region from
//! a [`View`] using ratatui widgets and layout management.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::render::{AnswerView, Citations, ERROR_PREFIX, NO_CITATIONS, Output, View};

use super::app::App;

const TITLE: &str = "Medical Drug Q&A";

/// Main rendering function for the TUI.
///
/// Projects the app state once and draws every region from that projection.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();
    let size = frame.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Question + submit
            Constraint::Min(0),    // Output
            Constraint::Length(1), // Shortcut bar
        ])
        .split(size);

    let input_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(13)])
        .split(main_chunks[1]);

    render_title(frame, main_chunks[0]);
    render_question_input(frame, &view, input_chunks[0]);
    render_submit_control(frame, &view, input_chunks[1]);
    render_output(frame, &view, app.output_scroll(), main_chunks[2]);
    render_shortcut_bar(frame, main_chunks[3]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(TITLE, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            "  ask a question about a drug",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Renders the question input with a cursor indicator.
fn render_question_input(frame: &mut Frame, view: &View, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Question")
        .border_style(Style::default().fg(Color::Cyan));

    let mut content = view.question.clone();
    content.push('█');

    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// Renders the submit control; dimmed when disabled.
fn render_submit_control(frame: &mut Frame, view: &View, area: Rect) {
    let style = if view.submit.enabled {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default().borders(Borders::ALL);
    let paragraph = Paragraph::new(Span::styled(view.submit.label, style)).block(block);

    frame.render_widget(paragraph, area);
}

/// Renders the output region: the error, the answer, or nothing.
fn render_output(frame: &mut Frame, view: &View, scroll: u16, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Result");

    let content = match &view.output {
        Output::Empty => Text::default(),
        Output::Error(message) => Text::from(Line::from(vec![
            Span::styled(
                ERROR_PREFIX,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {message}"), Style::default().fg(Color::Red)),
        ])),
        Output::Answer(answer) => answer_text(answer),
    };

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    frame.render_widget(paragraph, area);
}

fn answer_text(answer: &AnswerView) -> Text<'static> {
    let heading = Style::default().add_modifier(Modifier::BOLD);
    let mut text = Text::default();

    text.lines.push(Line::from(vec![
        Span::styled("Mode:", heading),
        Span::raw(format!(" {}", answer.mode)),
    ]));

    text.lines.push(Line::from(""));
    text.lines.push(Line::from(Span::styled("Answer", heading)));
    for line in answer.answer.lines() {
        text.lines.push(Line::from(line.to_string()));
    }

    text.lines.push(Line::from(""));
    text.lines.push(Line::from(Span::styled("Citations", heading)));
    match &answer.citations {
        Citations::Lines(lines) => {
            for line in lines {
                text.lines.push(Line::from(vec![
                    Span::raw("  - "),
                    Span::styled(line.clone(), Style::default().fg(Color::Cyan)),
                ]));
            }
        }
        Citations::Empty => {
            text.lines.push(Line::from(Span::styled(
                NO_CITATIONS,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
    }

    if let Some(preview) = &answer.context_preview {
        text.lines.push(Line::from(""));
        text.lines.push(Line::from(Span::styled(
            "Retrieved Context Preview",
            heading,
        )));
        for line in preview_lines(preview) {
            text.lines.push(Line::from(Span::styled(
                line.to_string(),
                Style::default().bg(Color::Black),
            )));
        }
    }

    text
}

/// Splits the excerpt into display lines, keeping indentation and blank lines.
///
/// `\r\n` endings lose their `\r`, which would otherwise reach the terminal.
fn preview_lines(preview: &str) -> impl Iterator<Item = &str> {
    preview
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Renders the shortcut bar at the bottom of the screen.
fn render_shortcut_bar(frame: &mut Frame, area: Rect) {
    let key_style = Style::default().fg(Color::Cyan);
    let sep_style = Style::default().fg(Color::DarkGray);

    let spans = vec![
        Span::styled("Enter", key_style),
        Span::raw(": ask"),
        Span::styled(" | ", sep_style),
        Span::styled("Ctrl+U", key_style),
        Span::raw(": clear"),
        Span::styled(" | ", sep_style),
        Span::styled("Up/Down", key_style),
        Span::raw(": scroll"),
        Span::styled(" | ", sep_style),
        Span::styled("Esc", key_style),
        Span::raw(": quit"),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
