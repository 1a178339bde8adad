//! Title bar with the year input field
//!
//! Mirrors the layout of the rest of the UI: title on the left, the current
//! input year on the right. While the user is editing the year, the field
//! shows the edit buffer with a block cursor instead.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the header bar.
///
/// `input` is `Some` while year-edit mode is active and holds the buffer
/// typed so far (possibly empty).
pub fn render_header(frame: &mut Frame, area: Rect, year: i64, input: Option<&str>) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        " C Program Execution Trace ",
        Style::default()
            .fg(DEFAULT_THEME.fg)
            .add_modifier(Modifier::BOLD),
    )))
    .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
    .alignment(Alignment::Left);

    frame.render_widget(title, layout[0]);

    let field = match input {
        Some(buffer) => Span::styled(
            format!(" Input Year: {}\u{2588} ", buffer),
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(
            format!(" Input Year: {} (y to edit) ", year),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.primary),
        ),
    };

    let field_paragraph = Paragraph::new(Line::from(field))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(field_paragraph, layout[1]);
}
