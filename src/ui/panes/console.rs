//! Console output pane rendering
//!
//! Shows the program's printed verdict once the cursor reaches the result
//! line (two steps before the end of the path), and a pending indicator
//! before that.

use crate::stepper::Cursor;
use crate::trace::{verdict_line, Facts};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the console output pane
pub fn render_console_pane(frame: &mut Frame, area: Rect, facts: &Facts, cursor: &Cursor) {
    let block = Block::default()
        .title(" Console Output ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 0, 0, 0));

    if cursor.verdict_ready() {
        let verdict_style = if facts.is_leap() {
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD)
        };
        let paragraph = Paragraph::new(verdict_line(facts))
            .block(block)
            .style(verdict_style);
        frame.render_widget(paragraph, area);
    } else {
        let paragraph = Paragraph::new("Waiting for result...")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
    }
}
