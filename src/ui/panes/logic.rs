//! Logic branching pane rendering
//!
//! One card per divisibility test, showing the concrete remainder and
//! whether the test holds. A card is dimmed until its test is reachable on
//! the current year's path: the mod 100 test only runs when mod 4 holds, and
//! the mod 400 test only when mod 100 also holds.

use crate::trace::Facts;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the logic branching pane
pub fn render_logic_pane(frame: &mut Frame, area: Rect, facts: &Facts) {
    let block = Block::default()
        .title(" Logic Branching ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    // A test's outcome is None while the path never reaches it
    render_card(frame, rows[0], facts, 4, Some(facts.mod4));
    render_card(frame, rows[1], facts, 100, facts.mod4.then_some(facts.mod100));
    render_card(
        frame,
        rows[2],
        facts,
        400,
        (facts.mod4 && facts.mod100).then_some(facts.mod400),
    );
}

/// One divisibility card: the test expression, its remainder, and TRUE/FALSE
/// once the test is reachable
fn render_card(frame: &mut Frame, area: Rect, facts: &Facts, divisor: i64, outcome: Option<bool>) {
    let (accent, label_style) = match outcome {
        Some(true) => (
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        Some(false) => (
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        None => (
            Style::default().fg(DEFAULT_THEME.muted),
            Style::default().fg(DEFAULT_THEME.muted),
        ),
    };

    let test_line = Line::from(vec![
        Span::styled(format!("year % {} == 0", divisor), label_style),
        Span::raw("  "),
        match outcome {
            Some(true) => Span::styled("TRUE", accent),
            Some(false) => Span::styled("FALSE", accent),
            None => Span::styled("not reached", accent),
        },
    ]);

    let residue_line = Line::from(Span::styled(
        format!(
            "{} % {} = {}",
            facts.year,
            divisor,
            facts.residue(divisor)
        ),
        Style::default().fg(DEFAULT_THEME.comment),
    ));

    let card = Paragraph::new(vec![test_line, residue_line]);
    frame.render_widget(card, area);
}
