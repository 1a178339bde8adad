//! Program listing pane rendering
//!
//! Renders the fixed 15-line program with line numbers and indentation,
//! highlighting the line the cursor is currently on. The listing always fits
//! on screen, so there is no scroll state.
//!
//! # Rendering
//!
//! A simple character-by-character tokenizer applies syntax highlighting
//! styles without requiring a full lexer.

use crate::program::PROGRAM;
use crate::stepper::Cursor;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Simple syntax highlighting for one line of the fixed program
fn highlight_line(line: &str) -> Line<'static> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // Handle strings
        if c == '"' {
            if !current_word.is_empty() {
                spans.push(Span::raw(current_word.clone()));
                current_word.clear();
            }
            let mut end = i + 1;
            while end < chars.len() && chars[end] != '"' {
                end += 1;
            }
            if end < chars.len() {
                end += 1;
            }
            let literal: String = chars[i..end].iter().collect();
            spans.push(Span::styled(
                literal,
                Style::default().fg(DEFAULT_THEME.string),
            ));
            i = end;
            continue;
        }

        // Handle non-alphanumeric (delimiters)
        if !c.is_alphanumeric() && c != '_' {
            if !current_word.is_empty() {
                let is_func = c == '(';
                let style = word_style(&current_word, is_func);
                spans.push(Span::styled(current_word.clone(), style));
                current_word.clear();
            }

            let style = match c {
                '{' | '}' | '(' | ')' => Style::default().fg(DEFAULT_THEME.primary),
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };

            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    if !current_word.is_empty() {
        let style = word_style(&current_word, false);
        spans.push(Span::styled(current_word, style));
    }

    Line::from(spans)
}

fn word_style(word: &str, is_function: bool) -> Style {
    match word {
        "int" | "void" => Style::default().fg(DEFAULT_THEME.type_name),
        "if" | "else" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        _ if word.chars().all(|c| c.is_ascii_digit()) => {
            Style::default().fg(DEFAULT_THEME.number)
        }
        _ if is_function => Style::default().fg(DEFAULT_THEME.function),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Render the program listing pane
pub fn render_listing_pane(frame: &mut Frame, area: Rect, year: i64, cursor: &Cursor) {
    let block = Block::default()
        .title(" Program ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let current = cursor.current_index();

    let lines: Vec<Line> = PROGRAM
        .iter()
        .map(|point| {
            let is_current = point.index == current;
            let line_num_str = format!("{:3} ", point.index + 1);

            let (num_style, content_base_style) = if is_current {
                (
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                    Style::default().bg(DEFAULT_THEME.current_line_bg),
                )
            } else {
                (Style::default().fg(DEFAULT_THEME.comment), Style::default())
            };

            let indent = "    ".repeat(point.indent);
            let mut content = highlight_line(&point.source_text(year));

            if is_current {
                for span in &mut content.spans {
                    span.style = span.style.patch(content_base_style);
                }
            }

            let mut final_spans = vec![
                Span::styled(line_num_str, num_style),
                Span::styled(indent, content_base_style),
            ];
            final_spans.extend(content.spans);

            Line::from(final_spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
