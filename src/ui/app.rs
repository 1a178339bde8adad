//! Main TUI application state and logic

use crate::stepper::Cursor;
use crate::trace::{Facts, TracePath};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// The main application state
pub struct App {
    /// Current input year
    pub year: i64,

    /// Divisibility facts for the current year
    pub facts: Facts,

    /// Cursor over the current year's trace path
    pub cursor: Cursor,

    /// Year-edit buffer; `Some` while the user is typing a new year
    pub input: Option<String>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app tracing the given starting year
    pub fn new(year: i64) -> Self {
        let facts = Facts::evaluate(year);
        let cursor = Cursor::new(TracePath::build(&facts));
        App {
            year,
            facts,
            cursor,
            input: None,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Re-derive facts, path and cursor for a new year.
    ///
    /// An old cursor is never reused across a year change: path lengths and
    /// indices differ, so the cursor is rebuilt at the first point.
    fn set_year(&mut self, year: i64) {
        self.year = year;
        self.facts = Facts::evaluate(year);
        self.cursor = Cursor::new(TracePath::build(&self.facts));
        self.is_playing = false;
        self.status_message = format!("Year set to {}", year);
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= Duration::from_secs(1) {
                if self.cursor.advance() {
                    self.status_message = "Playing...".to_string();
                } else {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Header on top, status bar at the bottom, panes in between
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        super::panes::render_header(frame, main_chunks[0], self.year, self.input.as_deref());

        // Left column: program listing; right column: logic cards + console
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[1]);

        super::panes::render_listing_pane(frame, columns[0], self.year, &self.cursor);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(5)])
            .split(columns[1]);

        super::panes::render_logic_pane(frame, right_rows[0], &self.facts);
        super::panes::render_console_pane(frame, right_rows[1], &self.facts, &self.cursor);

        super::panes::render_status_bar(
            frame,
            main_chunks[2],
            &self.status_message,
            self.cursor.position(),
            self.cursor.len(),
            self.is_playing,
            self.input.is_some(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.input.is_some() {
            self.handle_year_input_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Right | KeyCode::Char('n') => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Left | KeyCode::Char('b') => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.is_playing = false;
                self.cursor.reset();
                self.status_message = "Reset to start".to_string();
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(Duration::from_secs(1))
                            .unwrap_or(Instant::now());
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                // Jump to the end by replaying forward
                self.is_playing = false;
                while self.cursor.advance() {}
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.cursor.reset();
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::Up => {
                self.set_year(self.year.saturating_add(1));
            }
            KeyCode::Down => {
                self.set_year(self.year.saturating_sub(1));
            }
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.is_playing = false;
                self.input = Some(String::new());
                self.status_message = "Type a year, Enter to apply, Esc to cancel".to_string();
            }
            _ => {}
        }
    }

    /// Handle keyboard events while the year-edit buffer is open.
    ///
    /// The trace core only ever receives a well-formed integer: anything that
    /// does not parse as `i64` is rejected here with a status message.
    fn handle_year_input_key(&mut self, key: KeyEvent) {
        let Some(buffer) = self.input.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Char(c @ '0'..='9') => {
                buffer.push(c);
            }
            KeyCode::Char('-') if buffer.is_empty() => {
                buffer.push('-');
            }
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Enter => {
                let text = self.input.take().unwrap_or_default();
                match text.parse::<i64>() {
                    Ok(year) => self.set_year(year),
                    Err(_) => {
                        self.status_message = format!("'{}' is not a valid year", text);
                    }
                }
            }
            KeyCode::Esc => {
                self.input = None;
                self.status_message = "Year edit cancelled".to_string();
            }
            _ => {}
        }
    }

    /// Step forward along the trace
    fn step_forward(&mut self) {
        if self.cursor.advance() {
            self.status_message = "Stepped forward".to_string();
        } else {
            self.status_message = "Already at the end of the trace".to_string();
        }
    }

    /// Step backward along the trace
    fn step_backward(&mut self) {
        if self.cursor.retreat() {
            self.status_message = "Stepped backward".to_string();
        } else {
            self.status_message = "Already at the start of the trace".to_string();
        }
    }
}
