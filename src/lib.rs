//! # Introduction
//!
//! leaptrace animates the classic leap-year decision program one line at a
//! time. For an input year it derives the exact control-flow path through
//! the fixed 15-line program, then walks that path forward and backward
//! through a terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Derivation pipeline
//!
//! ```text
//! Year → Facts → TracePath → Cursor → TUI
//! ```
//!
//! 1. [`program`] — the fixed program: a static table of
//!    [`program::ProgramPoint`]s, one per line.
//! 2. [`trace`] — evaluates the divisibility [`trace::Facts`] for a year and
//!    builds the [`trace::TracePath`] execution would follow, plus the
//!    printed verdict.
//! 3. [`stepper`] — the [`stepper::Cursor`] that steps through a path with
//!    saturating forward/backward moves.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## The program under visualization
//!
//! The subject never varies: the nested-if leap-year test (divisible by 4,
//! by 100, by 400). Changing the input year rebuilds the path and resets the
//! cursor; everything else about the program is fixed at compile time.

pub mod program;
pub mod stepper;
pub mod trace;
pub mod ui;
