//! Cursor over a trace path
//!
//! [`Cursor`] is the stateful pointer used for stepwise navigation through a
//! [`TracePath`]. Movement is sequential only: one position forward or
//! backward per call, saturating at both ends, plus a reset to the start.
//! There is no random seek.
//!
//! A cursor is tied to the path it was created for. When the input year
//! changes, path lengths and indices change with it, so the caller must build
//! a new path and a new cursor rather than reuse the old one.

use crate::program::{ProgramPoint, PROGRAM};
use crate::trace::TracePath;

/// Stateful pointer into a trace path
///
/// Invariant: `position < path.len()` at all times.
#[derive(Debug, Clone)]
pub struct Cursor {
    path: TracePath,
    position: usize,
}

impl Cursor {
    /// Create a cursor at the first point of `path`
    pub fn new(path: TracePath) -> Self {
        Cursor { path, position: 0 }
    }

    /// Move one step forward; at the last point this is a no-op, not an error.
    ///
    /// Returns whether the cursor moved.
    pub fn advance(&mut self) -> bool {
        if self.position + 1 < self.path.len() {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Move one step back; at the first point this is a no-op, not an error.
    ///
    /// Returns whether the cursor moved.
    pub fn retreat(&mut self) -> bool {
        if self.position > 0 {
            self.position -= 1;
            true
        } else {
            false
        }
    }

    /// Return to the first point
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Current position within the path
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of points in the underlying path
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// The program-table index of the current point
    pub fn current_index(&self) -> usize {
        self.path.indices()[self.position]
    }

    /// The current program point
    pub fn current_point(&self) -> &'static ProgramPoint {
        &PROGRAM[self.current_index()]
    }

    /// Whether the cursor is at the first point of the path
    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    /// Whether the cursor is at the last point of the path
    pub fn is_at_end(&self) -> bool {
        self.position + 1 == self.path.len()
    }

    /// Whether the verdict should be shown instead of a pending indicator.
    ///
    /// The console reveals the result two steps before the end, the moment
    /// the cursor reaches the result line.
    pub fn verdict_ready(&self) -> bool {
        self.position + 2 >= self.path.len()
    }

    /// The path this cursor walks
    pub fn path(&self) -> &TracePath {
        &self.path
    }
}
