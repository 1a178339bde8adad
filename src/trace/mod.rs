//! Trace derivation for the fixed leap-year program
//!
//! This module provides the core derivation logic:
//! - [`facts`]: the predicate evaluator, computing the three divisibility
//!   facts for an input year
//! - [`path`]: the trace engine, building the exact control-flow path and
//!   the final console line
//!
//! # Derivation model
//!
//! Every operation here is pure and total: a year fully determines its
//! [`Facts`], which fully determine the [`TracePath`] and the verdict.
//! Nothing in this module performs I/O or can fail.

pub mod facts;
pub mod path;

pub use facts::Facts;
pub use path::{verdict_line, TracePath};
