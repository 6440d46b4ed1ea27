//! Interactive question loop
//!
//! Provides the line-based CLI front end: a reedline editor on a terminal,
//! plain line reading when stdin is piped.

mod prompt;
mod repl;

pub use repl::{LineOutcome, QaRepl};
