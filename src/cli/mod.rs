//! Command-line interface for estate-seed.
//!
//! Provides the argument definitions, the destructive-run confirmation
//! gate, and the top-level run orchestration.

mod commands;

pub use commands::{parse_cli, run, run_with_cli};
