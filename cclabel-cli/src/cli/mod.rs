//! Argument parsing and command execution for `cclabel`.
//!
//! The only command, `label`, thresholds an image into a binary mask, labels
//! its connected components and reports what it found.

mod commands;

pub use commands::{
    Cli, CliError, Command, DEFAULT_THRESHOLD, ExecutionSummary, LabelCommand, render_summary,
    run_cli,
};
