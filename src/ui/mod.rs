//! User interface
//!
//! CLI parsing and stdout rendering of evaluation results.

pub mod cli;
pub mod output;

// Re-export commonly used items
pub use cli::{Cli, cli_to_config};
pub use output::{ConsoleReporter, render_json, render_text};
