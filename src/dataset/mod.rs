//! Input tables
//!
//! This module locates a run's CSV files and reads them into memory.

pub mod discovery;
pub mod table;

pub use discovery::{RunFiles, discover_latest_run, parse_run_timestamp};
pub use table::{Table, format_distribution, load_table};
