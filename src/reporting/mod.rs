//! Artifacts and logging
//!
//! This module writes the run's artifacts (heatmap, misclassified rows,
//! summary file) and provides structured logging for the application.

pub mod heatmap;
pub mod logging;
pub mod misclassified;
pub mod summary;

// Re-export commonly used items
pub use heatmap::{render_heatmap, write_heatmap};
pub use misclassified::{export_misclassified, misclassified_rows};
pub use summary::{Artifacts, EvaluationSummary, render_summary, write_summary};
