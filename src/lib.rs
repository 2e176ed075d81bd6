//! Evaluation of batch APK malware analysis runs.
//!
//! A run is a pair of CSV tables written by the batch analyzer,
//! `dataset_info_<id>.csv` and `analysis_results_<id>.csv`. This crate scores
//! the predicted labels against ground truth and writes a confusion matrix
//! heatmap, the misclassified rows and a plain-text summary.

pub mod config;
pub mod core;
pub mod dataset;
pub mod metrics;
pub mod pipeline;
pub mod reporting;
pub mod ui;

pub use crate::config::Config;
pub use crate::core::{MetricsError, Result};
pub use crate::metrics::{BinaryScores, ConfusionMatrix, Evaluation, LabelSet, evaluate};
pub use crate::pipeline::{Reporter, run, run_with};
pub use crate::reporting::EvaluationSummary;
