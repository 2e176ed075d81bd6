//! Evaluation summary record and its text file

use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::report::{METRIC_DECIMALS, SUMMARY_RULE, SUMMARY_TITLE};
use crate::core::error::Result;
use crate::dataset::format_distribution;
use crate::metrics::{BinaryScores, ClassificationReport, ConfusionMatrix, LabelSet};

/// Where the run's artifacts were written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifacts {
    pub output_dir: PathBuf,
    pub confusion_matrix: PathBuf,
    pub misclassified: PathBuf,
    pub summary: PathBuf,
}

/// Everything a run reports, on stdout and in `metrics_summary.txt`
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationSummary {
    pub run_id: String,
    pub run_timestamp: Option<NaiveDateTime>,
    pub sample_count: usize,
    /// Ground truth counts in the results table
    pub distribution: BTreeMap<String, usize>,
    pub dataset_info_rows: usize,
    /// Ground truth counts in the dataset info table, when it has that column
    pub dataset_info_distribution: Option<BTreeMap<String, usize>>,
    pub labels: LabelSet,
    pub scores: BinaryScores,
    pub confusion_matrix: ConfusionMatrix,
    pub misclassified: usize,
    /// Percent of samples misclassified
    pub misclassification_rate: f64,
    pub classification_report: ClassificationReport,
    #[serde(skip)]
    pub report_text: String,
    pub artifacts: Artifacts,
}

/// The summary file's contents
pub fn render_summary(summary: &EvaluationSummary) -> String {
    let d = METRIC_DECIMALS;
    let scores = &summary.scores;
    let mut out = String::new();

    let _ = writeln!(out, "{SUMMARY_TITLE}");
    let _ = writeln!(out, "{SUMMARY_RULE}");
    out.push('\n');
    let _ = writeln!(out, "Dataset: {} APK files", summary.sample_count);
    let _ = writeln!(
        out,
        "Distribution: {}",
        format_distribution(&summary.distribution)
    );
    match &summary.dataset_info_distribution {
        Some(counts) => {
            let _ = writeln!(
                out,
                "Source dataset: {} entries {}",
                summary.dataset_info_rows,
                format_distribution(counts)
            );
        }
        None => {
            let _ = writeln!(out, "Source dataset: {} entries", summary.dataset_info_rows);
        }
    }
    out.push('\n');
    let _ = writeln!(out, "Accuracy: {:.d$}", scores.accuracy);
    let _ = writeln!(out, "Precision: {:.d$}", scores.precision);
    let _ = writeln!(out, "Recall: {:.d$}", scores.recall);
    let _ = writeln!(out, "F1 Score: {:.d$}", scores.f1);
    out.push('\n');
    out.push_str("Classification Report:\n");
    out.push_str(&summary.report_text);

    out
}

/// Write the summary file, replacing any previous one
pub fn write_summary(summary: &EvaluationSummary, path: &Path) -> Result<()> {
    fs::write(path, render_summary(summary))?;
    Ok(())
}
