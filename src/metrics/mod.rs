//! Binary classification metrics
//!
//! Validates the two label columns against the declared label pair and
//! derives the confusion matrix, scalar scores and classification report.

pub mod confusion;
pub mod labels;
pub mod report;
pub mod scores;

use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;

use crate::core::error::{MetricsError, Result};

pub use confusion::ConfusionMatrix;
pub use labels::{LabelColumns, LabelSet};
pub use report::{ClassRow, ClassificationReport};
pub use scores::{BinaryScores, f1_score};

/// Everything derived from one pair of label sequences
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub labels: LabelSet,
    pub matrix: ConfusionMatrix,
    pub scores: BinaryScores,
    pub report: ClassificationReport,
    /// Ground truth label counts
    pub distribution: BTreeMap<String, usize>,
}

impl Evaluation {
    pub fn total(&self) -> usize {
        self.matrix.total()
    }

    pub fn misclassified(&self) -> usize {
        self.matrix.misclassified()
    }

    /// Share of misclassified samples, in percent
    pub fn misclassification_rate(&self) -> f64 {
        self.misclassified() as f64 / self.total() as f64 * 100.0
    }
}

/// Evaluate predictions against ground truth.
///
/// Every value in both sequences must be one of the declared labels; the
/// first value that is not fails with `UnexpectedLabel`, naming its 1-based
/// data row. Empty input fails with `EmptyDataset`.
pub fn evaluate(
    ground_truth: &[&str],
    predicted: &[&str],
    labels: &LabelSet,
    columns: LabelColumns<'_>,
) -> Result<Evaluation> {
    if ground_truth.len() != predicted.len() {
        return Err(MetricsError::InvalidArgument(format!(
            "Label sequences differ in length: {} ground truth vs {} predicted",
            ground_truth.len(),
            predicted.len()
        )));
    }
    if ground_truth.is_empty() {
        return Err(MetricsError::EmptyDataset(columns.ground_truth.to_string()));
    }

    let mut matrix = ConfusionMatrix::default();
    let mut distribution = BTreeMap::new();

    for (index, (&actual, &guess)) in ground_truth.iter().zip(predicted).enumerate() {
        let row = index + 1;
        let actual_class = class_index(labels, actual, row, columns.ground_truth)?;
        let predicted_class = class_index(labels, guess, row, columns.predicted)?;

        matrix.record(actual_class, predicted_class);
        *distribution.entry(actual.to_string()).or_insert(0) += 1;
    }

    debug!(
        "Confusion matrix [{}, {}]: {:?}",
        labels.negative,
        labels.positive,
        matrix.rows()
    );

    Ok(Evaluation {
        labels: labels.clone(),
        scores: BinaryScores::from_matrix(&matrix),
        report: ClassificationReport::from_matrix(&matrix, labels),
        matrix,
        distribution,
    })
}

fn class_index(labels: &LabelSet, value: &str, row: usize, column: &str) -> Result<usize> {
    labels
        .index_of(value)
        .ok_or_else(|| MetricsError::UnexpectedLabel {
            row,
            column: column.to_string(),
            value: value.to_string(),
        })
}
