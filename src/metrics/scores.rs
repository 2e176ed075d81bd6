use log::warn;
use serde::Serialize;

use super::confusion::ConfusionMatrix;

/// Scalar scores for the positive class
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BinaryScores {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl BinaryScores {
    /// Compute accuracy over all samples and precision/recall/F1 for the
    /// positive class. Zero denominators give 0.0.
    pub fn from_matrix(matrix: &ConfusionMatrix) -> Self {
        let tp = matrix.tp();
        let accuracy = ratio(matrix.correct(), matrix.total(), "Accuracy");
        let precision = ratio(tp, tp + matrix.fp(), "Precision");
        let recall = ratio(tp, tp + matrix.fn_(), "Recall");

        Self {
            accuracy,
            precision,
            recall,
            f1: f1_score(precision, recall),
        }
    }
}

/// `numerator / denominator`, or 0.0 with a warning when the denominator is 0
pub(crate) fn ratio(numerator: usize, denominator: usize, metric: &str) -> f64 {
    if denominator == 0 {
        warn!("{metric} is ill-defined (no samples in denominator); reporting 0.0");
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Harmonic mean of precision and recall
pub fn f1_score(precision: f64, recall: f64) -> f64 {
    if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    }
}
