//! Per-class classification report
//!
//! The text layout matches scikit-learn's `classification_report` so that
//! summaries stay comparable with earlier evaluation runs.

use serde::Serialize;
use std::fmt::Write;

use super::confusion::ConfusionMatrix;
use super::labels::LabelSet;
use super::scores::{f1_score, ratio};
use crate::core::constants::report;

const HEADERS: [&str; 4] = ["precision", "recall", "f1-score", "support"];
const LONGEST_LAST_LINE_HEADING: &str = "weighted avg";

/// Precision, recall, F1 and support for one row of the report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassRow {
    pub label: String,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationReport {
    /// Classes seen in either column, sorted by label
    pub classes: Vec<ClassRow>,
    pub accuracy: f64,
    pub macro_avg: ClassRow,
    pub weighted_avg: ClassRow,
}

impl ClassificationReport {
    pub fn from_matrix(matrix: &ConfusionMatrix, labels: &LabelSet) -> Self {
        let mut classes: Vec<ClassRow> = labels
            .ordered()
            .iter()
            .enumerate()
            .filter(|(class, _)| matrix.actual_count(*class) + matrix.predicted_count(*class) > 0)
            .map(|(class, label)| {
                let hits = matrix.cell(class, class);
                let precision = ratio(
                    hits,
                    matrix.predicted_count(class),
                    &format!("Precision of {label}"),
                );
                let recall = ratio(
                    hits,
                    matrix.actual_count(class),
                    &format!("Recall of {label}"),
                );
                ClassRow {
                    label: label.to_string(),
                    precision,
                    recall,
                    f1: f1_score(precision, recall),
                    support: matrix.actual_count(class),
                }
            })
            .collect();
        classes.sort_by(|a, b| a.label.cmp(&b.label));

        let total = matrix.total();
        let count = classes.len().max(1) as f64;
        let macro_avg = ClassRow {
            label: "macro avg".to_string(),
            precision: classes.iter().map(|row| row.precision).sum::<f64>() / count,
            recall: classes.iter().map(|row| row.recall).sum::<f64>() / count,
            f1: classes.iter().map(|row| row.f1).sum::<f64>() / count,
            support: total,
        };

        let weight = |value: fn(&ClassRow) -> f64| -> f64 {
            if total == 0 {
                return 0.0;
            }
            classes
                .iter()
                .map(|row| value(row) * row.support as f64)
                .sum::<f64>()
                / total as f64
        };
        let weighted_avg = ClassRow {
            label: LONGEST_LAST_LINE_HEADING.to_string(),
            precision: weight(|row| row.precision),
            recall: weight(|row| row.recall),
            f1: weight(|row| row.f1),
            support: total,
        };

        Self {
            accuracy: ratio(matrix.correct(), total, "Accuracy"),
            classes,
            macro_avg,
            weighted_avg,
        }
    }

    /// Render the report as text, ending with a newline
    pub fn render(&self) -> String {
        let digits = report::REPORT_DIGITS;
        let name_width = self
            .classes
            .iter()
            .map(|row| row.label.chars().count())
            .max()
            .unwrap_or(0);
        let width = name_width.max(LONGEST_LAST_LINE_HEADING.len()).max(digits);

        let mut out = String::new();
        let _ = write!(out, "{:>width$} ", "");
        for header in HEADERS {
            let _ = write!(out, " {header:>9}");
        }
        out.push_str("\n\n");

        for row in &self.classes {
            write_row(&mut out, row, width, digits);
        }
        out.push('\n');

        let support = self.macro_avg.support;
        let _ = writeln!(
            out,
            "{:>width$}  {:>9} {:>9} {:>9.digits$} {:>9}",
            "accuracy", "", "", self.accuracy, support
        );
        write_row(&mut out, &self.macro_avg, width, digits);
        write_row(&mut out, &self.weighted_avg, width, digits);

        out
    }
}

fn write_row(out: &mut String, row: &ClassRow, width: usize, digits: usize) {
    let _ = writeln!(
        out,
        "{:>width$}  {:>9.digits$} {:>9.digits$} {:>9.digits$} {:>9}",
        row.label, row.precision, row.recall, row.f1, row.support
    );
}
