//! Stdout rendering of an evaluation

use std::fmt::Write as _;
use std::path::Path;

use crate::core::constants::output_formats;
use crate::core::constants::report::METRIC_DECIMALS;
use crate::core::error::Result;
use crate::metrics::{BinaryScores, Evaluation};
use crate::pipeline::Reporter;
use crate::reporting::EvaluationSummary;

/// Prints each stage to stdout as the pipeline reaches it.
///
/// Text output streams: scores and the classification report appear before
/// any artifact is written. JSON is printed once, after the run completes.
/// Nothing is printed when `quiet`.
#[derive(Debug, Clone)]
pub struct ConsoleReporter {
    json: bool,
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new(output_format: &str, quiet: bool) -> Self {
        Self {
            json: output_format == output_formats::JSON,
            quiet,
        }
    }

    fn streams_text(&self) -> bool {
        !self.quiet && !self.json
    }
}

impl Reporter for ConsoleReporter {
    fn evaluated(&mut self, evaluation: &Evaluation) -> Result<()> {
        if self.streams_text() {
            print!(
                "{}",
                render_scores(&evaluation.scores, &evaluation.report.render())
            );
        }
        Ok(())
    }

    fn misclassified(&mut self, exported: usize, total: usize, rate: f64) -> Result<()> {
        if self.streams_text() {
            print!("{}", render_misclassified(exported, total, rate));
        }
        Ok(())
    }

    fn finished(&mut self, summary: &EvaluationSummary) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.json {
            println!("{}", render_json(summary)?);
        } else {
            println!("{}", render_saved(&summary.artifacts.output_dir));
        }
        Ok(())
    }
}

/// Scalar metrics followed by the classification report and a blank line
pub fn render_scores(scores: &BinaryScores, report_text: &str) -> String {
    let d = METRIC_DECIMALS;
    let mut out = String::new();

    let _ = writeln!(out, "Accuracy: {:.d$}", scores.accuracy);
    let _ = writeln!(out, "Precision: {:.d$}", scores.precision);
    let _ = writeln!(out, "Recall: {:.d$}", scores.recall);
    let _ = writeln!(out, "F1 Score: {:.d$}", scores.f1);
    out.push('\n');
    out.push_str("Classification Report:\n");
    out.push_str(report_text);
    out.push('\n');
    out
}

/// The misclassification count, set off by a leading blank line
pub fn render_misclassified(exported: usize, total: usize, rate: f64) -> String {
    format!("\nMisclassified samples: {exported}/{total} ({rate:.2}%)\n")
}

/// Artifact location, set off by a leading blank line
pub fn render_saved(output_dir: &Path) -> String {
    format!("\nResults saved to: {}", output_dir.display())
}

/// The whole text output of a completed run
pub fn render_text(summary: &EvaluationSummary) -> String {
    let mut out = render_scores(&summary.scores, &summary.report_text);
    out.push_str(&render_misclassified(
        summary.misclassified,
        summary.sample_count,
        summary.misclassification_rate,
    ));
    out.push_str(&render_saved(&summary.artifacts.output_dir));
    out
}

/// The whole summary as pretty-printed JSON
pub fn render_json(summary: &EvaluationSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}
