//! End-to-end evaluation of one batch-analysis run

use std::fs;

use crate::config::Config;
use crate::core::constants::files;
use crate::core::error::{MetricsError, Result};
use crate::dataset::{RunFiles, Table, discover_latest_run, load_table};
use crate::metrics::{Evaluation, LabelColumns, evaluate};
use crate::reporting::logging::{
    log_artifact_written, log_run_info, log_table_loaded, log_warning,
};
use crate::reporting::{
    Artifacts, EvaluationSummary, export_misclassified, write_heatmap, write_summary,
};

/// Receives each stage's results as soon as the stage finishes
pub trait Reporter {
    /// Scores and classification report, before any artifact is written
    fn evaluated(&mut self, _evaluation: &Evaluation) -> Result<()> {
        Ok(())
    }

    /// Misclassified rows have been exported
    fn misclassified(&mut self, _exported: usize, _total: usize, _rate: f64) -> Result<()> {
        Ok(())
    }

    /// Every artifact has been written
    fn finished(&mut self, _summary: &EvaluationSummary) -> Result<()> {
        Ok(())
    }
}

impl Reporter for () {}

/// Evaluate the configured run and write its artifacts, reporting nothing
pub fn run(config: &Config) -> Result<EvaluationSummary> {
    run_with(config, &mut ())
}

/// Evaluate the configured run and write its artifacts.
///
/// Steps run in order and the first failure aborts the run; artifacts
/// written before the failure are left in place. The reporter hears about
/// the evaluation before the output directory is touched.
pub fn run_with(config: &Config, reporter: &mut impl Reporter) -> Result<EvaluationSummary> {
    let input_dir = config.input_dir();
    let run_id = match config.run_id.as_deref() {
        Some(id) => id.to_string(),
        None => discover_latest_run(&input_dir)?,
    };
    let run = RunFiles::resolve(&input_dir, &run_id)?;
    log_run_info(&run);

    let labels = config.label_set();
    let columns = LabelColumns {
        ground_truth: config.ground_truth_column(),
        predicted: config.predicted_column(),
    };

    // Load
    let dataset_info = load_table(&run.dataset_info)?;
    log_table_loaded(&run.dataset_info, dataset_info.len());
    let results = load_table(&run.analysis_results)?;
    log_table_loaded(&run.analysis_results, results.len());

    results.require_columns(
        &run.analysis_results,
        &[columns.ground_truth, columns.predicted],
    )?;
    if results.is_empty() {
        return Err(MetricsError::EmptyDataset(
            run.analysis_results.display().to_string(),
        ));
    }

    // Evaluate
    let ground_truth = label_column(&results, columns.ground_truth);
    let predicted = label_column(&results, columns.predicted);
    let evaluation = evaluate(&ground_truth, &predicted, &labels, columns)?;
    reporter.evaluated(&evaluation)?;

    // Write artifacts
    let output_dir = config.output_dir();
    fs::create_dir_all(&output_dir)?;
    let artifacts = Artifacts {
        confusion_matrix: output_dir.join(files::CONFUSION_MATRIX_PNG),
        misclassified: output_dir.join(files::MISCLASSIFIED_CSV),
        summary: output_dir.join(files::METRICS_SUMMARY_TXT),
        output_dir,
    };

    write_heatmap(&evaluation.matrix, &labels, &artifacts.confusion_matrix)?;
    log_artifact_written("confusion matrix", &artifacts.confusion_matrix);

    let exported = export_misclassified(&results, columns, &artifacts.misclassified)?;
    log_artifact_written("misclassified samples", &artifacts.misclassified);
    reporter.misclassified(
        exported,
        evaluation.total(),
        evaluation.misclassification_rate(),
    )?;

    let dataset_info_distribution = dataset_info.value_counts(columns.ground_truth);
    if dataset_info_distribution.is_none() {
        log_warning(&format!(
            "No '{}' column in {}; source distribution omitted",
            columns.ground_truth,
            run.dataset_info.display()
        ));
    }

    let summary = EvaluationSummary {
        run_timestamp: run.timestamp(),
        run_id: run.run_id,
        sample_count: evaluation.total(),
        distribution: evaluation.distribution.clone(),
        dataset_info_rows: dataset_info.len(),
        dataset_info_distribution,
        labels: evaluation.labels.clone(),
        scores: evaluation.scores,
        confusion_matrix: evaluation.matrix,
        misclassified: exported,
        misclassification_rate: evaluation.misclassification_rate(),
        report_text: evaluation.report.render(),
        classification_report: evaluation.report,
        artifacts,
    };

    write_summary(&summary, &summary.artifacts.summary)?;
    log_artifact_written("summary", &summary.artifacts.summary);
    reporter.finished(&summary)?;

    Ok(summary)
}

fn label_column<'a>(table: &'a Table, name: &str) -> Vec<&'a str> {
    table
        .column(name)
        .map(|values| values.collect())
        .unwrap_or_default()
}
