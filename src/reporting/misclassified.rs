//! Export of rows whose prediction disagrees with ground truth

use csv::StringRecord;
use std::path::Path;

use crate::core::error::{MetricsError, Result};
use crate::dataset::Table;
use crate::metrics::LabelColumns;

/// Records whose two label columns differ, in table order
pub fn misclassified_rows<'a>(
    table: &'a Table,
    columns: LabelColumns<'_>,
) -> Result<Vec<&'a StringRecord>> {
    let ground_truth = column_index(table, columns.ground_truth)?;
    let predicted = column_index(table, columns.predicted)?;

    Ok(table
        .records()
        .iter()
        .filter(|record| record.get(ground_truth) != record.get(predicted))
        .collect())
}

/// Write the header and every misclassified record to `path`.
///
/// The header is written even when nothing is misclassified. Returns the
/// number of exported rows.
pub fn export_misclassified(
    table: &Table,
    columns: LabelColumns<'_>,
    path: &Path,
) -> Result<usize> {
    let rows = misclassified_rows(table, columns)?;

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(table.headers())?;
    for record in &rows {
        writer.write_record(*record)?;
    }
    writer.flush()?;

    Ok(rows.len())
}

fn column_index(table: &Table, column: &str) -> Result<usize> {
    table
        .column_index(column)
        .ok_or_else(|| MetricsError::MissingColumn {
            file: "analysis results".to_string(),
            column: column.to_string(),
        })
}
