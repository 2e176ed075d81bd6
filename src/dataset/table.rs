//! In-memory CSV tables

use csv::StringRecord;
use std::collections::BTreeMap;
use std::path::Path;

use crate::core::error::{MetricsError, Result};

/// A CSV header plus its records, in file order
#[derive(Debug, Clone)]
pub struct Table {
    headers: StringRecord,
    records: Vec<StringRecord>,
}

impl Table {
    pub fn new(headers: StringRecord, records: Vec<StringRecord>) -> Self {
        Self { headers, records }
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn records(&self) -> &[StringRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of a column by exact header name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Values of a column, or `None` if the table has no such column
    pub fn column<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a str> + use<'a>> {
        let index = self.column_index(name)?;
        Some(
            self.records
                .iter()
                .map(move |record| record.get(index).unwrap_or_default()),
        )
    }

    /// Count of each distinct value in a column
    pub fn value_counts(&self, name: &str) -> Option<BTreeMap<String, usize>> {
        let values = self.column(name)?;
        Some(values.fold(BTreeMap::new(), |mut counts, value| {
            *counts.entry(value.to_string()).or_insert(0) += 1;
            counts
        }))
    }

    /// Fail with `MissingColumn` unless every named column is present
    pub fn require_columns(&self, file: &Path, columns: &[&str]) -> Result<()> {
        match columns
            .iter()
            .find(|column| self.column_index(column).is_none())
        {
            Some(column) => Err(MetricsError::MissingColumn {
                file: file.display().to_string(),
                column: column.to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Read a headed CSV file fully into memory.
///
/// Fields are kept verbatim; rows whose width differs from the header are
/// rejected by the reader.
pub fn load_table(path: &Path) -> Result<Table> {
    if !path.is_file() {
        return Err(MetricsError::FileNotFound(path.display().to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    let headers = reader.headers()?.clone();
    let records = reader.records().collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(Table::new(headers, records))
}

/// Render a distribution the way the summary prints it:
/// `{'MALWARE': 6, 'SAFE': 4}`, most frequent first, ties by label.
pub fn format_distribution(counts: &BTreeMap<String, usize>) -> String {
    let mut entries: Vec<(&String, &usize)> = counts.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    let body = entries
        .iter()
        .map(|(label, count)| format!("'{label}': {count}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{body}}}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_table() -> Result<()> {
        let file = write_csv("APK_PATH,GROUND_TRUTH_LABEL\n/a.apk,SAFE\n/b.apk,MALWARE\n");
        let table = load_table(file.path())?;

        assert_eq!(table.len(), 2);
        assert_eq!(table.column_index("GROUND_TRUTH_LABEL"), Some(1));
        let labels: Vec<&str> = table.column("GROUND_TRUTH_LABEL").unwrap().collect();
        assert_eq!(labels, vec!["SAFE", "MALWARE"]);
        Ok(())
    }

    #[test]
    fn test_load_table_keeps_quoted_fields() -> Result<()> {
        let file = write_csv("A,B\n\"x, y\",\"said 'hi'\"\n");
        let table = load_table(file.path())?;

        assert_eq!(table.records()[0].get(0), Some("x, y"));
        assert_eq!(table.records()[0].get(1), Some("said 'hi'"));
        Ok(())
    }

    #[test]
    fn test_load_table_missing_file() {
        let result = load_table(Path::new("/no/such/analysis_results_x.csv"));
        assert!(matches!(result, Err(MetricsError::FileNotFound(_))));
    }

    #[test]
    fn test_load_table_ragged_row() {
        let file = write_csv("A,B\n1,2\n3\n");
        let result = load_table(file.path());
        assert!(matches!(result, Err(MetricsError::Csv(_))));
    }

    #[test]
    fn test_header_only_table_is_empty() -> Result<()> {
        let file = write_csv("GROUND_TRUTH_LABEL,PREDICTED_LABEL\n");
        let table = load_table(file.path())?;
        assert!(table.is_empty());
        Ok(())
    }

    #[test]
    fn test_require_columns() -> Result<()> {
        let file = write_csv("GROUND_TRUTH_LABEL,OTHER\nSAFE,1\n");
        let table = load_table(file.path())?;

        assert!(
            table
                .require_columns(file.path(), &["GROUND_TRUTH_LABEL"])
                .is_ok()
        );
        let err = table
            .require_columns(file.path(), &["GROUND_TRUTH_LABEL", "PREDICTED_LABEL"])
            .unwrap_err();
        assert!(
            matches!(err, MetricsError::MissingColumn { ref column, .. } if column == "PREDICTED_LABEL")
        );
        Ok(())
    }

    #[test]
    fn test_value_counts_and_format() -> Result<()> {
        let file = write_csv("L\nSAFE\nMALWARE\nMALWARE\nSAFE\nMALWARE\n");
        let table = load_table(file.path())?;
        let counts = table.value_counts("L").unwrap();

        assert_eq!(counts.get("MALWARE"), Some(&3));
        assert_eq!(counts.get("SAFE"), Some(&2));
        assert_eq!(format_distribution(&counts), "{'MALWARE': 3, 'SAFE': 2}");
        assert!(table.value_counts("MISSING").is_none());
        Ok(())
    }

    #[test]
    fn test_format_distribution_ties_by_label() {
        let counts: BTreeMap<String, usize> = [("SAFE".to_string(), 2), ("MALWARE".to_string(), 2)]
            .into_iter()
            .collect();
        assert_eq!(format_distribution(&counts), "{'MALWARE': 2, 'SAFE': 2}");
        assert_eq!(format_distribution(&BTreeMap::new()), "{}");
    }
}
