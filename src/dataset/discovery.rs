//! Locating the input tables of a batch-analysis run

use chrono::NaiveDateTime;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::validate_run_id;
use crate::core::constants::{files, run_id};
use crate::core::error::{MetricsError, Result};

/// Paths of the two tables written by one batch-analysis run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunFiles {
    pub run_id: String,
    pub dataset_info: PathBuf,
    pub analysis_results: PathBuf,
}

impl RunFiles {
    /// Build `dataset_info_<id>.csv` and `analysis_results_<id>.csv` under `input_dir`
    pub fn resolve(input_dir: &Path, id: &str) -> Result<Self> {
        validate_run_id(id)?;

        Ok(Self {
            run_id: id.to_string(),
            dataset_info: input_dir.join(format!(
                "{}{id}{}",
                files::DATASET_INFO_PREFIX,
                files::CSV_EXTENSION
            )),
            analysis_results: input_dir.join(format!(
                "{}{id}{}",
                files::ANALYSIS_RESULTS_PREFIX,
                files::CSV_EXTENSION
            )),
        })
    }

    /// When the run started, if the id is a batch-analyzer timestamp
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        parse_run_timestamp(&self.run_id)
    }
}

/// Parse a `yyyyMMdd_HHmmss` run id
pub fn parse_run_timestamp(id: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(id, run_id::TIMESTAMP_FORMAT).ok()
}

/// Find the most recent `analysis_results_<id>.csv` in `input_dir`.
///
/// Timestamp ids are ordered by time and rank above ids that are not
/// timestamps; remaining ties are broken lexicographically.
pub fn discover_latest_run(input_dir: &Path) -> Result<String> {
    let pattern = Regex::new(&format!(
        "^{}([A-Za-z0-9_-]+){}$",
        regex::escape(files::ANALYSIS_RESULTS_PREFIX),
        regex::escape(files::CSV_EXTENSION)
    ))?;

    let entries = fs::read_dir(input_dir).map_err(|e| {
        MetricsError::InvalidArgument(format!(
            "Could not read input directory '{}': {}",
            input_dir.display(),
            e
        ))
    })?;

    let mut ids = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if let Some(captures) = pattern.captures(name) {
            ids.push(captures[1].to_string());
        }
    }

    ids.into_iter()
        .max_by(|a, b| {
            parse_run_timestamp(a)
                .cmp(&parse_run_timestamp(b))
                .then_with(|| a.cmp(b))
        })
        .ok_or_else(|| MetricsError::NoRunFound(input_dir.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "GROUND_TRUTH_LABEL,PREDICTED_LABEL\n").unwrap();
    }

    #[test]
    fn test_resolve_paths() -> Result<()> {
        let files = RunFiles::resolve(Path::new("/runs"), "20250522_140038")?;

        assert_eq!(
            files.dataset_info,
            PathBuf::from("/runs/dataset_info_20250522_140038.csv")
        );
        assert_eq!(
            files.analysis_results,
            PathBuf::from("/runs/analysis_results_20250522_140038.csv")
        );
        Ok(())
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let result = RunFiles::resolve(Path::new("/runs"), "../secret");
        assert!(matches!(result, Err(MetricsError::InvalidArgument(_))));
    }

    #[test]
    fn test_run_timestamp() -> Result<()> {
        let files = RunFiles::resolve(Path::new("."), "20250522_140038")?;
        let ts = files.timestamp().expect("timestamp id");
        assert_eq!((ts.year(), ts.month(), ts.day()), (2025, 5, 22));
        assert_eq!((ts.hour(), ts.minute(), ts.second()), (14, 0, 38));

        let named = RunFiles::resolve(Path::new("."), "nightly")?;
        assert!(named.timestamp().is_none());
        Ok(())
    }

    #[test]
    fn test_discover_latest_timestamp() -> Result<()> {
        let dir = tempfile::tempdir()?;
        touch(dir.path(), "analysis_results_20250521_090000.csv");
        touch(dir.path(), "analysis_results_20250522_140038.csv");
        touch(dir.path(), "analysis_results_20241231_235959.csv");
        touch(dir.path(), "dataset_info_20260101_000000.csv");
        touch(dir.path(), "notes.txt");

        assert_eq!(discover_latest_run(dir.path())?, "20250522_140038");
        Ok(())
    }

    #[test]
    fn test_discover_prefers_timestamps_over_names() -> Result<()> {
        let dir = tempfile::tempdir()?;
        touch(dir.path(), "analysis_results_zzz.csv");
        touch(dir.path(), "analysis_results_20250101_000000.csv");

        assert_eq!(discover_latest_run(dir.path())?, "20250101_000000");
        Ok(())
    }

    #[test]
    fn test_discover_named_runs_lexicographic() -> Result<()> {
        let dir = tempfile::tempdir()?;
        touch(dir.path(), "analysis_results_run-a.csv");
        touch(dir.path(), "analysis_results_run-b.csv");

        assert_eq!(discover_latest_run(dir.path())?, "run-b");
        Ok(())
    }

    #[test]
    fn test_discover_no_run() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "dataset_info_20250522_140038.csv");

        let result = discover_latest_run(dir.path());
        assert!(matches!(result, Err(MetricsError::NoRunFound(_))));
    }

    #[test]
    fn test_discover_missing_directory() {
        let result = discover_latest_run(Path::new("/definitely/not/a/dir"));
        assert!(matches!(result, Err(MetricsError::InvalidArgument(_))));
    }
}
