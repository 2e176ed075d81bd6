//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::{files, labels, output_formats, run_id};
use crate::core::error::{MetricsError, Result};
use crate::metrics::LabelSet;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding dataset_info_<run>.csv and analysis_results_<run>.csv
    pub input_dir: Option<String>,

    /// Directory receiving the heatmap, misclassified rows and summary
    pub output_dir: Option<String>,

    /// Run id (timestamp suffix of the input files)
    pub run_id: Option<String>,

    /// Label treated as the positive class
    pub positive_label: Option<String>,

    /// Label treated as the negative class
    pub negative_label: Option<String>,

    /// Ground truth column name
    pub ground_truth_column: Option<String>,

    /// Predicted label column name
    pub predicted_column: Option<String>,

    /// Output format (text, json)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: None,  // Current directory
            output_dir: None, // Same as input_dir
            run_id: None,     // Latest run in input_dir
            positive_label: Some(labels::POSITIVE.to_string()),
            negative_label: Some(labels::NEGATIVE.to_string()),
            ground_truth_column: Some(labels::GROUND_TRUTH_COLUMN.to_string()),
            predicted_column: Some(labels::PREDICTED_COLUMN.to_string()),
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults for absent keys
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            MetricsError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let parsed: Config = toml::from_str(&content)?;

        let mut config = Config::default();
        config.overlay(parsed);

        // Validate the loaded configuration
        config.validate()?;
        Ok(config)
    }

    /// Find and load a config file in standard locations.
    ///
    /// A config file that exists but cannot be parsed is an error; no config
    /// file at all yields the defaults.
    pub fn load_from_standard_locations() -> Result<Self> {
        let mut candidates = vec![PathBuf::from(files::CONFIG_FILE_NAME)];
        for i in 1..=files::CONFIG_SEARCH_DEPTH {
            candidates.push(PathBuf::from(format!(
                "{}{}",
                "../".repeat(i),
                files::CONFIG_FILE_NAME
            )));
        }

        match candidates.into_iter().find(|path| path.is_file()) {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Copy every value set in `other` over this config
    fn overlay(&mut self, other: Config) {
        let Config {
            input_dir,
            output_dir,
            run_id,
            positive_label,
            negative_label,
            ground_truth_column,
            predicted_column,
            output_format,
            verbose,
        } = other;

        if input_dir.is_some() {
            self.input_dir = input_dir;
        }
        if output_dir.is_some() {
            self.output_dir = output_dir;
        }
        if run_id.is_some() {
            self.run_id = run_id;
        }
        if positive_label.is_some() {
            self.positive_label = positive_label;
        }
        if negative_label.is_some() {
            self.negative_label = negative_label;
        }
        if ground_truth_column.is_some() {
            self.ground_truth_column = ground_truth_column;
        }
        if predicted_column.is_some() {
            self.predicted_column = predicted_column;
        }
        if output_format.is_some() {
            self.output_format = output_format;
        }
        if verbose.is_some() {
            self.verbose = verbose;
        }
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        // Locations
        if let Some(ref input_dir) = cli_config.input_dir {
            self.input_dir = Some(input_dir.clone());
        }
        if let Some(ref output_dir) = cli_config.output_dir {
            self.output_dir = Some(output_dir.clone());
        }
        if let Some(ref run_id) = cli_config.run_id {
            self.run_id = Some(run_id.clone());
        }

        // Labels & columns
        if let Some(ref positive) = cli_config.positive_label {
            self.positive_label = Some(positive.clone());
        }
        if let Some(ref negative) = cli_config.negative_label {
            self.negative_label = Some(negative.clone());
        }
        if let Some(ref column) = cli_config.ground_truth_column {
            self.ground_truth_column = Some(column.clone());
        }
        if let Some(ref column) = cli_config.predicted_column {
            self.predicted_column = Some(column.clone());
        }

        // Output & format
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
    }

    /// Directory holding the input tables
    pub fn input_dir(&self) -> PathBuf {
        PathBuf::from(self.input_dir.as_deref().unwrap_or("."))
    }

    /// Directory receiving the artifacts, defaulting to the input directory
    pub fn output_dir(&self) -> PathBuf {
        match self.output_dir.as_deref() {
            Some(dir) => PathBuf::from(dir),
            None => self.input_dir(),
        }
    }

    /// Declared label pair
    pub fn label_set(&self) -> LabelSet {
        LabelSet::new(
            self.negative_label.as_deref().unwrap_or(labels::NEGATIVE),
            self.positive_label.as_deref().unwrap_or(labels::POSITIVE),
        )
    }

    /// Ground truth column name
    pub fn ground_truth_column(&self) -> &str {
        self.ground_truth_column
            .as_deref()
            .unwrap_or(labels::GROUND_TRUTH_COLUMN)
    }

    /// Predicted label column name
    pub fn predicted_column(&self) -> &str {
        self.predicted_column
            .as_deref()
            .unwrap_or(labels::PREDICTED_COLUMN)
    }

    /// Output format, falling back to the default
    pub fn output_format(&self) -> &str {
        self.output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate labels
        let positive = self.positive_label.as_deref().unwrap_or(labels::POSITIVE);
        let negative = self.negative_label.as_deref().unwrap_or(labels::NEGATIVE);
        if positive.is_empty() || negative.is_empty() {
            return Err(MetricsError::Config(
                "Labels cannot be empty. Expected two distinct class names.".to_string(),
            ));
        }
        if positive == negative {
            return Err(MetricsError::Config(format!(
                "Positive and negative labels are both '{positive}'. Expected two distinct class names."
            )));
        }

        // Validate columns
        let ground_truth = self.ground_truth_column();
        let predicted = self.predicted_column();
        if ground_truth.is_empty() || predicted.is_empty() {
            return Err(MetricsError::Config(
                "Column names cannot be empty.".to_string(),
            ));
        }
        if ground_truth == predicted {
            return Err(MetricsError::Config(format!(
                "Ground truth and predicted columns are both '{ground_truth}'."
            )));
        }

        // Validate output format
        let format = self.output_format();
        if !output_formats::ALL.contains(&format) {
            return Err(MetricsError::Config(format!(
                "Invalid output format '{format}'. Expected one of: {}.",
                output_formats::ALL.join(", ")
            )));
        }

        // Validate run id
        if let Some(ref id) = self.run_id {
            validate_run_id(id)?;
        }

        Ok(())
    }
}

/// Reject run ids that could escape the input directory
pub fn validate_run_id(id: &str) -> Result<()> {
    let pattern = Regex::new(run_id::PATTERN)?;
    if pattern.is_match(id) {
        Ok(())
    } else {
        Err(MetricsError::InvalidArgument(format!(
            "Run id '{id}' may only contain letters, digits, '_' and '-'."
        )))
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // Locations
    pub input_dir: Option<String>,  // --input-dir
    pub output_dir: Option<String>, // --output-dir
    pub run_id: Option<String>,     // --run-id

    // Labels & columns
    pub positive_label: Option<String>,      // --positive-label
    pub negative_label: Option<String>,      // --negative-label
    pub ground_truth_column: Option<String>, // --ground-truth-column
    pub predicted_column: Option<String>,    // --predicted-column

    // Output & format
    pub quiet: bool,                   // --quiet
    pub verbose: bool,                 // --verbose
    pub output_format: Option<String>, // --format

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
