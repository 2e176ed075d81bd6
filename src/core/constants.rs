//! Application-wide constants to avoid magic values throughout the codebase.
//!
//! File names, column names and label defaults follow the layout written by
//! the batch APK analyzer.

/// Output format constants
pub mod output_formats {
    /// Text output format - metrics and classification report
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 2] = [TEXT, JSON];
}

/// Input and output file naming
pub mod files {
    /// Prefix of the dataset description table
    pub const DATASET_INFO_PREFIX: &str = "dataset_info_";
    /// Prefix of the per-sample analysis results table
    pub const ANALYSIS_RESULTS_PREFIX: &str = "analysis_results_";
    /// Extension of both input tables
    pub const CSV_EXTENSION: &str = ".csv";

    /// Confusion matrix heatmap
    pub const CONFUSION_MATRIX_PNG: &str = "confusion_matrix.png";
    /// Rows whose prediction disagrees with ground truth
    pub const MISCLASSIFIED_CSV: &str = "misclassified_apks.csv";
    /// Plain-text metrics summary
    pub const METRICS_SUMMARY_TXT: &str = "metrics_summary.txt";

    /// Config file searched in the working directory and its parents
    pub const CONFIG_FILE_NAME: &str = ".apk-metrics.toml";
    /// How many parent directories to search for the config file
    pub const CONFIG_SEARCH_DEPTH: usize = 3;
}

/// Column and label defaults
pub mod labels {
    /// Ground truth column in both input tables
    pub const GROUND_TRUTH_COLUMN: &str = "GROUND_TRUTH_LABEL";
    /// Classifier output column in the results table
    pub const PREDICTED_COLUMN: &str = "PREDICTED_LABEL";
    /// Default positive class
    pub const POSITIVE: &str = "MALWARE";
    /// Default negative class
    pub const NEGATIVE: &str = "SAFE";
}

/// Run id handling
pub mod run_id {
    /// Timestamp format the batch analyzer uses for run ids
    pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
    /// Characters allowed in a run id
    pub const PATTERN: &str = r"^[A-Za-z0-9_-]+$";
}

/// Report formatting
pub mod report {
    /// Decimal places for the scalar metrics
    pub const METRIC_DECIMALS: usize = 4;
    /// Decimal places in the classification report table
    pub const REPORT_DIGITS: usize = 2;
    /// Header of the summary file
    pub const SUMMARY_TITLE: &str = "APK Malware Detection Evaluation";
    /// Underline of the summary header
    pub const SUMMARY_RULE: &str = "============================";
}

/// Heatmap geometry and colours
pub mod heatmap {
    /// Image width in pixels
    pub const WIDTH: u32 = 1000;
    /// Image height in pixels
    pub const HEIGHT: u32 = 800;
    /// Lightest colour of the "Blues" ramp
    pub const LIGHT: [u8; 3] = [0xF7, 0xFB, 0xFF];
    /// Darkest colour of the "Blues" ramp
    pub const DARK: [u8; 3] = [0x08, 0x30, 0x6B];
    /// Ink colour for text on light backgrounds
    pub const INK: [u8; 3] = [0x26, 0x26, 0x26];
    /// Ink colour for text on dark backgrounds
    pub const INK_ON_DARK: [u8; 3] = [0xFF, 0xFF, 0xFF];
    /// Title drawn above the grid
    pub const TITLE: &str = "Confusion Matrix";
    /// X-axis label
    pub const X_LABEL: &str = "Predicted";
    /// Y-axis label
    pub const Y_LABEL: &str = "Actual";
    /// Pixel heights of the title, axis labels, tick labels and cell counts
    pub const TITLE_SIZE: f32 = 36.0;
    pub const AXIS_SIZE: f32 = 28.0;
    pub const TICK_SIZE: f32 = 24.0;
    pub const COUNT_SIZE: f32 = 64.0;
}
