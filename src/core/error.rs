use std::fmt;

/// Error types for apk-metrics operations
#[derive(Debug)]
pub enum MetricsError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// CSV reading or writing error
    Csv(csv::Error),

    /// Heatmap encoding or writing error
    Image(image::ImageError),

    /// Embedded heatmap font could not be parsed
    Font(ab_glyph::InvalidFont),

    /// JSON rendering error
    Json(serde_json::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// Regex compilation error
    Regex(regex::Error),

    /// Configuration error
    Config(String),

    /// File not found error
    FileNotFound(String),

    /// A required column is absent from a table
    MissingColumn { file: String, column: String },

    /// The results table has no rows
    EmptyDataset(String),

    /// A label outside the declared negative/positive pair
    UnexpectedLabel {
        row: usize,
        column: String,
        value: String,
    },

    /// No analysis results file in the input directory
    NoRunFound(String),

    /// Invalid argument error
    InvalidArgument(String),
}

impl fmt::Display for MetricsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricsError::Io(err) => write!(f, "IO error: {err}"),
            MetricsError::Csv(err) => write!(f, "CSV error: {err}"),
            MetricsError::Image(err) => write!(f, "Image error: {err}"),
            MetricsError::Font(err) => write!(f, "Font error: {err}"),
            MetricsError::Json(err) => write!(f, "JSON error: {err}"),
            MetricsError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            MetricsError::Regex(err) => write!(f, "Regex error: {err}"),
            MetricsError::Config(msg) => write!(f, "Configuration error: {msg}"),
            MetricsError::FileNotFound(path) => write!(f, "File not found: {path}"),
            MetricsError::MissingColumn { file, column } => {
                write!(f, "Missing column: '{column}' not found in {file}")
            }
            MetricsError::EmptyDataset(path) => {
                write!(f, "Empty dataset: no rows to evaluate in {path}")
            }
            MetricsError::UnexpectedLabel { row, column, value } => write!(
                f,
                "Unexpected label: '{value}' in column {column} at row {row}"
            ),
            MetricsError::NoRunFound(dir) => {
                write!(f, "No run found: no analysis_results_*.csv in {dir}")
            }
            MetricsError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for MetricsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MetricsError::Io(err) => Some(err),
            MetricsError::Csv(err) => Some(err),
            MetricsError::Image(err) => Some(err),
            MetricsError::Font(err) => Some(err),
            MetricsError::Json(err) => Some(err),
            MetricsError::TomlParsing(err) => Some(err),
            MetricsError::Regex(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MetricsError {
    fn from(err: std::io::Error) -> Self {
        MetricsError::Io(err)
    }
}

impl From<csv::Error> for MetricsError {
    fn from(err: csv::Error) -> Self {
        MetricsError::Csv(err)
    }
}

impl From<image::ImageError> for MetricsError {
    fn from(err: image::ImageError) -> Self {
        MetricsError::Image(err)
    }
}

impl From<ab_glyph::InvalidFont> for MetricsError {
    fn from(err: ab_glyph::InvalidFont) -> Self {
        MetricsError::Font(err)
    }
}

impl From<serde_json::Error> for MetricsError {
    fn from(err: serde_json::Error) -> Self {
        MetricsError::Json(err)
    }
}

impl From<toml::de::Error> for MetricsError {
    fn from(err: toml::de::Error) -> Self {
        MetricsError::TomlParsing(err)
    }
}

impl From<regex::Error> for MetricsError {
    fn from(err: regex::Error) -> Self {
        MetricsError::Regex(err)
    }
}

/// Type alias for Results using MetricsError
pub type Result<T> = std::result::Result<T, MetricsError>;
