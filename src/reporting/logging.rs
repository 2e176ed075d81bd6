use crate::config::Config;
use crate::dataset::RunFiles;
use log::{debug, error, info, warn};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn // Zero-division and similar warnings stay visible
    };

    // A second initialization (tests, embedding) keeps the first logger
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    let labels = config.label_set();
    info!(
        "Configuration: input_dir={}, output_dir={}, format={}",
        config.input_dir().display(),
        config.output_dir().display(),
        config.output_format()
    );
    info!(
        "Labels: negative={}, positive={} (columns {} / {})",
        labels.negative,
        labels.positive,
        config.ground_truth_column(),
        config.predicted_column()
    );
}

/// Log which run is being evaluated
pub fn log_run_info(files: &RunFiles) {
    match files.timestamp() {
        Some(ts) => info!("Evaluating run {} (started {ts})", files.run_id),
        None => info!("Evaluating run {}", files.run_id),
    }
    debug!("  dataset info: {}", files.dataset_info.display());
    debug!("  analysis results: {}", files.analysis_results.display());
}

/// Log a loaded table
pub fn log_table_loaded(path: &Path, rows: usize) {
    info!("Loaded {rows} row(s) from {}", path.display());
}

/// Log a written artifact
pub fn log_artifact_written(kind: &str, path: &Path) {
    info!("Wrote {kind}: {}", path.display());
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}
