// Command-line interface definitions and parsing for apk-metrics

use crate::config::CliConfig;
use crate::core::constants::output_formats;
use clap::Parser;

/// Evaluate a batch APK analysis run against its ground truth labels
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // Run Selection
    /// Directory containing the run's CSV files (default: .)
    #[arg(short = 'i', long, value_name = "DIR", help_heading = "Run Selection")]
    pub input_dir: Option<String>,

    /// Directory for the generated artifacts (default: input directory)
    #[arg(short = 'o', long, value_name = "DIR", help_heading = "Run Selection")]
    pub output_dir: Option<String>,

    /// Run id, the suffix of analysis_results_<ID>.csv (default: latest run)
    #[arg(short = 'r', long, value_name = "ID", help_heading = "Run Selection")]
    pub run_id: Option<String>,

    // Labels & Columns
    /// Positive class label (default: MALWARE)
    #[arg(long, value_name = "LABEL", help_heading = "Labels & Columns")]
    pub positive_label: Option<String>,

    /// Negative class label (default: SAFE)
    #[arg(long, value_name = "LABEL", help_heading = "Labels & Columns")]
    pub negative_label: Option<String>,

    /// Ground truth column (default: GROUND_TRUTH_LABEL)
    #[arg(long, value_name = "NAME", help_heading = "Labels & Columns")]
    pub ground_truth_column: Option<String>,

    /// Predicted label column (default: PREDICTED_LABEL)
    #[arg(long, value_name = "NAME", help_heading = "Labels & Columns")]
    pub predicted_column: Option<String>,

    // Output & Verbosity
    /// Suppress all stdout output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format (default: text)
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Convert derive-based CLI arguments directly to CliConfig structure
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        // Locations
        input_dir: cli.input_dir.clone(),
        output_dir: cli.output_dir.clone(),
        run_id: cli.run_id.clone(),

        // Labels & columns
        positive_label: cli.positive_label.clone(),
        negative_label: cli.negative_label.clone(),
        ground_truth_column: cli.ground_truth_column.clone(),
        predicted_column: cli.predicted_column.clone(),

        // Output & format
        quiet: cli.quiet,
        verbose: cli.verbose,
        output_format: cli.format.clone(),

        // Configuration
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn create_default_cli() -> Cli {
        Cli {
            input_dir: None,
            output_dir: None,
            run_id: None,
            positive_label: None,
            negative_label: None,
            ground_truth_column: None,
            predicted_column: None,
            quiet: false,
            verbose: false,
            format: None,
            config: None,
            no_config: false,
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_to_config_default() {
        let config = cli_to_config(&create_default_cli());

        assert_eq!(config.input_dir, None);
        assert_eq!(config.output_dir, None);
        assert_eq!(config.run_id, None);
        assert_eq!(config.positive_label, None);
        assert_eq!(config.negative_label, None);
        assert_eq!(config.ground_truth_column, None);
        assert_eq!(config.predicted_column, None);
        assert!(!config.quiet);
        assert!(!config.verbose);
        assert_eq!(config.output_format, None);
        assert_eq!(config.config_file, None);
        assert!(!config.no_config);
    }

    #[test]
    fn test_cli_to_config_all_options() {
        let mut cli = create_default_cli();
        cli.input_dir = Some("runs".to_string());
        cli.output_dir = Some("eval".to_string());
        cli.run_id = Some("20250522_140038".to_string());
        cli.positive_label = Some("BAD".to_string());
        cli.negative_label = Some("GOOD".to_string());
        cli.ground_truth_column = Some("TRUTH".to_string());
        cli.predicted_column = Some("GUESS".to_string());
        cli.quiet = true;
        cli.verbose = true;
        cli.format = Some(output_formats::JSON.to_string());
        cli.config = Some("config.toml".to_string());
        cli.no_config = true;

        let config = cli_to_config(&cli);

        assert_eq!(config.input_dir, Some("runs".to_string()));
        assert_eq!(config.output_dir, Some("eval".to_string()));
        assert_eq!(config.run_id, Some("20250522_140038".to_string()));
        assert_eq!(config.positive_label, Some("BAD".to_string()));
        assert_eq!(config.negative_label, Some("GOOD".to_string()));
        assert_eq!(config.ground_truth_column, Some("TRUTH".to_string()));
        assert_eq!(config.predicted_column, Some("GUESS".to_string()));
        assert!(config.quiet);
        assert!(config.verbose);
        assert_eq!(config.output_format, Some(output_formats::JSON.to_string()));
        assert_eq!(config.config_file, Some("config.toml".to_string()));
        assert!(config.no_config);
    }

    #[test]
    fn test_parse_short_flags() {
        let cli = Cli::try_parse_from([
            "apk-metrics",
            "-i",
            "runs",
            "-o",
            "eval",
            "-r",
            "nightly",
            "-q",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.input_dir.as_deref(), Some("runs"));
        assert_eq!(cli.output_dir.as_deref(), Some("eval"));
        assert_eq!(cli.run_id.as_deref(), Some("nightly"));
        assert!(cli.quiet);
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        let result = Cli::try_parse_from(["apk-metrics", "--format", "xml"]);
        assert!(result.is_err());
    }
}
