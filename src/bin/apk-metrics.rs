use clap::Parser;
use apk_metrics::config::{CliConfig, Config};
use apk_metrics::pipeline;
use apk_metrics::reporting::logging;
use apk_metrics::ui::{Cli, ConsoleReporter, cli_to_config};

fn main() {
    let cli = Cli::parse();

    match run_apk_metrics_logic(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main evaluation logic extracted from main() for testing
pub fn run_apk_metrics_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    // Parse CLI arguments into CliConfig using the derive-based CLI
    let cli_config = cli_to_config(cli);

    // Load and merge configuration
    let config = load_and_merge_config(&cli_config)?;

    // Setup logging
    let verbose = config.verbose.unwrap_or(false);
    logging::init_logger(verbose, cli_config.quiet);
    logging::log_config_info(&config);

    // Scores print as soon as they exist, artifacts follow
    let mut reporter = ConsoleReporter::new(config.output_format(), cli_config.quiet);
    pipeline::run_with(&config, &mut reporter).inspect_err(|e| {
        logging::log_error("Evaluation failed", Some(e));
    })?;

    Ok(0)
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()?
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}
