use crate::cli::{Cli, Commands, DESCRIPTION};
use crate::error::Result;
use particula::core::io::scenario::Scenario;
use std::path::PathBuf;
use tracing::debug;

/// Log output settings derived from the global command-line flags.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoggingConfig {
    pub verbosity: u8,
    pub quiet: bool,
    pub log_file: Option<PathBuf>,
}

impl LoggingConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            verbosity: cli.verbose,
            quiet: cli.quiet,
            log_file: cli.log_file.clone(),
        }
    }
}

/// Everything a run needs, resolved once at startup and passed by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub description: &'static str,
    pub logging: LoggingConfig,
    pub scenario: Scenario,
    pub separator: Option<String>,
}

pub fn build_config(cli: &Cli) -> Result<AppConfig> {
    let (scenario, separator) = match &cli.command {
        Commands::Simple(output) => {
            debug!("Using the built-in two-particle scenario.");
            (Scenario::simple(), output.separator.clone())
        }
        Commands::Run(args) => (Scenario::load(&args.scenario)?, args.output.separator.clone()),
    };

    Ok(AppConfig {
        description: DESCRIPTION,
        logging: LoggingConfig::from_cli(cli),
        scenario,
        separator,
    })
}
