use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub const DESCRIPTION: &str = "Particula CLI - Build a particle model, decorate its particles with coordinates and print them.";

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(version, about = DESCRIPTION, help_template = HELP_TEMPLATE)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the built-in example: two point-like particles at (10, 10, 10) and (-10, -10, -10).
    Simple(OutputArgs),
    /// Build and print a model described by a scenario file.
    Run(RunArgs),
}

/// Arguments controlling how rendered particles are printed.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Print all particles on a single line, joined by this separator.
    #[arg(long, value_name = "STR")]
    pub separator: Option<String>,
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the scenario file in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub scenario: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_simple_with_global_flags() {
        let cli = Cli::try_parse_from(["particula", "-vv", "simple"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
        assert!(matches!(cli.command, Commands::Simple(OutputArgs { separator: None })));
    }

    #[test]
    fn parses_run_with_scenario_and_separator() {
        let cli = Cli::try_parse_from([
            "particula",
            "run",
            "--scenario",
            "points.toml",
            "--separator",
            " ",
            "--log-file",
            "out.log",
        ])
        .unwrap();

        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.scenario, PathBuf::from("points.toml"));
                assert_eq!(args.output.separator.as_deref(), Some(" "));
            }
            other => panic!("expected run command, got {:?}", other),
        }
        assert_eq!(cli.log_file, Some(PathBuf::from("out.log")));
    }

    #[test]
    fn run_requires_scenario() {
        let err = Cli::try_parse_from(["particula", "run"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let err = Cli::try_parse_from(["particula", "-q", "-v", "simple"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["particula"]).is_err());
    }
}
