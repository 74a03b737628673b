use crate::config::LoggingConfig;
use crate::error::{CliError, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{
        self,
        format::{DefaultFields, Format},
    },
    prelude::*,
};

type FileLayer<S> = fmt::Layer<S, DefaultFields, Format, Mutex<File>>;

pub fn level_filter(config: &LoggingConfig) -> LevelFilter {
    if config.quiet {
        LevelFilter::OFF
    } else {
        match config.verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Plain-text layer for `--log-file`: no ANSI colors, with thread ids and targets.
fn file_layer<S>(path: &Path) -> Result<FileLayer<S>> {
    let file = File::create(path).map_err(CliError::Io)?;
    Ok(fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_thread_ids(true)
        .with_target(true))
}

pub fn setup_logging(config: &LoggingConfig) -> Result<()> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(level_filter(config))
        .with(stderr_layer);

    match &config.log_file {
        Some(path) => subscriber.with(file_layer(path)?).init(),
        None => subscriber.init(),
    }

    Ok(())
}
