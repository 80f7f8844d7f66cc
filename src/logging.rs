use std::fs::File;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Where log output may go without disturbing the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// Terminal UI owns the screen: file only, or nothing.
    FileOnly,
    /// Console game: file if configured, else stderr.
    FileOrStderr,
}

fn filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global `tracing` subscriber. Safe to call more than once;
/// later calls are ignored.
pub fn init(config: &LoggingConfig, sink: LogSink) -> std::io::Result<()> {
    match (&config.file, sink) {
        (Some(path), _) => {
            let log_file = File::create(path)?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter(config))
                .with_writer(Arc::new(log_file))
                .with_ansi(false)
                .try_init();
        }
        (None, LogSink::FileOrStderr) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter(config))
                .with_writer(std::io::stderr)
                .try_init();
        }
        (None, LogSink::FileOnly) => {}
    }
    Ok(())
}
