//! Logging setup.
//!
//! The entry point calls [`init`] once and keeps the returned [`LogGuard`]
//! alive until exit so buffered file output is flushed.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use time::macros::format_description;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Logging options chosen on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogSettings {
    pub debug: bool,
    /// Also append log lines to this file.
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to install logger: {0}")]
    Init(String),
}

/// Keeps the file writer's background thread alive.
#[must_use = "dropping the guard stops file logging"]
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Default filter directive when `RUST_LOG` is not set.
pub fn default_directive(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

/// Installs the global subscriber: console on stderr, plus an optional file.
pub fn init(settings: &LogSettings) -> Result<LogGuard, LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(settings.debug)));

    let timer = LocalTime::new(format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second]"
    ));

    let console = fmt::layer()
        .with_writer(io::stderr)
        .with_timer(timer.clone())
        .with_target(false);

    let (file_layer, file_guard) = match &settings.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LoggingError::LogFile {
                    path: path.clone(),
                    source,
                })?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_timer(timer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    Ok(LogGuard { _file: file_guard })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "info");
        assert_eq!(default_directive(true), "debug");
    }

    #[test]
    fn test_unwritable_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = LogSettings {
            debug: false,
            log_file: Some(dir.path().join("missing").join("run.log")),
        };
        assert!(matches!(
            init(&settings),
            Err(LoggingError::LogFile { .. })
        ));
    }
}
