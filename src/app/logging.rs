//! Logging Setup
//!
//! stderr output always; a daily rolling file in the data directory when
//! `log.file` is enabled. `RUST_LOG` overrides the configured level.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::{self, time::LocalTime};
use tracing_subscriber::prelude::*;

use crate::constants::LOG_FILE_PREFIX;
use crate::domain::config::LogConfig;
use crate::error::{Error, Result};
use crate::helpers::get_or_create_data_dir;

/// Install the global subscriber. Keep the returned guard alive for the
/// whole process so buffered file output is flushed on exit.
pub fn init_logging(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| Error::Invalid {
            message: format!("Invalid log level '{}': {e}", config.level),
        })?;

    let (file_writer, guard) = if config.file {
        let dir = get_or_create_data_dir()?.join("logs");
        let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        (Some(writer), Some(guard))
    } else {
        (None, None)
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(LocalTime::rfc_3339());
    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_ansi(false)
            .with_timer(LocalTime::rfc_3339())
            .with_writer(writer)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| Error::Invalid {
            message: format!("Logging already initialized: {e}"),
        })?;

    Ok(guard)
}
