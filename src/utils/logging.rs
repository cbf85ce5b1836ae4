// src/utils/logging.rs
use std::io;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::utils::config::RuntimeConfig;
use crate::utils::error::{CompatError, Result};

/// Installs the global subscriber. `RUST_LOG` wins over `log_level`.
///
/// When `log_dir` is set a daily rolling file is written as well; the
/// returned guard must be held until exit or buffered lines are lost.
pub fn init(runtime: &RuntimeConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&runtime.log_level))
        .map_err(|e| CompatError::Config(format!("invalid log_level: {}", e)))?;

    let console_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true);

    let (file_layer, guard) = match &runtime.log_dir {
        Some(dir) => {
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("plugin-compat")
                .filename_suffix("log")
                .build(dir)
                .map_err(|e| CompatError::Config(format!("cannot open log dir {}: {}", dir, e)))?;
            let (writer, guard) = tracing_appender::non_blocking(appender);

            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| CompatError::Config(format!("logging already initialized: {}", e)))?;

    Ok(guard)
}
