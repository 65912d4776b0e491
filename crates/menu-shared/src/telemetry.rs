//! Telemetry setup

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogSettings;
use crate::constants::LOG_FILE_PREFIX;
use crate::error::AppError;

/// Installs the global subscriber: `RUST_LOG` filter (default `info`),
/// stdout in the configured format, plus a daily rolling file when
/// `log.dir` is set.
pub fn init_telemetry(settings: &LogSettings) -> Result<(), AppError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_appender = match settings.dir.as_deref() {
        Some(dir) => Some(
            RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(LOG_FILE_PREFIX)
                .filename_suffix("log")
                .build(dir)
                .map_err(|e| AppError::TelemetryError(e.to_string()))?,
        ),
        None => None,
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match settings.format.as_str() {
        "pretty" => registry
            .with(fmt::layer().pretty().with_target(true))
            .with(file_appender.map(|w| fmt::layer().with_writer(w).with_ansi(false)))
            .try_init(),
        _ => registry
            .with(fmt::layer().json().with_target(true))
            .with(file_appender.map(|w| fmt::layer().json().with_writer(w)))
            .try_init(),
    };

    result.map_err(|e| AppError::TelemetryError(e.to_string()))
}
