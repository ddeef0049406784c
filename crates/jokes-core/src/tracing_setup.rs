use std::fs::OpenOptions;
use std::io;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable naming a file that receives debug logs
pub const LOG_FILE_ENV: &str = "JOKES_LOG_FILE";

/// Install file logging when `JOKES_LOG_FILE` is set.
///
/// The terminal UI owns stdout, so without a log file nothing is installed
/// and `tracing` macros are no-ops. Returns the path that is being written to.
pub fn init_tracing() -> io::Result<Option<String>> {
    let Ok(log_path) = std::env::var(LOG_FILE_ENV) else {
        return Ok(None);
    };

    let file = OpenOptions::new().create(true).append(true).open(&log_path)?;

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG);

    tracing_subscriber::registry().with(file_layer).init();
    Ok(Some(log_path))
}

/// Install a stderr logger honoring `RUST_LOG`, falling back to `default_level`
pub fn init_stderr_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}
