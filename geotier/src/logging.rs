//! Logging setup for geotier binaries.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary. [`init_logging`] gives a binary:
//! - A log file, truncated at startup, written off-thread
//! - Optional compact console output on stderr
//! - Filtering through `RUST_LOG`, falling back to `info` (or `debug`)

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard flushes and closes the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize the global tracing subscriber.
///
/// Creates `log_dir` if needed and clears any previous `log_file` in it.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be
/// truncated. Calling this twice in one process is a no-op for the second
/// subscriber, but the file is still truncated.
pub fn init_logging(
    log_dir: &Path,
    log_file: &str,
    console_enabled: bool,
    debug: bool,
) -> Result<LoggingGuard, io::Error> {
    prepare_log_file(log_dir, log_file)?;

    let file_appender = tracing_appender::rolling::never(log_dir, log_file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true);

    let console_layer = console_enabled.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_ansi(true)
            .compact()
    });

    // try_init so tests and embedding binaries can call this more than once
    let _ = tracing_subscriber::registry()
        .with(env_filter(debug))
        .with(file_layer)
        .with(console_layer)
        .try_init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Filter from `RUST_LOG`, or the default level when unset or invalid.
fn env_filter(debug: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level(debug)))
}

fn default_level(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

/// Create the directory and truncate the log file, returning its path.
fn prepare_log_file(log_dir: &Path, log_file: &str) -> Result<PathBuf, io::Error> {
    fs::create_dir_all(log_dir)?;
    let log_path = log_dir.join(log_file);
    fs::write(&log_path, "")?;
    Ok(log_path)
}

/// Default log directory: `~/.geotier/logs`, or `./logs` without a home.
pub fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".geotier").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}
