//! File logging for the interactive gallery.
//!
//! The TUI owns the terminal, so every event goes to a log file through a
//! non-blocking writer. One-shot commands never initialize logging.

use std::ffi::OsStr;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

pub const DEFAULT_LOG_FILE: &str = "control-gallery.log";

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Directory and file name of the log, defaulting to `./control-gallery.log`.
fn split_log_path(log_path: Option<&Path>) -> (&Path, &OsStr) {
    let log_path = log_path.unwrap_or(Path::new(DEFAULT_LOG_FILE));
    let dir = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file = log_path
        .file_name()
        .unwrap_or_else(|| OsStr::new(DEFAULT_LOG_FILE));
    (dir, file)
}

/// Filter directive for this crate. Unknown levels fall back to `info`.
fn crate_directive(level: Option<&str>) -> String {
    let level = level
        .map(str::to_ascii_lowercase)
        .filter(|l| LEVELS.contains(&l.as_str()))
        .unwrap_or_else(|| "info".to_string());
    format!("control_gallery={level}")
}

/// Initialize tracing with file output.
///
/// `RUST_LOG` takes precedence over `level` when set. The returned guard
/// flushes pending events on drop and must outlive the TUI.
///
/// Debug builds also record span enter/close for the instrumented host
/// operations.
pub fn init_logging(log_path: Option<&Path>, level: Option<&str>) -> WorkerGuard {
    let (dir, file) = split_log_path(log_path);
    let appender = tracing_appender::rolling::never(dir, file);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(crate_directive(level)))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false);

    #[cfg(debug_assertions)]
    let file_layer = {
        use tracing_subscriber::fmt::format::FmtSpan;
        file_layer.with_span_events(FmtSpan::ENTER | FmtSpan::CLOSE)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    guard
}
