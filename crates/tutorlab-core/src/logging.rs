//! Tracing setup.
//!
//! Filter resolution: TUTORLAB_LOG env var, else the config's `log_filter`.
//! Plain CLI commands log to stderr; chat mode writes to a daily-rotated file
//! under ${TUTORLAB_HOME}/logs because stderr would corrupt the alternate
//! screen.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::paths;

const FILTER_ENV: &str = "TUTORLAB_LOG";

fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Initializes logging to stderr, for non-TUI commands.
pub fn init_stderr(default_filter: &str) {
    tracing_subscriber::registry()
        .with(env_filter(default_filter))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Initializes logging to a daily-rotated file for chat mode.
///
/// The returned guard must be kept alive for the duration of the program or
/// buffered log lines are dropped.
pub fn init_file(default_filter: &str) -> Result<WorkerGuard> {
    let logs_dir = paths::logs_dir();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("create log directory {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&logs_dir, "tutorlab.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(env_filter(default_filter))
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .init();

    Ok(guard)
}
