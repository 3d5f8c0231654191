//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/mailtriage/logs/` because the
/// terminal itself belongs to the TUI.
/// Log level is controlled by `MAILTRIAGE_LOG` environment variable.
///
/// # Examples
/// ```bash
/// MAILTRIAGE_LOG=debug mailtriage
/// MAILTRIAGE_LOG=mailtriage_client=trace mailtriage
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "mailtriage.log");

    // Default to info for our crates, warn for everything else
    let env_filter = EnvFilter::try_from_env("MAILTRIAGE_LOG").unwrap_or_else(|_| {
        EnvFilter::new(
            "mailtriage=info,mailtriage_app=info,mailtriage_client=info,mailtriage_tui=info,warn",
        )
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("mailtriage starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    Ok(data_directory().join("logs"))
}

/// Per-user data directory shared by logs and the history file
pub fn data_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("mailtriage")
}
