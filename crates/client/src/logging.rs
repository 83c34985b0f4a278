//! Tracing setup for the console client.
//!
//! Logs go to `<log root>/<session>/haven.log` through a non-blocking appender
//! so the prompt on stdout stays clean. `--stderr-logs` sends them to stderr.
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::ClientConfig;

const LOG_FILE: &str = "haven.log";

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop and must be held until
/// the process exits. It is `None` when logging to stderr.
pub fn setup_logging(config: &ClientConfig) -> Result<Option<WorkerGuard>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if config.stderr_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
        return Ok(None);
    }

    let session_id = config.session_id.clone().unwrap_or_else(default_session_id);
    let session_log_dir = session_dir(config.log_dir.as_deref(), &session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!("Failed to create log directory: {}", session_log_dir.display())
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/{}", session_log_dir.display(), LOG_FILE);

    Ok(Some(guard))
}

/// Platform cache directory (`~/.cache/haven/logs` on Linux) unless overridden.
fn session_dir(log_root: Option<&Path>, session_id: &str) -> PathBuf {
    let root = match log_root {
        Some(root) => root.to_path_buf(),
        None => directories::ProjectDirs::from("", "", "haven")
            .map(|dirs| dirs.cache_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("/tmp/haven"))
            .join("logs"),
    };
    root.join(session_id)
}

fn default_session_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{}", timestamp)
}
