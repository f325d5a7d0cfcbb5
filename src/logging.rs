//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The terminal reader owns stdout and stderr while it runs, so logs go to
//! `rapid-recall.log` inside the data directory. The filter comes from the
//! `RAPID_RECALL_LOG` environment variable when set (same syntax as
//! `RUST_LOG`), otherwise from the configured `log-level`.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{RecallError, Result};

/// Environment variable overriding the configured log filter
pub const LOG_ENV: &str = "RAPID_RECALL_LOG";

/// Name of the log file inside the data directory
pub const LOG_FILE_NAME: &str = "rapid-recall.log";

/// Path of the log file for a data directory
pub fn log_file_path(data_dir: &Path) -> PathBuf {
    data_dir.join(LOG_FILE_NAME)
}

/// Build the filter: environment first, then the configured level
pub fn build_env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
    })
}

/// Install the global subscriber, appending to the log file in `data_dir`
///
/// # Errors
///
/// Fails if the log file cannot be opened or a subscriber is already set.
pub fn init_logging(data_dir: &Path, level: &str) -> Result<PathBuf> {
    fs::create_dir_all(data_dir)?;
    let path = log_file_path(data_dir);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(build_env_filter(level))
        .with(layer)
        .try_init()
        .map_err(|e| RecallError::Message(format!("logging already initialized: {e}")))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_path() {
        assert_eq!(
            log_file_path(Path::new("/data")),
            PathBuf::from("/data/rapid-recall.log")
        );
    }
}
