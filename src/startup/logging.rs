//! File-backed tracing setup.
//!
//! The TUI owns stdout once the alternate screen is active, so diagnostics
//! go to a log file under the platform state directory instead. Filtering
//! follows `RUST_LOG` when set and defaults to `questfolio=info`.
//! Initialization failure is non-fatal: the caller runs unlogged.

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::error::{QuestfolioError, QuestfolioResult};

const LOG_FILE: &str = "questfolio.log";

/// Directory the log file lives in.
pub fn log_dir() -> QuestfolioResult<PathBuf> {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|dir| dir.join("questfolio"))
        .ok_or(QuestfolioError::NoStateDir)
}

/// Install the global tracing subscriber, writing to the log file.
///
/// Returns the log file path. A second call (e.g. from tests) is a no-op:
/// the global subscriber can only be set once, so `try_init` failures are
/// ignored.
pub fn init() -> QuestfolioResult<PathBuf> {
    let dir = log_dir()?;
    fs::create_dir_all(&dir)?;
    let path = dir.join(LOG_FILE);
    let file = File::create(&path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("questfolio=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();

    Ok(path)
}
