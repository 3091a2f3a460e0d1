//! Logging setup
//!
//! [`init`] builds a `tracing-subscriber` fmt subscriber and installs it as
//! the default for the current thread. The returned [`LogHandle`] owns that
//! installation: keep it alive for as long as logging is wanted and drop it
//! (or call [`LogHandle::teardown`]) to restore the previous subscriber.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::dispatcher::{self, DefaultGuard, Dispatch};
use tracing_subscriber::EnvFilter;

use crate::config::{BudgetPaths, Settings};
use crate::error::{BudgetError, BudgetResult};

/// Environment variable that overrides the configured log filter
pub const LOG_ENV: &str = "BUDGET_TRACKER_LOG";

/// Where log lines are going
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Live logging installation
#[must_use = "logging stops when the handle is dropped"]
pub struct LogHandle {
    target: LogTarget,
    _guard: DefaultGuard,
}

impl LogHandle {
    pub fn target(&self) -> &LogTarget {
        &self.target
    }

    /// Flush a final line and uninstall the subscriber
    pub fn teardown(self) {
        tracing::debug!("logging shut down");
        drop(self);
    }
}

fn build_filter(settings: &Settings) -> BudgetResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }
    EnvFilter::try_new(&settings.log_level).map_err(|e| {
        BudgetError::Config(format!("Invalid log level '{}': {}", settings.log_level, e))
    })
}

/// Install logging according to `settings`
pub fn init(settings: &Settings, paths: &BudgetPaths) -> BudgetResult<LogHandle> {
    let filter = build_filter(settings)?;

    let (dispatch, target) = if settings.log_to_file {
        let path = paths.log_file();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| BudgetError::Io(format!("Failed to open log file {}: {}", path.display(), e)))?;
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        (Dispatch::new(subscriber), LogTarget::File(path))
    } else {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish();
        (Dispatch::new(subscriber), LogTarget::Stderr)
    };

    let guard = dispatcher::set_default(&dispatch);
    tracing::debug!(?target, "logging initialized");

    Ok(LogHandle {
        target,
        _guard: guard,
    })
}
