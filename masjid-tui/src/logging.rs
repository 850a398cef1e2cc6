use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use time::{format_description::well_known::Rfc3339, UtcOffset};
use tracing_subscriber::{fmt::time::OffsetTime, EnvFilter};

use crate::config::DashboardConfig;

/// Filter directives are read from this variable, e.g. `MASJID_LOG=debug`.
pub const LOG_ENV: &str = "MASJID_LOG";

/// Route tracing output to a log file; the terminal belongs to the dashboard.
pub fn init(offset: UtcOffset) -> Result<PathBuf> {
    let path = DashboardConfig::log_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(OffsetTime::new(offset, Rfc3339))
        .with_target(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))?;

    Ok(path)
}
