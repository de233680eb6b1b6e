use std::{fs::OpenOptions, path::Path, sync::Mutex};

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Plain-text subscriber appending to `path`. The terminal belongs to the UI,
/// so nothing is written to stdout or stderr.
pub fn build_subscriber(
    path: &Path,
    level: &str,
) -> Result<impl Subscriber + Send + Sync + use<>> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file '{}'", path.display()))?;

    let filter = EnvFilter::try_new(level)
        .with_context(|| format!("Invalid log filter '{}'", level))?;

    Ok(tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(false),
    ))
}

pub fn init_logging(path: &Path, level: &str) -> Result<()> {
    build_subscriber(path, level)?
        .try_init()
        .with_context(|| "Failed to install the log subscriber")?;

    tracing::info!(path = %path.display(), "Logging initialised");
    Ok(())
}
