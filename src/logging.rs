use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "findash.log";

/// Parse `directives`, falling back to `findash=<default_level>` when absent or invalid.
fn filter(directives: Option<&str>, default_level: &str) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(format!("findash={default_level}")))
}

/// Log to a file in `data_dir` so the TUI's screen is never written over.
pub(crate) fn init_file_logging(data_dir: &Path, directives: Option<&str>) -> Result<PathBuf> {
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    let log_path = data_dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(directives, "info"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    tracing::info!(log_path = %log_path.display(), "findash logging initialized");
    Ok(log_path)
}

/// Log to stderr; one-shot commands keep stdout for their report.
pub(crate) fn init_stderr_logging(directives: Option<&str>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(directives, "warn"))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
}

pub(crate) fn data_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "findash", "findash")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}
