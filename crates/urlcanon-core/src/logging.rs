//! Logging setup for the CLI.
//!
//! Events go to an append-only log file: `$URLCANON_LOG_FILE` when set,
//! otherwise `urlcanon.log` under the XDG state dir. If that file cannot be
//! opened, events go to stderr instead. Stdout carries normalized URLs and
//! never receives log output.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

/// Overrides the log file location.
pub const LOG_FILE_ENV: &str = "URLCANON_LOG_FILE";
/// Filter directives (same syntax as `RUST_LOG`); `RUST_LOG` is read when unset.
pub const LOG_FILTER_ENV: &str = "URLCANON_LOG";

const DEFAULT_FILTER: &str = "info,urlcanon_core=debug,urlcanon=debug";

/// Where `init_logging` ended up sending events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    File(PathBuf),
    Stderr,
}

/// Resolve the log file, creating its parent directory.
pub fn log_file_path(override_path: Option<PathBuf>) -> Result<PathBuf> {
    match override_path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create log dir {}", parent.display()))?;
            }
            Ok(path)
        }
        None => {
            let xdg_dirs = xdg::BaseDirectories::with_prefix("urlcanon")?;
            Ok(xdg_dirs.place_state_file("urlcanon.log")?)
        }
    }
}

fn open_log_file(path: &Path) -> Result<File> {
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}

fn filter_from(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

fn filter_from_env() -> EnvFilter {
    let directives = std::env::var(LOG_FILTER_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok();
    filter_from(directives)
}

fn subscriber(
    filter: EnvFilter,
    writer: BoxMakeWriter,
) -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .finish()
}

fn file_destination() -> Result<(PathBuf, File)> {
    let path = log_file_path(std::env::var_os(LOG_FILE_ENV).map(PathBuf::from))?;
    let file = open_log_file(&path)?;
    Ok((path, file))
}

/// Install the global subscriber. Never fails: an unusable log file falls
/// back to stderr, and a subscriber installed earlier is left in place.
pub fn init_logging() -> LogDestination {
    let (destination, writer, fallback_reason) = match file_destination() {
        Ok((path, file)) => (
            LogDestination::File(path),
            BoxMakeWriter::new(Mutex::new(file)),
            None,
        ),
        Err(err) => (
            LogDestination::Stderr,
            BoxMakeWriter::new(std::io::stderr),
            Some(err),
        ),
    };

    if tracing::subscriber::set_global_default(subscriber(filter_from_env(), writer)).is_err() {
        return destination;
    }

    match (&destination, fallback_reason) {
        (_, Some(err)) => tracing::warn!("file logging unavailable, using stderr: {:#}", err),
        (LogDestination::File(path), None) => {
            tracing::debug!("logging to {}", path.display())
        }
        (LogDestination::Stderr, None) => {}
    }
    destination
}
