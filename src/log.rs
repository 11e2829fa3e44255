// src/log.rs
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt::time::uptime};

use crate::config::consts::{LOG_FILE, STORE_DIR};

/// Where log lines end up.
pub enum Target<'a> {
    /// Append to a file (GUI; stdout is not visible there).
    File(&'a Path),
    /// Write to stderr (ETL).
    Stderr,
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Safe to call twice; the second call is a no-op.
pub fn init(target: Target) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_timer(uptime())
        .with_target(false);

    let res = match target {
        Target::File(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    let _ = fs::create_dir_all(parent);
                }
            }
            match OpenOptions::new().create(true).append(true).open(path) {
                Ok(file) => builder
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .try_init(),
                Err(e) => {
                    eprintln!("Cannot open log file {}: {e}", path.display());
                    return;
                }
            }
        }
        Target::Stderr => builder.with_writer(std::io::stderr).try_init(),
    };

    if let Err(e) = res {
        // Already installed (tests, or a second init from a binary).
        tracing::debug!("log init skipped: {e}");
    }
}

/// GUI default: `.store/debug.log`.
pub fn init_default_file() {
    let path = Path::new(STORE_DIR).join(LOG_FILE);
    init(Target::File(&path));
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
