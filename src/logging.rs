//! File-backed tracing setup.
//!
//! The TUI owns stdout, so logs only go to the file named by the
//! `SHEETNAV_LOG` environment variable; when it is unset, logging is
//! disabled entirely.

use std::fs::File;
use std::sync::Mutex;

use color_eyre::Result;
use tracing_subscriber::EnvFilter;

/// Environment variable naming the log file.
pub const LOG_ENV_VAR: &str = "SHEETNAV_LOG";

/// Initialize the global tracing subscriber if `SHEETNAV_LOG` is set.
///
/// `RUST_LOG` controls the filter; without it, `sheetnav=debug` is used.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init() -> Result<()> {
    let Ok(path) = std::env::var(LOG_ENV_VAR) else {
        return Ok(());
    };

    let file = File::create(&path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sheetnav=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
