//! Scan-root configuration.
//!
//! The root folder is no longer a hard-coded constant: it is resolved once
//! at startup, in precedence order, from the `--root` flag, the
//! `SHEETNAV_ROOT` environment variable, the JSON config file, and finally
//! the current directory.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::debug;

/// Environment variable overriding the scan root.
pub const ROOT_ENV_VAR: &str = "SHEETNAV_ROOT";

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Root folder whose subtree is scanned at startup.
    pub root: PathBuf,
}

/// On-disk shape of the config file.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    root: Option<PathBuf>,
}

impl AppConfig {
    /// Resolve the configuration from the CLI override, the environment
    /// and the config file, in that order, defaulting to the current
    /// directory.
    pub fn resolve(cli_root: Option<PathBuf>) -> Self {
        let root = cli_root
            .or_else(root_from_env)
            .or_else(root_from_file)
            .unwrap_or_else(|| PathBuf::from("."));
        Self { root }
    }
}

fn root_from_env() -> Option<PathBuf> {
    env::var_os(ROOT_ENV_VAR).map(PathBuf::from)
}

fn root_from_file() -> Option<PathBuf> {
    let path = config_file_path()?;
    let contents = fs::read_to_string(&path).ok()?;
    match serde_json::from_str::<ConfigFile>(&contents) {
        Ok(file) => file.root,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "ignoring malformed config file");
            None
        }
    }
}

/// `<config-dir>/sheetnav/config.json`.
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sheetnav").join("config.json"))
}
