//! Configuration loading for the trellis CLI.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::debug;

use trellis::config::AppConfig;

use crate::error::CliError;

/// Loads the application configuration.
///
/// An explicitly passed path must exist and parse. Without one, a
/// `trellis.toml` under the user configuration directory is used when
/// present; otherwise defaults apply.
pub fn load_config(path: Option<&String>) -> Result<AppConfig, CliError> {
    if let Some(path) = path {
        let path = Path::new(path);
        if !path.exists() {
            return Err(CliError::MissingConfig(path.to_path_buf()));
        }
        return read_config(path);
    }

    if let Some(default_path) = default_config_path() {
        if default_path.exists() {
            debug!(path:? = default_path; "Loading configuration from default location");
            return read_config(&default_path);
        }
    }

    debug!("No configuration file, using defaults");
    Ok(AppConfig::default())
}

fn read_config(path: &Path) -> Result<AppConfig, CliError> {
    let content = fs::read_to_string(path)?;

    toml::from_str(&content).map_err(|err| CliError::Config {
        path: path.to_path_buf(),
        err,
    })
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "trellis").map(|dirs| dirs.config_dir().join("trellis.toml"))
}
