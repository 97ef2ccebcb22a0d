//! Configuration loading
//!
//! Reads `~/.config/capdemo/config.toml`. A missing file yields the defaults;
//! a malformed file is reported as [`AppError::Config`].

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::AppError;

pub use types::{Config, FormConfig, ProviderConfig};

const CONFIG_DIR: &str = "capdemo";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from the default location
pub fn load_config() -> Result<Config, AppError> {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => Ok(Config::default()),
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, AppError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(e) => return Err(AppError::Io(e)),
    };

    parse_config(&contents).map_err(|e| AppError::Config {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })
}

pub fn parse_config(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}
