pub mod config;
pub mod quiz;
pub mod validate;

use std::path::{Path, PathBuf};

use quizme_core::{Config, ConfigError};

/// `--config` if given, else the default location.
pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::path(),
    }
}

pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    match explicit {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

pub fn save_config(config: &Config, explicit: Option<&Path>) -> Result<(), ConfigError> {
    match explicit {
        Some(path) => config.save_to(path),
        None => config.save(),
    }
}
