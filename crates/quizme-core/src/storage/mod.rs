mod config;

pub use config::Config;

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/quizme[-dev]/` based on QUIZME_ENV.
///
/// Set QUIZME_ENV=dev to use the development directory. The directory is
/// not created here; saving creates it on demand.
///
/// # Errors
/// Returns an error if the home directory cannot be determined.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .ok_or(ConfigError::NoConfigDir)?
        .join(".config");

    let env = std::env::var("QUIZME_ENV").unwrap_or_else(|_| "production".to_string());

    Ok(if env == "dev" {
        base_dir.join("quizme-dev")
    } else {
        base_dir.join("quizme")
    })
}
