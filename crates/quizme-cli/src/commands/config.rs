use std::path::Path;

use clap::Subcommand;
use quizme_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "session.quit_command", "ladder.missed_secs")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
    /// List all config values
    List,
    /// Reset config to defaults
    Reset,
    /// Print the config file location
    Path,
}

pub fn run(action: ConfigAction, explicit: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = super::load_config(explicit)?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => {
                    eprintln!("unknown key: {key}");
                    std::process::exit(1);
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = super::load_config(explicit)?;
            config.set(&key, &value)?;
            super::save_config(&config, explicit)?;
            println!("ok");
        }
        ConfigAction::List => {
            let config = super::load_config(explicit)?;
            let json = serde_json::to_string_pretty(&config)?;
            println!("{json}");
        }
        ConfigAction::Reset => {
            super::save_config(&Config::default(), explicit)?;
            println!("config reset to defaults");
        }
        ConfigAction::Path => println!("{}", super::config_path(explicit)?.display()),
    }
    Ok(())
}
