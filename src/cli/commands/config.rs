use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config, path } = cmd {
        if *path {
            println!("{}", Config::config_file().display());
        }

        if *print_config {
            let file = Config::config_file();
            if file.exists() {
                print!("{}", fs::read_to_string(file)?);
            } else {
                // No file yet: show the effective defaults instead
                messages::warning("No config file yet (run `daytrip init`); showing defaults");
                print!(
                    "{}",
                    serde_yaml::to_string(cfg).map_err(|_| AppError::ConfigSave)?
                );
            }
        }

        if !*print_config && !*path {
            messages::info("Nothing to do: pass --print or --path");
        }
    }
    Ok(())
}
