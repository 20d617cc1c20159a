//! daytrip library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod map;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Recommend { .. } => cli::commands::recommend::handle(&cli.command, cfg),
        Commands::List => cli::commands::list::handle(cfg),
        Commands::Check => cli::commands::check::handle(cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config ONCE
    let mut cfg = Config::load()?;

    // 3️⃣ apply a dataset override from the command line, if any
    if let Some(custom_data) = &cli.data {
        cfg.dataset = custom_data.clone();
    }
    cfg.dataset = expand_tilde(&cfg.dataset).to_string_lossy().to_string();

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
