use crate::models::{Companion, DurationBucket, Mood};
use clap::{Parser, Subcommand};

/// Command-line interface definition for daytrip
/// CLI application to recommend tourist spots from a CSV catalog
#[derive(Parser)]
#[command(
    name = "daytrip",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple spot-recommendation CLI: pick a mood, a visit length and company, get up to three suggestions",
    long_about = None
)]
pub struct Cli {
    /// Override dataset path (useful for tests or a custom catalog)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the starter dataset
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file location")]
        path: bool,
    },

    /// Recommend up to three spots for today
    Recommend {
        /// What are you in the mood for?
        #[arg(long, value_enum)]
        mood: Option<Mood>,

        /// How long do you want to stay?
        #[arg(long, value_enum)]
        duration: Option<DurationBucket>,

        /// Who are you going with?
        #[arg(long = "with", value_enum)]
        companion: Option<Companion>,

        /// Fix the sampling seed (repeatable results; mainly for tests)
        #[arg(long)]
        seed: Option<u64>,

        /// Also write a Leaflet map of the selection to this HTML file
        #[arg(long, value_name = "FILE")]
        map: Option<String>,
    },

    /// List the full spot catalog
    List,

    /// Check the dataset for missing images, coordinates and unknown tags
    Check,
}
