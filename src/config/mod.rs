use crate::core::geo;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the spot dataset (CSV).
    pub dataset: String,

    /// Map center used when no selected spot carries coordinates.
    #[serde(default = "default_fallback_lat")]
    pub fallback_lat: f64,
    #[serde(default = "default_fallback_lon")]
    pub fallback_lon: f64,

    #[serde(default = "default_map_zoom")]
    pub map_zoom: u8,

    /// Character used for the rule between recommendation blocks.
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_fallback_lat() -> f64 {
    geo::DEFAULT_CENTER.0
}
fn default_fallback_lon() -> f64 {
    geo::DEFAULT_CENTER.1
}
fn default_map_zoom() -> u8 {
    geo::DEFAULT_ZOOM
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: Self::dataset_file().to_string_lossy().to_string(),
            fallback_lat: default_fallback_lat(),
            fallback_lon: default_fallback_lon(),
            map_zoom: default_map_zoom(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("daytrip")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".daytrip")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("daytrip.conf")
    }

    /// Return the default path of the spot dataset
    pub fn dataset_file() -> PathBuf {
        Self::config_dir().join("spots.csv")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
        } else {
            Ok(Config::default())
        }
    }

    /// Initialize configuration and dataset files.
    ///
    /// Creates:
    ///  - the config directory (if missing)
    ///  - the configuration file (skipped in test mode)
    ///  - the starter dataset (only when no dataset exists yet)
    pub fn init_all(custom_dataset: Option<String>, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Dataset path: user provided or default
        let dataset_path = if let Some(name) = custom_dataset {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::dataset_file()
        };

        let config = Config {
            dataset: dataset_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Seed the starter dataset if nothing is there yet
        if !dataset_path.exists() {
            crate::catalog::Catalog::write_starter(&dataset_path.to_string_lossy())?;
            println!("✅ Starter dataset written");
        }

        println!("✅ Dataset:     {:?}", dataset_path);

        Ok(())
    }
}
