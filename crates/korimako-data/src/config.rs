use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::source::DEFAULT_DATASET;

/// Configuration for korimako.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (KORIMAKO_* prefix)
/// 3. Config file (~/.config/korimako/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the bird dataset document.
    ///
    /// Can be set via:
    /// - CLI: --dataset /path/to/nzbird.json
    /// - ENV: KORIMAKO_DATASET_PATH
    /// - Config: dataset_path = "/path/to/nzbird.json"
    /// - Default: nzbird.json (relative to the working directory)
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,

    /// Path to the SQLite favourites database.
    ///
    /// Can be set via:
    /// - CLI: --db /path/to/db
    /// - ENV: KORIMAKO_DATABASE_PATH
    /// - Config: database_path = "/path/to/db"
    /// - Default: ~/.local/share/korimako/korimako.db
    #[serde(default = "default_db_path")]
    pub database_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            database_path: default_db_path(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/korimako/config.toml
    /// Reads environment variables with KORIMAKO_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("korimako");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration with CLI overrides applied on top.
    pub fn load_with(dataset: Option<PathBuf>, db: Option<PathBuf>) -> Result<Self> {
        let mut config = Self::load()?;
        if let Some(dataset) = dataset {
            config.dataset_path = dataset;
        }
        if let Some(db) = db {
            config.database_path = db;
        }
        Ok(config)
    }
}

/// Get the default dataset path: the document's fixed relative location.
fn default_dataset_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATASET)
}

/// Get the default favourites database path.
///
/// Returns: ~/.local/share/korimako/korimako.db (or platform equivalent)
fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("korimako")
        .join("korimako.db")
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/korimako/config.toml
/// - macOS: ~/Library/Application Support/korimako/config.toml
/// - Windows: %APPDATA%\korimako\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("korimako")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Korimako Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (KORIMAKO_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Path to the bird dataset document
#
# Can also be set via:
# - CLI: korimako --dataset /path/to/nzbird.json browse
# - Environment: KORIMAKO_DATASET_PATH=/path/to/nzbird.json
#dataset_path = "nzbird.json"

# Path to the SQLite favourites database
#
# Stores the favourited bird names
#
# Can also be set via:
# - CLI: korimako --db /custom/path.db browse
# - Environment: KORIMAKO_DATABASE_PATH=/custom/path.db
#
# Default: Platform-specific data directory
#database_path = "/path/to/custom/korimako.db"
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
