//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use loyaltylift_domain::{Points, TierTable};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = ".loyaltylift";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// JSON file the address book is kept in
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Starting tier thresholds for each session
    #[serde(default)]
    pub tiers: TierSettings,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Starting cumulative-point thresholds. NONE is always 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierSettings {
    #[serde(default = "default_bronze")]
    pub bronze: i64,
    #[serde(default = "default_silver")]
    pub silver: i64,
    #[serde(default = "default_gold")]
    pub gold: i64,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Command history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,

    /// Log filter used when `LOYALTYLIFT_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format, using the data file's record shape
    Json,
    /// Quiet (names only) format
    Quiet,
}

impl Config {
    /// Directory holding the config, history and default data file.
    pub fn app_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(APP_DIR))
    }

    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        Ok(Self::app_dir()?.join("config.toml"))
    }

    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::path()?,
        };
        Self::load_from(&path)
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a specific file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// The configured thresholds as a validated tier table.
    pub fn tier_table(&self) -> Result<TierTable> {
        self.tiers.to_table()
    }
}

impl TierSettings {
    /// Validate the thresholds against the tier ordering.
    pub fn to_table(&self) -> Result<TierTable> {
        let bronze = Points::uniform(self.bronze)?;
        let silver = Points::uniform(self.silver)?;
        let gold = Points::uniform(self.gold)?;
        TierTable::new(bronze, silver, gold)
            .map_err(|e| CliError::Config(format!("Invalid [tiers] section. {}", e)))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            tiers: TierSettings::default(),
            settings: Settings::default(),
        }
    }
}

impl Default for TierSettings {
    fn default() -> Self {
        Self {
            bronze: default_bronze(),
            silver: default_silver(),
            gold: default_gold(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            history_size: default_history_size(),
            log_level: default_log_level(),
        }
    }
}

fn default_data_file() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(APP_DIR).join("addressbook.json"),
        None => PathBuf::from("data").join("addressbook.json"),
    }
}

fn default_bronze() -> i64 {
    TierTable::BRONZE_THRESHOLD
}

fn default_silver() -> i64 {
    TierTable::SILVER_THRESHOLD
}

fn default_gold() -> i64 {
    TierTable::GOLD_THRESHOLD
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_history_size() -> usize {
    1000
}

fn default_log_level() -> String {
    "warn".to_string()
}
