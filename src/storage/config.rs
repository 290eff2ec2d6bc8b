use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Editor session settings
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Path used when the save prompt is left empty
    /// (falls back to the path the figure was loaded from)
    #[serde(default)]
    pub default_save_path: Option<PathBuf>,

    /// Read F1/Escape as single key presses when stdin is a terminal
    #[serde(default = "default_key_commands")]
    pub key_commands: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            default_save_path: None,
            key_commands: default_key_commands(),
        }
    }
}

/// Log file settings
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Write log records to a rotating file instead of stderr
    #[serde(default)]
    pub file_logging: bool,

    /// Minimum level written to the log file
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file name inside the data directory
    #[serde(default = "default_log_file_name")]
    pub file_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            file_logging: false,
            level: default_log_level(),
            file_name: default_log_file_name(),
        }
    }
}

// Default value functions for serde
fn default_key_commands() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file_name() -> String {
    "figedit.log".to_string()
}

/// Trait for configuration storage
pub trait ConfigStorage: Send + Sync {
    /// Load configuration from file
    fn load(&self) -> Result<Config>;

    /// Create default configuration file if it doesn't exist
    fn create_default(&self) -> Result<()>;
}

/// TOML-based implementation of ConfigStorage
pub struct TomlConfigStorage {
    path: PathBuf,
}

impl TomlConfigStorage {
    pub fn new(path: PathBuf) -> Self {
        TomlConfigStorage { path }
    }

    /// Whether `load` will create the default file
    pub fn is_missing(&self) -> bool {
        !self.path.exists()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStorage for TomlConfigStorage {
    fn load(&self) -> Result<Config> {
        if self.is_missing() {
            log::info!(
                "Config file not found at {:?}, creating default configuration",
                self.path
            );
            self.create_default()?;
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read config from {:?}", self.path))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {:?}", self.path))?;

        log::info!("Loaded configuration from {:?}", self.path);
        log::debug!(
            "Config: key_commands={}, file_logging={}",
            config.general.key_commands,
            config.logging.file_logging
        );

        Ok(config)
    }

    fn create_default(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }

        // Use the example config compiled into the binary
        let example_config = include_str!("../../figedit.toml.example");

        fs::write(&self.path, example_config)
            .with_context(|| format!("Failed to create default config at {:?}", self.path))?;

        log::info!("Created default configuration at {:?}", self.path);

        Ok(())
    }
}
