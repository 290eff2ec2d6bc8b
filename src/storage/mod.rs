pub mod codec;
pub mod config;
pub mod error;
pub mod json;
pub mod registry;
pub mod text;
pub mod xml;

use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::PathBuf;

pub use codec::FigureCodec;
pub use config::{Config, ConfigStorage, GeneralConfig, LoggingConfig, TomlConfigStorage};
pub use error::{ErrorKind, FormatError};
pub use json::JsonCodec;
pub use registry::{FormatInfo, FormatRegistry, suffix_of};
pub use text::TextCodec;
pub use xml::XmlCodec;

/// Ensure XDG data and config directories exist
/// Returns (data_dir, config_dir)
///
/// XDG Base Directory Specification:
/// - Data: $XDG_DATA_HOME/figedit (default: ~/.local/share/figedit)
/// - Config: $XDG_CONFIG_HOME/figedit (default: ~/.config/figedit)
pub fn ensure_directories() -> Result<(PathBuf, PathBuf)> {
    let home = env::var("HOME").context("HOME environment variable not set")?;
    let home_path = PathBuf::from(home);

    let data_dir = match env::var("XDG_DATA_HOME") {
        Ok(xdg_data) => PathBuf::from(xdg_data).join("figedit"),
        Err(_) => home_path.join(".local/share/figedit"),
    };

    let config_dir = match env::var("XDG_CONFIG_HOME") {
        Ok(xdg_config) => PathBuf::from(xdg_config).join("figedit"),
        Err(_) => home_path.join(".config/figedit"),
    };

    fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory {:?}", data_dir))?;
    fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create config directory {:?}", config_dir))?;

    log::debug!("Data directory: {:?}", data_dir);
    log::debug!("Config directory: {:?}", config_dir);

    Ok((data_dir, config_dir))
}
