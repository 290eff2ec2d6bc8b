use anyhow::{Context, Result};
use log::{LevelFilter, Log, Metadata, Record};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

use crate::storage::LoggingConfig;

/// Logger that writes timestamped records to a rotating file
/// Keeps the console free for the editor prompts
struct FileLogger {
    writer: Mutex<RollingFileAppender>,
    level: LevelFilter,
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let timestamp = chrono::Local::now();
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(
                writer,
                "{} [{}] {}: {}",
                timestamp.format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

/// Parse log level string to LevelFilter
pub fn parse_level(level_str: &str) -> LevelFilter {
    match level_str.trim().to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Install the rotating file logger as the global logger
/// Rotates daily and keeps the 3 most recent files
pub fn init_file_logger(log_file_path: &Path, level: &str) -> Result<()> {
    let dir = log_file_path
        .parent()
        .ok_or_else(|| anyhow::anyhow!("Invalid log file path {:?}", log_file_path))?;
    fs::create_dir_all(dir).context("Failed to create log directory")?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .max_log_files(3)
        .filename_prefix(
            log_file_path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("figedit"),
        )
        .filename_suffix(
            log_file_path
                .extension()
                .and_then(|s| s.to_str())
                .unwrap_or("log"),
        )
        .build(dir)
        .context("Failed to create rotating file appender")?;

    let level = parse_level(level);
    let logger = FileLogger {
        writer: Mutex::new(file_appender),
        level,
    };

    log::set_boxed_logger(Box::new(logger)).context("Failed to set global logger")?;
    log::set_max_level(level);

    Ok(())
}

/// Configure logging for the process
/// Uses the file logger when enabled in config, otherwise env_logger on stderr
pub fn init(config: &LoggingConfig, data_dir: Option<PathBuf>) -> Result<()> {
    match data_dir {
        Some(dir) if config.file_logging => {
            init_file_logger(&dir.join(&config.file_name), &config.level)
        }
        _ => {
            env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or("warn"),
            )
            .try_init()
            .context("Failed to set global logger")?;
            Ok(())
        }
    }
}
