use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use figedit::editor::{Session, SessionOutcome};
use figedit::logging;
use figedit::storage::{
    Config, ConfigStorage, FormatRegistry, TomlConfigStorage, ensure_directories,
};

#[derive(Parser)]
#[command(name = "figedit")]
#[command(about = "Edit a figure stored as text, JSON or XML", long_about = None)]
struct Cli {
    /// Use this configuration file instead of the XDG default
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive editing session (the default)
    Edit {
        /// Figure file to edit (prompted for when omitted)
        path: Option<PathBuf>,
    },

    /// Print a figure file
    Show {
        /// Figure file to read
        path: PathBuf,
    },

    /// Load a figure and save it under another path (and format)
    Convert {
        /// Source figure file
        from: PathBuf,
        /// Destination figure file, overwritten if it exists
        to: PathBuf,
    },

    /// List the registered file formats
    Formats,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Nothing is logged until the logger is installed, so startup
    // events are collected here and reported afterwards
    let dirs = ensure_directories();
    let (data_dir, config_dir) = match &dirs {
        Ok((data, config)) => (Some(data.clone()), Some(config.clone())),
        Err(_) => (None, None),
    };

    let config_storage = cli
        .config
        .clone()
        .or_else(|| config_dir.map(|dir| dir.join("figedit.toml")))
        .map(TomlConfigStorage::new);
    let created_config = config_storage.as_ref().is_some_and(|s| s.is_missing());
    let config = match &config_storage {
        Some(storage) => storage.load()?,
        None => Config::default(),
    };

    logging::init(&config.logging, data_dir)?;

    match &dirs {
        Ok((data, config)) => {
            log::debug!("Data directory: {:?}", data);
            log::debug!("Config directory: {:?}", config);
        }
        Err(e) => {
            log::warn!("Running without XDG directories: {:#}", e);
        }
    }
    if let Some(storage) = &config_storage {
        if created_config {
            log::info!("Created default configuration at {:?}", storage.path());
        } else {
            log::info!("Loaded configuration from {:?}", storage.path());
        }
    }

    let registry = FormatRegistry::new();

    match cli.command {
        Some(Commands::Show { path }) => cmd_show(&registry, path),
        Some(Commands::Convert { from, to }) => cmd_convert(&registry, from, to),
        Some(Commands::Formats) => cmd_formats(&registry),
        Some(Commands::Edit { path }) => cmd_edit(&registry, &config, path),
        None => cmd_edit(&registry, &config, None),
    }
}

/// Run the interactive editor on stdin/stdout
fn cmd_edit(
    registry: &FormatRegistry,
    config: &Config,
    path: Option<PathBuf>,
) -> Result<ExitCode> {
    let stdin = io::stdin();
    let key_commands = config.general.key_commands && stdin.is_terminal();
    let outcome = Session::new(registry, stdin.lock(), io::stdout().lock())
        .with_key_commands(key_commands)
        .with_default_save_path(config.general.default_save_path.clone())
        .run(path)?;

    match outcome {
        SessionOutcome::LoadFailed => Ok(ExitCode::FAILURE),
        SessionOutcome::Closed(_) => Ok(ExitCode::SUCCESS),
    }
}

/// Print a figure file
fn cmd_show(registry: &FormatRegistry, path: PathBuf) -> Result<ExitCode> {
    let figure = registry
        .load(&path)
        .with_context(|| format!("Failed to load figure from {:?}", path))?;

    println!("Name: {}", figure.name);
    println!("Width: {}", figure.width);
    println!("Height: {}", figure.height);

    Ok(ExitCode::SUCCESS)
}

/// Load a figure and re-save it; the formats come from the two suffixes
fn cmd_convert(registry: &FormatRegistry, from: PathBuf, to: PathBuf) -> Result<ExitCode> {
    let figure = registry
        .load(&from)
        .with_context(|| format!("Failed to load figure from {:?}", from))?;
    registry
        .save(&to, &figure)
        .with_context(|| format!("Failed to save figure to {:?}", to))?;

    println!("Converted {} -> {}", from.display(), to.display());
    Ok(ExitCode::SUCCESS)
}

/// List the registered formats
fn cmd_formats(registry: &FormatRegistry) -> Result<ExitCode> {
    println!("Registered formats:");
    for format in registry.formats() {
        let status = if format.implemented {
            ""
        } else {
            " (not implemented)"
        };
        println!("  {:6} {}{}", format.suffix, format.name, status);
    }
    Ok(ExitCode::SUCCESS)
}
