use anyhow::{Context, Result};
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::crossterm::terminal;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use super::{edit_figure, prompt_line};
use crate::models::Figure;
use crate::storage::FormatRegistry;

/// Action chosen at the main prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Save the current figure (F1, or `s` in line mode)
    Save,
    /// End the session (Escape, or `q` in line mode)
    Quit,
    /// Edit the current figure (any other key or line)
    Edit,
}

impl Command {
    /// Interpret a line typed in line mode
    pub fn from_line(line: &str) -> Self {
        match line.trim() {
            "s" | "S" | "save" => Command::Save,
            "q" | "Q" | "quit" | "exit" => Command::Quit,
            _ => Command::Edit,
        }
    }
}

/// How a session ended
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// The initial load failed; the editing loop never started
    LoadFailed,
    /// The user quit; carries the figure as it was when the session ended
    Closed(Figure),
}

/// Interactive editing session for one figure
///
/// The session owns the current figure. All format handling goes through
/// the registry; failures are printed and never abort the loop, except for
/// the initial load.
pub struct Session<'a, R, W> {
    registry: &'a FormatRegistry,
    input: R,
    output: W,
    key_commands: bool,
    default_save_path: Option<PathBuf>,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(registry: &'a FormatRegistry, input: R, output: W) -> Self {
        Session {
            registry,
            input,
            output,
            key_commands: false,
            default_save_path: None,
        }
    }

    /// Read F1/Escape key presses from the terminal instead of command lines
    pub fn with_key_commands(mut self, enabled: bool) -> Self {
        self.key_commands = enabled;
        self
    }

    /// Path offered when the save prompt is left empty
    pub fn with_default_save_path(mut self, path: Option<PathBuf>) -> Self {
        self.default_save_path = path;
        self
    }

    /// Run the session: load, then loop over save/edit until quit
    pub fn run(&mut self, path: Option<PathBuf>) -> Result<SessionOutcome> {
        writeln!(self.output, "Figure Editor Console Application")?;

        let path = match path {
            Some(path) => path,
            None => {
                let answer = prompt_line(
                    &mut self.input,
                    &mut self.output,
                    "Enter the file path to load:",
                )?;
                PathBuf::from(answer.unwrap_or_default())
            }
        };

        let mut figure = match self.registry.load(&path) {
            Ok(figure) => figure,
            Err(e) => {
                log::info!("Failed to load {:?}: {}", path, e);
                writeln!(self.output, "Error: {}", e)?;
                return Ok(SessionOutcome::LoadFailed);
            }
        };
        writeln!(self.output, "File loaded successfully.")?;

        let save_fallback = self.default_save_path.clone().unwrap_or(path);

        loop {
            match self.next_command()? {
                Command::Save => self.save(&figure, &save_fallback)?,
                Command::Quit => break,
                Command::Edit => edit_figure(&mut figure, &mut self.input, &mut self.output)
                    .context("Failed to edit figure")?,
            }
        }

        writeln!(self.output, "Figure Editor is closed.")?;
        Ok(SessionOutcome::Closed(figure))
    }

    fn next_command(&mut self) -> Result<Command> {
        if self.key_commands {
            writeln!(
                self.output,
                "Press F1 to save, Escape to exit, or any other key to edit the figure."
            )?;
            self.output.flush()?;
            let command = read_key_command().context("Failed to read key press")?;
            writeln!(self.output)?;
            return Ok(command);
        }

        let answer = prompt_line(
            &mut self.input,
            &mut self.output,
            "Enter 's' to save, 'q' to exit, or anything else to edit the figure.",
        )?;
        // End of input quits rather than looping forever
        Ok(answer.map_or(Command::Quit, |line| Command::from_line(&line)))
    }

    fn save(&mut self, figure: &Figure, fallback: &Path) -> Result<()> {
        let answer = prompt_line(
            &mut self.input,
            &mut self.output,
            &format!(
                "Enter the file path to save (or press Enter for {}):",
                fallback.display()
            ),
        )?;
        let target = match answer {
            Some(line) if !line.is_empty() => PathBuf::from(line),
            _ => fallback.to_path_buf(),
        };

        match self.registry.save(&target, figure) {
            Ok(()) => writeln!(self.output, "File saved successfully.")?,
            Err(e) => {
                log::info!("Failed to save {:?}: {}", target, e);
                writeln!(self.output, "Error: {}", e)?;
            }
        }
        Ok(())
    }
}

/// Wait for a single key press in raw mode and map it to a command
fn read_key_command() -> io::Result<Command> {
    terminal::enable_raw_mode()?;
    let result = loop {
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                break Ok(match key.code {
                    KeyCode::F(1) => Command::Save,
                    KeyCode::Esc => Command::Quit,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        Command::Quit
                    }
                    _ => Command::Edit,
                });
            }
            Ok(_) => continue,
            Err(e) => break Err(e),
        }
    };
    terminal::disable_raw_mode()?;
    result
}
