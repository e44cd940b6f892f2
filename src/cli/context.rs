use std::io;

use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::config::{Config, ConfigError, ConfigManager};
use crate::errors::ParkingError;
use crate::parking::ParkingLedger;

use super::commands;
use super::output;
use super::registry::CommandRegistry;

/// Errors that end the shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors scoped to a single command; the shell reports them and keeps going.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Parking(#[from] ParkingError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("exit requested")]
    ExitRequested,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// State shared by every command of one shell session.
pub struct ShellContext {
    pub mode: CliMode,
    pub ledger: ParkingLedger,
    pub config: Config,
    pub config_manager: ConfigManager,
    pub running: bool,
    registry: CommandRegistry,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::from_env()?;
        Self::with_config_manager(mode, config_manager)
    }

    pub fn with_config_manager(
        mode: CliMode,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let config = config_manager.load()?;
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        tracing::debug!(capacity = config.capacity, "shell context ready");
        Ok(Self {
            mode,
            ledger: ParkingLedger::from_config(&config),
            config,
            config_manager,
            running: true,
            registry,
        })
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.keys()
    }

    pub fn prompt(&self) -> String {
        format!(
            "parking [{}/{}] > ",
            self.ledger.occupancy(),
            self.ledger.capacity()
        )
    }

    /// Replaces the session ledger with an empty one built from the current config.
    pub fn reset_ledger(&mut self) {
        self.ledger = ParkingLedger::from_config(&self.config);
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.resolve(command).map(|entry| entry.handler) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        if let Some(name) = self.registry.closest(input, 3) {
            output::info(format!("Suggestion: `{}`?", name));
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::info("Use `help <command>` for usage details.");
            }
            other => output::error(other),
        }
    }
}
