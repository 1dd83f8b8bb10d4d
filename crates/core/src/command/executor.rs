//! Process spawning seam

use tracing::debug;

use super::ProcessCommand;
use crate::{
    error::{Error, Result},
    types::ExecutionResult,
};

/// Runs external programs on behalf of the runner and its strategies.
///
/// Non-zero exits are never errors here; they come back inside the
/// [`ExecutionResult`] so the caller decides what a failure means.
/// `Err` is reserved for processes that could not be started at all.
pub trait CommandExecutor {
    /// Run to completion with stdout and stderr captured
    fn capture(&self, command: &ProcessCommand) -> Result<ExecutionResult>;

    /// Run in the foreground, attached to the user's terminal
    fn interactive(&self, command: &ProcessCommand) -> Result<ExecutionResult>;
}

/// Executor backed by `std::process::Command`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

impl CommandExecutor for SystemExecutor {
    fn capture(&self, command: &ProcessCommand) -> Result<ExecutionResult> {
        let shell_cmd = command.to_shell_command();
        debug!("Capturing: {}", shell_cmd);

        let output = command
            .to_captured_command()
            .output()
            .map_err(|source| Error::Spawn {
                program: command.program.clone(),
                source,
            })?;

        let result = ExecutionResult::from_output(shell_cmd, output);
        debug!("`{}` exited with {}", result.command, result.status);
        Ok(result)
    }

    fn interactive(&self, command: &ProcessCommand) -> Result<ExecutionResult> {
        let shell_cmd = command.to_shell_command();
        debug!("Running interactively: {}", shell_cmd);

        let status = command
            .to_command()
            .status()
            .map_err(|source| Error::Spawn {
                program: command.program.clone(),
                source,
            })?;

        Ok(ExecutionResult::from_status(shell_cmd, status))
    }
}
