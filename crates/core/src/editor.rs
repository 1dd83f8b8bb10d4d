//! Resolving and launching the user's editor

use std::path::Path;

use tracing::info;

use crate::{
    command::{CommandExecutor, ProcessCommand},
    error::{Error, Result},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorLauncher {
    editor: String,
}

impl EditorLauncher {
    pub fn new(editor: impl Into<String>) -> Self {
        Self {
            editor: editor.into(),
        }
    }

    /// Read the editor from `var`. Unset and empty are treated alike.
    pub fn resolve(var: &str, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        env(var)
            .filter(|editor| !editor.trim().is_empty())
            .map(Self::new)
            .ok_or_else(|| Error::EditorUnset(var.to_string()))
    }

    pub fn from_env(var: &str) -> Result<Self> {
        Self::resolve(var, |key| std::env::var(key).ok())
    }

    pub fn editor(&self) -> &str {
        &self.editor
    }

    /// The scratch file is the editor's sole argument
    pub fn command(&self, file: &Path) -> ProcessCommand {
        ProcessCommand::new(&self.editor).path_arg(file)
    }

    /// Block until the user closes the editor
    pub fn edit(&self, executor: &dyn CommandExecutor, file: &Path) -> Result<()> {
        let command = self.command(file);
        info!("Opening {} with {}", file.display(), self.editor);

        let result = executor.interactive(&command).map_err(|e| match e {
            Error::Spawn { source, .. } => Error::EditorSpawn {
                editor: self.editor.clone(),
                source,
            },
            other => other,
        })?;

        if !result.success() {
            return Err(Error::EditorFailed {
                command: result.command.clone(),
                status: result.status,
                stderr: result.stderr_lossy(),
            });
        }
        Ok(())
    }
}
