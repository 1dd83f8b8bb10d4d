//! Core traits for per-language execution

use std::path::{Path, PathBuf};

use crate::{
    command::CommandExecutor, error::Result, scratch::UsedFiles, types::ExecutionResult,
};

/// Everything a strategy needs besides the source file
pub struct ExecutionContext<'a> {
    pub executor: &'a dyn CommandExecutor,
    /// Where compiled artifacts are written
    pub binary_path: PathBuf,
    /// Extra arguments for the compiler or interpreter
    pub compiler_args: &'a [String],
    /// Extra arguments for the executed program
    pub program_args: &'a [String],
}

impl<'a> ExecutionContext<'a> {
    pub fn new(executor: &'a dyn CommandExecutor, binary_path: PathBuf) -> Self {
        Self {
            executor,
            binary_path,
            compiler_args: &[],
            program_args: &[],
        }
    }

    pub fn with_compiler_args(mut self, args: &'a [String]) -> Self {
        self.compiler_args = args;
        self
    }

    pub fn with_program_args(mut self, args: &'a [String]) -> Self {
        self.program_args = args;
        self
    }
}

/// Turns a source file into a completed process result.
///
/// Implementations must register every file they create in `used_files`
/// and must return non-zero results rather than raising them.
pub trait ExecutionStrategy: Send + Sync {
    fn execute(
        &self,
        context: &ExecutionContext<'_>,
        source: &Path,
        used_files: &mut UsedFiles,
    ) -> Result<ExecutionResult>;

    /// Executables that have to be installed for this strategy to work
    fn requirements(&self) -> Vec<&'static str>;

    /// Get the name of this strategy
    fn name(&self) -> &'static str;
}
