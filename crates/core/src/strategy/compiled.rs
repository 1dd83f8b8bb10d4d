//! Languages compiled to a native binary before running

use std::path::Path;

use tracing::debug;

use super::traits::{ExecutionContext, ExecutionStrategy};
use crate::{
    command::ProcessCommand, error::Result, scratch::UsedFiles, types::ExecutionResult,
};

#[derive(Debug, Clone)]
pub struct CompiledStrategy {
    compiler: &'static str,
    /// Fixed flags, e.g. the optimization level
    flags: &'static [&'static str],
}

impl CompiledStrategy {
    pub const fn new(compiler: &'static str, flags: &'static [&'static str]) -> Self {
        Self { compiler, flags }
    }

    /// `<compiler> <source> <flags> <compiler args> -o <binary>`
    pub fn compile_command(&self, context: &ExecutionContext<'_>, source: &Path) -> ProcessCommand {
        ProcessCommand::new(self.compiler)
            .path_arg(source)
            .args(self.flags.iter().copied())
            .args(context.compiler_args.iter().cloned())
            .arg("-o")
            .path_arg(&context.binary_path)
    }

    pub fn run_command(&self, context: &ExecutionContext<'_>) -> ProcessCommand {
        ProcessCommand::new(context.binary_path.to_string_lossy())
            .args(context.program_args.iter().cloned())
    }
}

impl ExecutionStrategy for CompiledStrategy {
    fn execute(
        &self,
        context: &ExecutionContext<'_>,
        source: &Path,
        used_files: &mut UsedFiles,
    ) -> Result<ExecutionResult> {
        // Registered before compiling: a failed compile may leave a partial binary
        used_files.register(&context.binary_path);

        let compiled = context
            .executor
            .capture(&self.compile_command(context, source))?;
        if !compiled.success() {
            debug!("Compilation failed with {}, not running", compiled.status);
            return Ok(compiled);
        }

        context.executor.capture(&self.run_command(context))
    }

    fn requirements(&self) -> Vec<&'static str> {
        vec![self.compiler]
    }

    fn name(&self) -> &'static str {
        "compiled"
    }
}
