//! Languages run directly by an interpreter

use std::path::Path;

use super::traits::{ExecutionContext, ExecutionStrategy};
use crate::{
    command::ProcessCommand, error::Result, scratch::UsedFiles, types::ExecutionResult,
};

#[derive(Debug, Clone)]
pub struct InterpretedStrategy {
    interpreter: &'static str,
    flags: &'static [&'static str],
}

impl InterpretedStrategy {
    pub const fn new(interpreter: &'static str) -> Self {
        Self {
            interpreter,
            flags: &[],
        }
    }

    pub const fn with_flags(mut self, flags: &'static [&'static str]) -> Self {
        self.flags = flags;
        self
    }

    /// `<interpreter> <flags> <compiler args> <source> <program args>`
    pub fn command(&self, context: &ExecutionContext<'_>, source: &Path) -> ProcessCommand {
        ProcessCommand::new(self.interpreter)
            .args(self.flags.iter().copied())
            .args(context.compiler_args.iter().cloned())
            .path_arg(source)
            .args(context.program_args.iter().cloned())
    }
}

impl ExecutionStrategy for InterpretedStrategy {
    fn execute(
        &self,
        context: &ExecutionContext<'_>,
        source: &Path,
        _used_files: &mut UsedFiles,
    ) -> Result<ExecutionResult> {
        context.executor.capture(&self.command(context, source))
    }

    fn requirements(&self) -> Vec<&'static str> {
        vec![self.interpreter]
    }

    fn name(&self) -> &'static str {
        "interpreted"
    }
}
