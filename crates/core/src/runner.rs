//! The runner: pick a language, edit a scratch file, run it

use std::any::Any;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, info, warn};

use crate::{
    command::CommandExecutor,
    config::Settings,
    editor::EditorLauncher,
    error::{Error, Result},
    exit_code::ExitCode,
    language::LanguageRegistry,
    scratch::{ScratchFile, UsedFiles},
    strategy::ExecutionContext,
};

/// What the user asked for on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunRequest {
    pub language: Option<String>,
    /// Passed to the compiler or interpreter
    pub compiler_args: Vec<String>,
    /// Passed to the executed program
    pub program_args: Vec<String>,
}

impl RunRequest {
    pub fn new(language: Option<String>) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    pub fn with_compiler_args(mut self, args: Vec<String>) -> Self {
        self.compiler_args = args;
        self
    }

    pub fn with_program_args(mut self, args: Vec<String>) -> Self {
        self.program_args = args;
        self
    }
}

type EnvLookup<'a> = Box<dyn Fn(&str) -> Option<String> + 'a>;

/// One invocation of runc.
///
/// Owns the [`UsedFiles`] of the run; every path in it is deleted before
/// [`Runner::run`] returns, whichever step failed.
pub struct Runner<'a> {
    registry: &'a LanguageRegistry,
    settings: &'a Settings,
    executor: &'a dyn CommandExecutor,
    env: EnvLookup<'a>,
    used_files: UsedFiles,
}

impl<'a> Runner<'a> {
    pub fn new(
        registry: &'a LanguageRegistry,
        settings: &'a Settings,
        executor: &'a dyn CommandExecutor,
    ) -> Self {
        Self {
            registry,
            settings,
            executor,
            env: Box::new(|key| std::env::var(key).ok()),
            used_files: UsedFiles::new(),
        }
    }

    /// Replace the process environment used to resolve the editor
    pub fn with_env(mut self, env: impl Fn(&str) -> Option<String> + 'a) -> Self {
        self.env = Box::new(env);
        self
    }

    /// Run the whole pipeline.
    ///
    /// Program output goes to `out`; the error message of a failed step goes
    /// to `err`. Returns the status the process should exit with. A panic in
    /// any step is reported as [`ExitCode::InternalError`] after cleanup.
    pub fn run(mut self, request: &RunRequest, out: &mut dyn Write, err: &mut dyn Write) -> ExitCode {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.try_run(request, &mut *out)));

        let failures = self.used_files.cleanup();
        if !failures.is_empty() {
            warn!("{} temporary file(s) could not be removed", failures.len());
        }

        // Nothing sensible left to do if stderr itself is gone
        match outcome {
            Ok(Ok(())) => ExitCode::Ok,
            Ok(Err(e)) => {
                debug!("Run failed: {:?}", e);
                let _ = writeln!(err, "{e}");
                e.exit_code()
            }
            Err(payload) => {
                let _ = writeln!(err, "Unexpected error occurred: {}", panic_message(&*payload));
                ExitCode::InternalError
            }
        }
    }

    fn try_run(&mut self, request: &RunRequest, out: &mut dyn Write) -> Result<()> {
        let registry = self.registry;
        let language = registry.resolve(request.language.as_deref())?;
        debug!("Language: {} ({})", language.id, language.extension);

        let editor = EditorLauncher::resolve(&self.settings.editor_var, &self.env)?;

        let scratch = ScratchFile::create(
            &self.settings.temp_dir(),
            &self.settings.scratch_name,
            language.extension,
            &mut self.used_files,
        )?;
        editor.edit(self.executor, scratch.path())?;

        let context = ExecutionContext::new(self.executor, self.settings.binary_path())
            .with_compiler_args(&request.compiler_args)
            .with_program_args(&request.program_args);

        info!("Running {} with the {} strategy", scratch.path().display(), language.strategy.name());
        let result = language
            .strategy
            .execute(&context, scratch.path(), &mut self.used_files)?;

        if !result.success() {
            return Err(Error::CodeFailed {
                command: result.command.clone(),
                status: result.status,
                stderr: result.stderr_lossy(),
            });
        }

        writeln!(out, "{}", result.stdout_lossy())?;
        Ok(())
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "panic"
    }
}
