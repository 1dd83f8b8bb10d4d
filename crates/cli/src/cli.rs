use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::debug;

use runc_core::{ExitCode, LanguageRegistry, RunRequest, Settings};

use crate::commands::{aliases_command, ls_command, run_command};

/// Open the EDITOR. Write some code. Have it executed.
#[derive(Parser, Debug)]
#[command(name = "runc")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    EDITOR            Editor used to write the code\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    /// Language to be ran
    #[arg(value_name = "LANG")]
    pub lang: Option<String>,

    /// List available languages
    #[arg(short = 'l', long = "ls")]
    pub ls: bool,

    /// List available language aliases
    #[arg(short = 'a', long = "aliases")]
    pub aliases: bool,

    /// Space separated list of arguments to be passed to the compiler or the interpreter
    #[arg(long = "args", value_name = "ARGS", allow_hyphen_values = true)]
    pub compiler_args: Option<String>,

    /// Space separated list of arguments to be passed to the executed program
    #[arg(long = "argv", value_name = "ARGS", allow_hyphen_values = true)]
    pub program_args: Option<String>,

    /// Read settings from this JSON file instead of ~/.config/runc/config.json
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Execute the parsed command line and return the process status
    pub fn execute(self) -> Result<ExitCode> {
        debug!("Cli::execute called with: {:?}", self);

        let registry = LanguageRegistry::builtin();

        if self.ls {
            ls_command(&registry)?;
            return Ok(ExitCode::Ok);
        }
        if self.aliases {
            aliases_command(&registry)?;
            return Ok(ExitCode::Ok);
        }

        // Language errors take precedence over a broken config file
        if let Err(e) = registry.resolve(self.lang.as_deref()) {
            eprintln!("{e}");
            return Ok(e.exit_code());
        }

        let settings = load_settings(self.config.as_deref())?;
        let request = RunRequest::new(self.lang)
            .with_compiler_args(split_args(self.compiler_args.as_deref()))
            .with_program_args(split_args(self.program_args.as_deref()));

        Ok(run_command(&registry, &settings, &request))
    }
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => Settings::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Settings::discover().context("Failed to load user config"),
    }
}

/// `--args "-Wall -lm"` becomes `["-Wall", "-lm"]`
pub fn split_args(args: Option<&str>) -> Vec<String> {
    args.map(|s| s.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}
