//! runc - Open the EDITOR. Write some code. Have it executed.
//!
//! This crate provides functionality to:
//! - Map a language identifier to a file extension and an execution strategy
//! - Launch the user's editor on a scratch file and wait for it to close
//! - Interpret, or compile and run, the result with its output captured
//! - Remove every temporary file the run created, whatever happened
pub mod command;
pub mod config;
pub mod editor;
pub mod error;
pub mod exit_code;
pub mod language;
pub mod runner;
pub mod scratch;
pub mod strategy;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use exit_code::ExitCode;
pub use types::*;

// Re-export main API components
pub use command::{CommandExecutor, ProcessCommand, SystemExecutor};
pub use config::Settings;
pub use editor::EditorLauncher;
pub use language::{Language, LanguageRegistry};
pub use runner::{RunRequest, Runner};
pub use scratch::{ScratchFile, UsedFiles};
pub use strategy::{CompiledStrategy, ExecutionContext, ExecutionStrategy, InterpretedStrategy};
