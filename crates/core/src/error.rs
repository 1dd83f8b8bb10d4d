use std::io;
use std::path::PathBuf;

use crate::exit_code::ExitCode;

/// Errors that can occur during a runc invocation
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Language has to be specified")]
    MissingLanguage,

    #[error("Unsupported language \"{0}\"")]
    UnsupportedLanguage(String),

    #[error("Could not determine editor. Try setting {0} environment variable.")]
    EditorUnset(String),

    #[error("Failed to start the editor `{editor}`. Make sure it is in PATH: {source}")]
    EditorSpawn {
        editor: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to run the editor. Command `{command}` failed with {status}:\n\t{stderr}")]
    EditorFailed {
        command: String,
        status: i32,
        stderr: String,
    },

    /// The scratch source could not be created; reported as `ExitCode::FileError`
    #[error("Could not create scratch file {}: {source}", .path.display())]
    ScratchFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Command `{command}` failed with {status}:\n\t{stderr}")]
    CodeFailed {
        command: String,
        status: i32,
        stderr: String,
    },

    #[error("Failed to spawn `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl Error {
    /// The process status this error is reported with
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::MissingLanguage | Error::UnsupportedLanguage(_) => ExitCode::LanguageError,
            Error::EditorUnset(_) | Error::EditorSpawn { .. } | Error::EditorFailed { .. } => {
                ExitCode::EditorError
            }
            Error::ScratchFile { .. } => ExitCode::FileError,
            Error::CodeFailed { .. } => ExitCode::CodeError,
            Error::Spawn { .. } | Error::IoError(_) | Error::ConfigError(_) => {
                ExitCode::InternalError
            }
        }
    }
}

/// Result type alias for runc operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert_eq!(Error::MissingLanguage.exit_code(), ExitCode::LanguageError);
        assert_eq!(
            Error::UnsupportedLanguage("cobol".into()).exit_code(),
            ExitCode::LanguageError
        );
        assert_eq!(
            Error::EditorUnset("EDITOR".into()).exit_code(),
            ExitCode::EditorError
        );
        assert_eq!(
            Error::ScratchFile {
                path: PathBuf::from("/tmp/runc_runner.py"),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            }
            .exit_code(),
            ExitCode::FileError
        );
        assert_eq!(
            Error::CodeFailed {
                command: "python3 x.py".into(),
                status: 1,
                stderr: String::new(),
            }
            .exit_code(),
            ExitCode::CodeError
        );
        assert_eq!(
            Error::Spawn {
                program: "gcc".into(),
                source: io::Error::from(io::ErrorKind::NotFound),
            }
            .exit_code(),
            ExitCode::InternalError
        );
        assert_eq!(
            Error::ConfigError("bad".into()).exit_code(),
            ExitCode::InternalError
        );
    }

    #[test]
    fn test_error_messages() {
        insta::assert_snapshot!(Error::MissingLanguage, @"Language has to be specified");
        insta::assert_snapshot!(
            Error::UnsupportedLanguage("cobol".into()),
            @r#"Unsupported language "cobol""#
        );
        insta::assert_snapshot!(
            Error::EditorUnset("EDITOR".into()),
            @"Could not determine editor. Try setting EDITOR environment variable."
        );
    }

    #[test]
    fn test_code_error_embeds_command_and_stderr() {
        let err = Error::CodeFailed {
            command: "gcc /tmp/runc_runner.c -O3 -o /tmp/a.out".into(),
            status: 1,
            stderr: "error: expected ';'".into(),
        };
        let message = err.to_string();
        assert!(message.contains("gcc /tmp/runc_runner.c -O3 -o /tmp/a.out"));
        assert!(message.contains("failed with 1"));
        assert!(message.contains("error: expected ';'"));
    }
}
