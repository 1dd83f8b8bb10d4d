//! Process status values reported by runc

use std::fmt;

/// Final status of one invocation; the process exits with [`ExitCode::code`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExitCode {
    InternalError = -1,
    Ok = 0,
    LanguageError = 1,
    EditorError = 2,
    /// Scratch file could not be prepared
    FileError = 3,
    CodeError = 4,
}

impl ExitCode {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn is_ok(self) -> bool {
        self == ExitCode::Ok
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExitCode::InternalError => "internal error",
            ExitCode::Ok => "ok",
            ExitCode::LanguageError => "language error",
            ExitCode::EditorError => "editor error",
            ExitCode::FileError => "file error",
            ExitCode::CodeError => "code error",
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.as_str(), self.code())
    }
}
