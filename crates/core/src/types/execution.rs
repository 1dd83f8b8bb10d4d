use std::process::{ExitStatus, Output};

/// Outcome of one completed process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Shell rendering of the command that produced this result
    pub command: String,
    /// Exit code, or minus the signal number when the process was killed
    pub status: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ExecutionResult {
    pub fn new(command: impl Into<String>, status: i32) -> Self {
        Self {
            command: command.into(),
            status,
            stdout: Vec::new(),
            stderr: Vec::new(),
        }
    }

    pub fn with_stdout(mut self, stdout: impl Into<Vec<u8>>) -> Self {
        self.stdout = stdout.into();
        self
    }

    pub fn with_stderr(mut self, stderr: impl Into<Vec<u8>>) -> Self {
        self.stderr = stderr.into();
        self
    }

    pub fn from_output(command: impl Into<String>, output: Output) -> Self {
        Self {
            command: command.into(),
            status: status_code(output.status),
            stdout: output.stdout,
            stderr: output.stderr,
        }
    }

    pub fn from_status(command: impl Into<String>, status: ExitStatus) -> Self {
        Self::new(command, status_code(status))
    }

    pub fn success(&self) -> bool {
        self.status == 0
    }

    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

#[cfg(unix)]
fn status_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|signal| -signal))
        .unwrap_or(-1)
}

#[cfg(not(unix))]
fn status_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}
