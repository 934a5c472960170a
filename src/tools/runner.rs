//! External command execution with captured output.

use std::io;
use std::process::{Command, Stdio};

/// Captured output of one external tool invocation.
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code, when the process exited normally.
    pub exit_code: Option<i32>,
    pub success: bool,
}

impl ToolOutput {
    /// First non-empty stderr line, for error messages.
    pub fn stderr_summary(&self) -> &str {
        self.stderr
            .lines()
            .find(|line| !line.trim().is_empty())
            .unwrap_or("")
    }
}

/// Run a prepared command to completion, capturing stdout and stderr.
///
/// Blocks until the child exits. Does not treat a nonzero exit status as an
/// error; callers decide what the status means for their tool.
pub fn run_command(cmd: &mut Command) -> io::Result<ToolOutput> {
    tracing::debug!("running: {:?}", cmd);

    let output = cmd.stdout(Stdio::piped()).stderr(Stdio::piped()).output()?;

    Ok(ToolOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code(),
        success: output.status.success(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn captures_stdout_and_status() {
        let out = run_command(Command::new("sh").args(["-c", "echo hello"])).unwrap();
        assert_eq!(out.stdout.trim(), "hello");
        assert!(out.success);
        assert_eq!(out.exit_code, Some(0));
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_not_an_error() {
        let out = run_command(Command::new("sh").args(["-c", "echo oops >&2; exit 3"])).unwrap();
        assert!(!out.success);
        assert_eq!(out.exit_code, Some(3));
        assert_eq!(out.stderr_summary(), "oops");
    }

    #[test]
    fn missing_binary_is_an_io_error() {
        assert!(run_command(&mut Command::new("/nonexistent/tool")).is_err());
    }
}
