//! Command execution primitives with consistent error handling.

use std::path::Path;
use std::process::Command;

use serde::Serialize;

use crate::error::{Error, Result};

/// Captured output from a finished subprocess.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CommandOutput {
    pub exit_code: i32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub stdout: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    pub fn is_empty(&self) -> bool {
        self.stdout.is_empty() && self.stderr.is_empty()
    }

    /// Echo the captured streams, each to its own stream.
    pub fn echo(&self) {
        print!("{}", self.stdout);
        eprint!("{}", self.stderr);
    }

    /// Extract error text from the output.
    ///
    /// Prefers stderr, falls back to stdout if stderr is empty.
    pub fn error_text(&self) -> String {
        if !self.stderr.trim().is_empty() {
            self.stderr.trim().to_string()
        } else {
            self.stdout.trim().to_string()
        }
    }
}

/// Capability for running external tools.
///
/// Injectable so tests can substitute a fake and assert on invocations
/// without touching the real filesystem or external tools.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str], dir: &Path) -> Result<CommandOutput>;
}

/// Runs commands through `std::process::Command`.
///
/// Blocks until the subprocess exits; no timeout is applied.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], dir: &Path) -> Result<CommandOutput> {
        let output = Command::new(program)
            .args(args)
            .current_dir(dir)
            .output()
            .map_err(|e| Error::subprocess(program, format!("failed to start: {e}")))?;

        Ok(CommandOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
