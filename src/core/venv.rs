use std::path::Path;

use crate::error::{Error, Result};
use crate::log_status;
use crate::runner::CommandRunner;

/// Directory name the virtual environment is created under.
pub const VENV_DIR: &str = "venv";

fn python_program() -> &'static str {
    if cfg!(windows) {
        "python"
    } else {
        "python3"
    }
}

/// Create a virtual environment inside the project directory.
///
/// Subprocess output is suppressed unless `verbose` is set.
pub fn create(runner: &dyn CommandRunner, project_dir: &Path, verbose: bool) -> Result<()> {
    log_status!("venv", "Creating virtual environment...");
    let output = runner.run(python_program(), &["-m", "venv", VENV_DIR], project_dir)?;

    if verbose && !output.is_empty() {
        output.echo();
    }

    if !output.success() {
        return Err(Error::subprocess("venv creation", output.error_text()));
    }

    Ok(())
}
