use std::path::Path;

use crate::error::{Error, Result};
use crate::log_status;
use crate::runner::CommandRunner;

/// Initialize a git repository in the project directory.
///
/// Runs `git init` and leaves the repository in its default state;
/// no initial commit is made. Subprocess output is suppressed unless
/// `verbose` is set.
pub fn init_repo(runner: &dyn CommandRunner, project_dir: &Path, verbose: bool) -> Result<()> {
    log_status!("git", "Initializing repository...");
    let output = runner.run("git", &["init"], project_dir)?;

    if verbose && !output.is_empty() {
        output.echo();
    }

    if !output.success() {
        return Err(Error::subprocess("git init", output.error_text()));
    }

    Ok(())
}
