use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::runner::CommandRunner;
use crate::{git, identifier, log_status, templates, venv};

/// Everything needed to scaffold one project, built once from parsed
/// arguments and read-only thereafter.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    pub project_name: String,
    pub target_dir: PathBuf,
    pub description: String,
    pub author: String,
    pub init_git: bool,
    pub create_venv: bool,
    pub verbose: bool,
}

#[derive(Debug, Serialize)]
pub struct ScaffoldReport {
    pub project_dir: PathBuf,
    pub package_name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Create the project directory tree and its generated files.
///
/// Steps run in a fixed order with no rollback: if a step fails, anything
/// written by earlier steps remains on disk. Optional steps (virtual
/// environment, git) are surfaced as warnings rather than failing the
/// scaffold; the directory tree is intact either way.
pub fn create_project(
    request: &ScaffoldRequest,
    runner: &dyn CommandRunner,
) -> Result<ScaffoldReport> {
    let package_name = identifier::package_name(&request.project_name)?;

    let project_dir = request.target_dir.join(&request.project_name);
    if project_dir.exists() {
        return Err(Error::DirectoryExists(project_dir));
    }

    log_status!("scaffold", "Creating project: {}", project_dir.display());
    fs::create_dir_all(&project_dir)?;

    let package_dir = project_dir.join(&package_name);
    fs::create_dir(&package_dir)?;
    fs::write(package_dir.join("__init__.py"), "")?;

    fs::write(
        project_dir.join("setup.py"),
        templates::setup_py(
            &request.project_name,
            &package_name,
            &request.description,
            &request.author,
        ),
    )?;

    fs::write(project_dir.join(".gitignore"), templates::GITIGNORE)?;

    let mut warnings = Vec::new();

    if request.create_venv {
        if let Err(err) = venv::create(runner, &project_dir, request.verbose) {
            warnings.push(err.to_string());
        }
    }

    if request.init_git {
        if let Err(err) = git::init_repo(runner, &project_dir, request.verbose) {
            warnings.push(err.to_string());
        }
    }

    Ok(ScaffoldReport {
        project_dir,
        package_name,
        warnings,
    })
}
