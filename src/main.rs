use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use pyinit::runner::SystemRunner;
use pyinit::scaffold::{self, ScaffoldRequest};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "pyinit")]
#[command(version = VERSION)]
#[command(about = "Scaffold a new Python project")]
struct Cli {
    /// The name of the project
    project_name: String,

    /// The directory in which to create the project
    #[arg(default_value = ".")]
    target_dir: String,

    /// Project description, written into setup.py
    #[arg(short = 'd', long)]
    description: Option<String>,

    /// Project author, written into setup.py
    #[arg(short = 'a', long)]
    author: Option<String>,

    /// Do not initialize a git repository
    #[arg(short = 'n', long = "no-git")]
    no_git: bool,

    /// Create a virtual environment inside the project
    #[arg(short = 'e', long)]
    venv: bool,

    /// Show output of external commands
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let target_dir = PathBuf::from(shellexpand::tilde(&cli.target_dir).into_owned());

    let request = ScaffoldRequest {
        project_name: cli.project_name,
        target_dir,
        description: cli.description.unwrap_or_default(),
        author: cli.author.unwrap_or_default(),
        init_git: !cli.no_git,
        create_venv: cli.venv,
        verbose: cli.verbose,
    };

    match scaffold::create_project(&request, &SystemRunner) {
        Ok(report) => {
            for warning in &report.warnings {
                eprintln!("WARNING: {warning}");
            }
            println!(
                "Created project {} at {}",
                request.project_name,
                report.project_dir.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("ERROR [{}]: {}", err.code(), err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positionals_and_flags() {
        let cli = Cli::try_parse_from([
            "pyinit", "demo", "/tmp", "-a", "Jane", "-d", "desc", "-n", "-v",
        ])
        .unwrap();
        assert_eq!(cli.project_name, "demo");
        assert_eq!(cli.target_dir, "/tmp");
        assert_eq!(cli.author.as_deref(), Some("Jane"));
        assert_eq!(cli.description.as_deref(), Some("desc"));
        assert!(cli.no_git);
        assert!(cli.verbose);
        assert!(!cli.venv);
    }

    #[test]
    fn target_dir_defaults_to_current() {
        let cli = Cli::try_parse_from(["pyinit", "demo"]).unwrap();
        assert_eq!(cli.target_dir, ".");
        assert!(!cli.no_git);
    }

    #[test]
    fn missing_project_name_is_a_usage_error() {
        let err = Cli::try_parse_from(["pyinit"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn unknown_flag_is_a_usage_error() {
        assert!(Cli::try_parse_from(["pyinit", "demo", "--bogus"]).is_err());
    }

    #[test]
    fn help_exits_zero() {
        let err = Cli::try_parse_from(["pyinit", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
