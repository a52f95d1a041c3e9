// Public modules
pub mod error;
pub mod git;
pub mod runner;
pub mod scaffold;
pub mod templates;
pub mod venv;

// Internal modules - not part of public API
pub(crate) mod identifier;

// Re-export common types for convenience
pub use error::{Error, Result};
pub use identifier::package_name;
pub use runner::{CommandOutput, CommandRunner, SystemRunner};
pub use scaffold::{ScaffoldReport, ScaffoldRequest};
