use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid project name: {0}")]
    InvalidProjectName(String),

    #[error("Directory already exists: {}", .0.display())]
    DirectoryExists(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{context} failed: {message}")]
    Subprocess { context: String, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn subprocess(context: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Subprocess {
            context: context.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidProjectName(_) => "INVALID_PROJECT_NAME",
            Error::DirectoryExists(_) => "DIRECTORY_EXISTS",
            Error::Io(_) => "IO_ERROR",
            Error::Subprocess { .. } => "SUBPROCESS_ERROR",
        }
    }
}
