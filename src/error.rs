use std::path::PathBuf;

use thiserror::Error;

pub type DriverResult<T> = std::result::Result<T, DriverError>;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum ScanError {
    #[error("Unexpected character: {0}")]
    UnexpectedCharacter(char),
}

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Usage: loxscan [script]")]
    Usage,
    #[error("Could not read file \"{}\".", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0} error(s) while scanning.")]
    Scan(usize),
}

impl DriverError {
    /// Process exit status, following sysexits(3).
    pub fn exit_code(&self) -> i32 {
        match self {
            DriverError::Usage => 64,
            DriverError::Scan(_) => 65,
            DriverError::ReadFile { .. } | DriverError::Io(_) => 74,
        }
    }
}
