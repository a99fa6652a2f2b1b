use core::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    NotFound(PathBuf),
    CorruptData { path: PathBuf, reason: String },
    NotSerializable(String),
    DuplicateKey(u32),
    KeyNotFound(u32),
    InvalidInput(String),
    ParseCommand(String),
    Csv(csv::Error),
    Validation(String),
}

impl AppError {
    pub fn corrupt(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        AppError::CorruptData {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Csv(err)
    }
}

impl From<tempfile::PersistError> for AppError {
    fn from(err: tempfile::PersistError) -> Self {
        AppError::Io(err.error)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::NotFound(path) => {
                write!(
                    f,
                    "File {} does not exist. Initializing list of customers with empty list",
                    path.display()
                )
            }
            AppError::CorruptData { path, reason } => {
                write!(
                    f,
                    "Could not read customers from {} ({}). The file may be corrupted or hold \
                    data in another format. Initializing list of customers with empty list",
                    path.display(),
                    reason
                )
            }
            AppError::NotSerializable(reason) => {
                write!(
                    f,
                    "Customer list could not be serialized, nothing was written: {}",
                    reason
                )
            }
            AppError::DuplicateKey(id) => {
                write!(
                    f,
                    "Customer ID {} is already in the list. Please try again with a unique customer ID",
                    id
                )
            }
            AppError::KeyNotFound(id) => {
                write!(f, "Customer ID {} was not found", id)
            }
            AppError::InvalidInput(input) => {
                write!(f, "Invalid input: {}", input)
            }
            AppError::ParseCommand(cmd) => {
                write!(f, "Unrecognized menu choice: '{}'", cmd)
            }
            AppError::Csv(e) => {
                write!(f, "CSV error: {}", e)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for AppError {}
