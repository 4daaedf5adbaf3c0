//! Error types for the receptionist.
//!
//! Intent matching never fails; these cover the surrounding layers
//! (configuration loading and calendar navigation).

use std::path::PathBuf;
use thiserror::Error;

/// Result type for receptionist operations
pub type ChatResult<T> = Result<T, ChatError>;

/// Receptionist errors
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Invalid config in {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    #[error("Invalid calendar month: {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
