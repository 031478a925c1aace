//! Error types for resource generation.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for generation operations.
pub type IacResult<T> = Result<T, IacError>;

/// Errors that can occur while generating Terraform files.
#[derive(Error, Debug)]
pub enum IacError {
    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input closed before an answer to: {0}")]
    InputClosed(String),

    #[error("Failed to read answer: {0}")]
    Prompt(String),

    #[error("Invalid configuration in {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
