//! Error types for the runner module.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for runner operations.
pub type RunnerResult<T> = Result<T, RunnerError>;

/// Errors that can occur while locating or running an external tool.
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Executable not found on PATH: {0}")]
    NotFound(String),

    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with code {code:?}: {output}")]
    ExitStatus {
        program: String,
        code: Option<i32>,
        output: String,
    },

    #[error("Working directory does not exist: {0:?}")]
    MissingWorkdir(PathBuf),
}
