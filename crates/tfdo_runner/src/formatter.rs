//! External formatter lookup and invocation.
//!
//! The formatter is discovered on the executable search path and run with no
//! arguments in the directory holding the generated files. Every failure mode
//! is reported as a [`FormatOutcome`] instead of an error: formatting is a
//! courtesy step and never aborts generation.

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{RunnerError, RunnerResult};

/// Formatter executable looked up when no override is configured.
pub const DEFAULT_FORMATTER: &str = "tffmt";

/// Outcome of a formatting attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FormatOutcome {
    /// The formatter ran and exited successfully.
    Formatted { program: String },
    /// The formatter is not on the search path.
    NotFound { program: String },
    /// The formatter was found but could not be started or exited non-zero.
    Failed { program: String, reason: String },
}

impl FormatOutcome {
    pub fn is_formatted(&self) -> bool {
        matches!(self, Self::Formatted { .. })
    }

    pub fn program(&self) -> &str {
        match self {
            Self::Formatted { program }
            | Self::NotFound { program }
            | Self::Failed { program, .. } => program,
        }
    }

    /// Operator-facing one-line summary.
    pub fn summary(&self) -> String {
        match self {
            Self::Formatted { program } => format!("Formatted output with {}", program),
            Self::NotFound { program } => {
                format!("{} not found on PATH, output left unformatted", program)
            }
            Self::Failed { program, reason } => format!("{} failed: {}", program, reason),
        }
    }
}

/// Something that can canonicalise the files in a directory.
pub trait Formatter {
    /// Format the files in `working_dir`.
    fn format(&self, working_dir: &Path) -> FormatOutcome;
}

/// Captured result of a finished process.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Get combined output (stdout + stderr).
    pub fn combined_output(&self) -> String {
        if self.stdout.is_empty() {
            self.stderr.clone()
        } else if self.stderr.is_empty() {
            self.stdout.clone()
        } else {
            format!("{}\n{}", self.stdout, self.stderr)
        }
    }
}

/// Formatter resolved from the executable search path.
#[derive(Debug, Clone)]
pub struct PathFormatter {
    program: String,
    search_path: Option<OsString>,
}

impl Default for PathFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_FORMATTER)
    }
}

impl PathFormatter {
    /// Create a formatter that looks `program` up on `PATH`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            search_path: None,
        }
    }

    /// Search `path` instead of the process `PATH`.
    pub fn with_search_path(mut self, path: impl Into<OsString>) -> Self {
        self.search_path = Some(path.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Resolve the formatter to an executable path.
    pub fn locate(&self) -> RunnerResult<PathBuf> {
        let search_path = match &self.search_path {
            Some(path) => Some(path.clone()),
            None => env::var_os("PATH"),
        };
        locate_executable(&self.program, search_path.as_deref())
            .ok_or_else(|| RunnerError::NotFound(self.program.clone()))
    }

    /// Run the formatter in `working_dir` and capture its output.
    pub fn run(&self, working_dir: &Path) -> RunnerResult<ProcessOutput> {
        if !working_dir.is_dir() {
            return Err(RunnerError::MissingWorkdir(working_dir.to_path_buf()));
        }

        let executable = self.locate()?;
        debug!("Executing {:?} in {:?}", executable, working_dir);

        let output = Command::new(&executable)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| RunnerError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let result = ProcessOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        };

        if !result.success() {
            return Err(RunnerError::ExitStatus {
                program: self.program.clone(),
                code: result.exit_code,
                output: result.combined_output(),
            });
        }

        Ok(result)
    }
}

impl Formatter for PathFormatter {
    fn format(&self, working_dir: &Path) -> FormatOutcome {
        let program = self.program.clone();
        match self.run(working_dir) {
            Ok(output) => {
                info!("Formatted {:?} with {}", working_dir, program);
                if !output.stdout.is_empty() {
                    debug!("{} output: {}", program, output.stdout);
                }
                FormatOutcome::Formatted { program }
            }
            Err(RunnerError::NotFound(_)) => {
                info!("{} not found on PATH, skipping formatting", program);
                FormatOutcome::NotFound { program }
            }
            Err(err) => {
                warn!("Formatting failed: {}", err);
                FormatOutcome::Failed {
                    program,
                    reason: err.to_string(),
                }
            }
        }
    }
}

/// Find `program` in the directories of `search_path`.
///
/// A program name containing a path separator is checked directly and the
/// search path is ignored.
pub fn locate_executable(program: &str, search_path: Option<&OsStr>) -> Option<PathBuf> {
    if program.is_empty() {
        return None;
    }

    let direct = Path::new(program);
    if direct.components().count() > 1 {
        return is_executable(direct).then(|| direct.to_path_buf());
    }

    let search_path = search_path?;
    env::split_paths(search_path)
        .filter(|dir| !dir.as_os_str().is_empty())
        .flat_map(|dir| candidate_names(program).into_iter().map(move |name| dir.join(name)))
        .find(|candidate| is_executable(candidate))
}

#[cfg(windows)]
fn candidate_names(program: &str) -> Vec<String> {
    let mut names = vec![program.to_string()];
    let extensions = env::var("PATHEXT").unwrap_or_else(|_| ".EXE;.CMD;.BAT".to_string());
    for ext in extensions.split(';').filter(|e| !e.is_empty()) {
        names.push(format!("{}{}", program, ext.to_lowercase()));
    }
    names
}

#[cfg(not(windows))]
fn candidate_names(program: &str) -> Vec<String> {
    vec![program.to_string()]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
