//! Mock formatter for testing.
//!
//! Records every directory it is asked to format and returns a configurable
//! outcome, so generators can be tested without a formatter installed.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::formatter::{FormatOutcome, Formatter};

/// Outcome the mock should report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBehavior {
    Succeed,
    Missing,
    Fail,
}

/// Mock formatter for testing.
#[derive(Clone)]
pub struct MockFormatter {
    program: String,
    behavior: Arc<RwLock<MockBehavior>>,
    captured_dirs: Arc<RwLock<Vec<PathBuf>>>,
}

impl Default for MockFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFormatter {
    /// Create a mock that reports success.
    pub fn new() -> Self {
        Self {
            program: "mock-fmt".to_string(),
            behavior: Arc::new(RwLock::new(MockBehavior::Succeed)),
            captured_dirs: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a mock that behaves as if the formatter is not installed.
    pub fn missing() -> Self {
        Self::new().with_behavior(MockBehavior::Missing)
    }

    /// Create a mock whose formatter exits with an error.
    pub fn failing() -> Self {
        Self::new().with_behavior(MockBehavior::Fail)
    }

    pub fn with_behavior(self, behavior: MockBehavior) -> Self {
        *self.behavior.write() = behavior;
        self
    }

    /// Get all directories passed to `format`.
    pub fn calls(&self) -> Vec<PathBuf> {
        self.captured_dirs.read().clone()
    }

    /// Get the number of calls made.
    pub fn call_count(&self) -> usize {
        self.captured_dirs.read().len()
    }
}

impl Formatter for MockFormatter {
    fn format(&self, working_dir: &Path) -> FormatOutcome {
        self.captured_dirs.write().push(working_dir.to_path_buf());

        let program = self.program.clone();
        match *self.behavior.read() {
            MockBehavior::Succeed => FormatOutcome::Formatted { program },
            MockBehavior::Missing => FormatOutcome::NotFound { program },
            MockBehavior::Fail => FormatOutcome::Failed {
                program,
                reason: "simulated failure".to_string(),
            },
        }
    }
}
