//! # tfdo_runner
//!
//! External formatter execution for tfdo.
//!
//! Generated Terraform files are handed to a formatting executable found on
//! the search path. A missing or failing formatter is reported, never fatal.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use tfdo_runner::{Formatter, PathFormatter};
//!
//! let formatter = PathFormatter::new("tffmt");
//! let outcome = formatter.format(Path::new("."));
//! println!("{}", outcome.summary());
//! ```

pub mod error;
pub mod formatter;
pub mod mock;

pub use error::{RunnerError, RunnerResult};
pub use formatter::{
    locate_executable, FormatOutcome, Formatter, PathFormatter, ProcessOutput, DEFAULT_FORMATTER,
};
pub use mock::{MockBehavior, MockFormatter};
