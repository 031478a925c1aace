//! # tfdo_iac
//!
//! Interactive Terraform generation for DigitalOcean infrastructure.
//!
//! Each resource kind has a generator that asks the operator a fixed series
//! of questions, renders the answers as HCL blocks and appends them to the
//! kind's target file. The output directory is handed to an external
//! formatter afterwards.
//!
//! ## Target files
//!
//! | Kind | File |
//! |------|------|
//! | variables | `variables.tf` |
//! | provider | `provider.tf` |
//! | droplet | `droplets.tf` |
//! | dns | `dns.tf` |
//! | firewall | none (not implemented) |
//!
//! Files are only ever appended to. Two runs against the same directory at
//! the same time may interleave their writes.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tfdo_iac::{generate, ConsoleAnswers, ResourceKind, Settings};
//! use tfdo_runner::PathFormatter;
//!
//! let settings = Settings::load(".").unwrap();
//! let formatter = PathFormatter::new(settings.formatter.clone());
//! let mut answers = ConsoleAnswers::stdin();
//!
//! let report = generate(ResourceKind::Variables, &mut answers, &formatter, &settings).unwrap();
//! println!("{} blocks written", report.blocks_written);
//! ```

pub mod answers;
pub mod appender;
pub mod dispatch;
pub mod error;
pub mod generators;
pub mod hcl;
pub mod kind;
pub mod settings;

pub use answers::{AnswerSource, ConsoleAnswers, ScriptedAnswers};
pub use appender::FileAppender;
pub use dispatch::{generate, GenerationReport, ResourceFlags};
pub use error::{IacError, IacResult};
pub use generators::{DnsRecord, DropletRecord, ProviderRecord, VariableRecord};
pub use hcl::{Block, Entry, Value};
pub use kind::ResourceKind;
pub use settings::{OutputFiles, Settings, SettingsFile, CONFIG_FILE};
