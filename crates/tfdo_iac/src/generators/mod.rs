//! Interactive resource generators.
//!
//! Each generator asks its questions through an [`AnswerSource`], builds a
//! record from the answers and appends the rendered blocks to its target file.
//! Formatting is handled by the caller once the file is closed.
//!
//! [`AnswerSource`]: crate::answers::AnswerSource

pub mod dns;
pub mod droplet;
pub mod firewall;
pub mod provider;
pub mod variables;

pub use dns::DnsRecord;
pub use droplet::DropletRecord;
pub use provider::ProviderRecord;
pub use variables::VariableRecord;

/// Marks an answer as a reference to a declared variable.
pub const VARIABLE_MARKER: &str = "var.";

/// Marks an answer as a reference to a droplet attribute.
pub const DROPLET_MARKER: &str = "digitalocean_droplet.";
