//! CLI command definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod generate;

/// tfdo - interactive Terraform generator for DigitalOcean
#[derive(Parser)]
#[command(name = "tfdo")]
#[command(version, about = "tfdo - interactive Terraform generator for DigitalOcean")]
#[command(long_about = r#"
tfdo asks for infrastructure parameters and appends the matching Terraform
blocks to files in the output directory, then runs a formatter on them.

GENERATORS (tfdo do <flag>):
  --vars      → variables.tf   variable declarations, 'quit' to finish
  --provider  → provider.tf    DigitalOcean provider, API key, SSH key lookup
  --droplet   → droplets.tf    one droplet resource
  --dns       → dns.tf         one DNS record resource
  --firewall  → (nothing yet)

Files are only appended to. Do not run two instances against the same
directory at once.

EXIT CODES:
  0 - Success
  1 - General error
  2 - No generator selected / invalid arguments
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Directory for generated files (defaults to the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Formatter executable looked up on PATH
    #[arg(long, global = true, env = "TFDO_FORMATTER", value_name = "NAME")]
    pub formatter: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate Terraform for one resource kind
    #[command(name = "do")]
    Do(generate::DoArgs),
}
