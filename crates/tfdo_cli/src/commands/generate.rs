//! Do command - Generate Terraform for one resource kind.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{info, warn};

use tfdo_iac::{ConsoleAnswers, GenerationReport, ResourceFlags, Settings};
use tfdo_runner::{FormatOutcome, PathFormatter};

#[derive(Args)]
pub struct DoArgs {
    /// Declare variables to be referenced across Terraform files
    #[arg(short = 'v', long)]
    vars: bool,

    /// Declare the DigitalOcean provider
    #[arg(short = 'p', long)]
    provider: bool,

    /// Declare a droplet to provision
    #[arg(short = 'd', long)]
    droplet: bool,

    /// Declare a DNS record
    #[arg(short = 'n', long)]
    dns: bool,

    /// Declare firewall rules (not implemented yet)
    #[arg(short = 'f', long)]
    firewall: bool,
}

impl DoArgs {
    fn flags(&self) -> ResourceFlags {
        ResourceFlags {
            vars: self.vars,
            provider: self.provider,
            droplet: self.droplet,
            dns: self.dns,
            firewall: self.firewall,
        }
    }
}

pub fn execute(args: DoArgs, dir: Option<PathBuf>, formatter: Option<String>) -> Result<()> {
    let flags = args.flags();
    let Some(kind) = flags.selected() else {
        anyhow::bail!(
            "Unknown flag given: select one of --vars, --provider, --droplet, --dns, --firewall"
        );
    };
    if flags.count() > 1 {
        warn!("Several generators selected, running {} only", kind);
    }

    let output_dir = match dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to resolve current directory")?,
    };
    let settings = Settings::load(&output_dir)
        .context("Failed to load settings")?
        .with_formatter(formatter);
    info!("Using formatter {}", settings.formatter);

    let formatter = PathFormatter::new(settings.formatter.clone());
    let mut answers = ConsoleAnswers::stdin();

    let report = tfdo_iac::generate(kind, &mut answers, &formatter, &settings)
        .with_context(|| format!("Failed to generate {}", kind))?;

    print_report(&report);
    Ok(())
}

fn print_report(report: &GenerationReport) {
    println!();
    match &report.target {
        Some(target) => println!(
            "✅ Wrote {} block(s) to {}",
            report.blocks_written,
            target.display()
        ),
        None => println!("ℹ️  Nothing to write for {}", report.kind),
    }

    match &report.format {
        FormatOutcome::Formatted { .. } => println!("✅ {}", report.format.summary()),
        FormatOutcome::NotFound { .. } | FormatOutcome::Failed { .. } => {
            println!("⚠️  {}", report.format.summary())
        }
    }
}
