//! Mapping from selected flags to a generator run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use tfdo_runner::{FormatOutcome, Formatter};

use crate::answers::AnswerSource;
use crate::appender::FileAppender;
use crate::error::IacResult;
use crate::generators::{dns, droplet, firewall, provider, variables};
use crate::kind::ResourceKind;
use crate::settings::Settings;

/// Generator selection flags as given on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceFlags {
    pub vars: bool,
    pub provider: bool,
    pub droplet: bool,
    pub dns: bool,
    pub firewall: bool,
}

impl ResourceFlags {
    /// The selected kind; the first set flag in
    /// vars, provider, droplet, dns, firewall order wins.
    pub fn selected(&self) -> Option<ResourceKind> {
        ResourceKind::all()
            .into_iter()
            .find(|kind| self.is_set(*kind))
    }

    pub fn is_set(&self, kind: ResourceKind) -> bool {
        match kind {
            ResourceKind::Variables => self.vars,
            ResourceKind::Provider => self.provider,
            ResourceKind::Droplet => self.droplet,
            ResourceKind::Dns => self.dns,
            ResourceKind::Firewall => self.firewall,
        }
    }

    /// Number of flags set.
    pub fn count(&self) -> usize {
        ResourceKind::all()
            .into_iter()
            .filter(|kind| self.is_set(*kind))
            .count()
    }
}

/// Summary of one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub kind: ResourceKind,
    pub target: Option<PathBuf>,
    pub blocks_written: usize,
    pub format: FormatOutcome,
}

/// Run the generator for `kind`, then format the output directory.
///
/// The target file is created before the first prompt and closed before the
/// formatter runs. Formatter problems are reported in the result, never as
/// an error.
pub fn generate(
    kind: ResourceKind,
    answers: &mut dyn AnswerSource,
    formatter: &dyn Formatter,
    settings: &Settings,
) -> IacResult<GenerationReport> {
    info!("Generating {} into {:?}", kind, settings.output_dir);

    let target = settings.target_path(kind);
    let appender = target.as_ref().map(|path| FileAppender::new(path));

    let blocks_written = match (kind, &appender) {
        (ResourceKind::Firewall, _) | (_, None) => firewall::generate(answers)?,
        (ResourceKind::Variables, Some(appender)) => {
            appender.ensure_exists()?;
            variables::generate(answers, appender)?
        }
        (ResourceKind::Provider, Some(appender)) => {
            appender.ensure_exists()?;
            provider::generate(answers, appender)?
        }
        (ResourceKind::Droplet, Some(appender)) => {
            appender.ensure_exists()?;
            droplet::generate(answers, appender)?
        }
        (ResourceKind::Dns, Some(appender)) => {
            appender.ensure_exists()?;
            dns::generate(answers, appender)?
        }
    };

    let format = formatter.format(&settings.output_dir);

    Ok(GenerationReport {
        kind,
        target,
        blocks_written,
        format,
    })
}
