//! Generation settings.
//!
//! Defaults can be overridden by an optional `tfdo.yaml` in the output
//! directory, which in turn is overridden by command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use tfdo_runner::DEFAULT_FORMATTER;

use crate::error::{IacError, IacResult};
use crate::kind::ResourceKind;

/// Name of the optional settings file.
pub const CONFIG_FILE: &str = "tfdo.yaml";

/// Target file names per resource kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputFiles {
    pub variables: String,
    pub provider: String,
    pub droplets: String,
    pub dns: String,
}

impl Default for OutputFiles {
    fn default() -> Self {
        Self {
            variables: "variables.tf".to_string(),
            provider: "provider.tf".to_string(),
            droplets: "droplets.tf".to_string(),
            dns: "dns.tf".to_string(),
        }
    }
}

impl OutputFiles {
    pub fn for_kind(&self, kind: ResourceKind) -> Option<&str> {
        match kind {
            ResourceKind::Variables => Some(&self.variables),
            ResourceKind::Provider => Some(&self.provider),
            ResourceKind::Droplet => Some(&self.droplets),
            ResourceKind::Dns => Some(&self.dns),
            ResourceKind::Firewall => None,
        }
    }
}

/// Contents of `tfdo.yaml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsFile {
    pub formatter: Option<String>,
    pub files: OutputFiles,
}

/// Resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub output_dir: PathBuf,
    pub formatter: String,
    pub files: OutputFiles,
}

impl Settings {
    /// Defaults rooted at `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            formatter: DEFAULT_FORMATTER.to_string(),
            files: OutputFiles::default(),
        }
    }

    /// Load settings for `output_dir`, reading `tfdo.yaml` when present.
    pub fn load(output_dir: impl Into<PathBuf>) -> IacResult<Self> {
        let mut settings = Self::new(output_dir);
        let path = settings.output_dir.join(CONFIG_FILE);

        if path.is_file() {
            info!("Loading settings from {:?}", path);
            let file = read_settings_file(&path)?;
            if let Some(formatter) = file.formatter {
                settings.formatter = formatter;
            }
            settings.files = file.files;
        } else {
            debug!("No {} in {:?}, using defaults", CONFIG_FILE, settings.output_dir);
        }

        Ok(settings)
    }

    /// Override the formatter program when `formatter` is set.
    pub fn with_formatter(mut self, formatter: Option<String>) -> Self {
        if let Some(formatter) = formatter {
            self.formatter = formatter;
        }
        self
    }

    /// Full path of the file a kind writes to.
    pub fn target_path(&self, kind: ResourceKind) -> Option<PathBuf> {
        self.files
            .for_kind(kind)
            .map(|name| self.output_dir.join(name))
    }
}

fn read_settings_file(path: &Path) -> IacResult<SettingsFile> {
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(SettingsFile::default());
    }
    serde_yaml::from_str(&content).map_err(|source| IacError::Config {
        path: path.to_path_buf(),
        source,
    })
}
