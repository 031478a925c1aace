//! Resource kinds handled by the generators.

use serde::{Deserialize, Serialize};

/// The kind of Terraform content a generator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Variables,
    Provider,
    Droplet,
    Dns,
    Firewall,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Variables => "variables",
            ResourceKind::Provider => "provider",
            ResourceKind::Droplet => "droplet",
            ResourceKind::Dns => "dns",
            ResourceKind::Firewall => "firewall",
        }
    }

    /// Dispatch order used when several kinds are selected at once.
    pub fn all() -> [Self; 5] {
        [
            ResourceKind::Variables,
            ResourceKind::Provider,
            ResourceKind::Droplet,
            ResourceKind::Dns,
            ResourceKind::Firewall,
        ]
    }

    /// Default target file, `None` for kinds that write nothing.
    pub fn default_file_name(&self) -> Option<&'static str> {
        match self {
            ResourceKind::Variables => Some("variables.tf"),
            ResourceKind::Provider => Some("provider.tf"),
            ResourceKind::Droplet => Some("droplets.tf"),
            ResourceKind::Dns => Some("dns.tf"),
            ResourceKind::Firewall => None,
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
