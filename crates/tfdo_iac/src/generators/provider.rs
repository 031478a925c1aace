//! DigitalOcean provider configuration.

use tracing::{info, warn};

use crate::answers::AnswerSource;
use crate::appender::FileAppender;
use crate::error::IacResult;
use crate::hcl::{Block, Value};

pub const PROVIDER_NAME: &str = "digitalocean";
pub const PROVIDER_SOURCE: &str = "digitalocean/digitalocean";
pub const PROVIDER_VERSION: &str = "2.3.0";

/// Variable holding the API token.
pub const API_KEY_VARIABLE: &str = "apikey";

/// Data source used to look up registered SSH keys.
pub const SSH_KEY_DATA_SOURCE: &str = "digitalocean_ssh_key";

const API_KEY_PROMPT: &str =
    "API key (leave blank to have Terraform prompt for it at apply time)";
const SSH_KEY_PROMPT: &str = "Name of the SSH key registered with DigitalOcean";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRecord {
    pub required_source: String,
    pub required_version: String,
    pub api_key: Option<String>,
    pub ssh_key_name: String,
}

impl ProviderRecord {
    pub fn new(api_key: Option<String>, ssh_key_name: impl Into<String>) -> Self {
        Self {
            required_source: PROVIDER_SOURCE.to_string(),
            required_version: PROVIDER_VERSION.to_string(),
            api_key,
            ssh_key_name: ssh_key_name.into(),
        }
    }

    pub fn to_blocks(&self) -> Vec<Block> {
        let required = Block::new("terraform").block(Block::new("required_providers").attr(
            PROVIDER_NAME,
            Value::Object(vec![
                ("source".to_string(), Value::literal(&self.required_source)),
                ("version".to_string(), Value::literal(&self.required_version)),
            ]),
        ));

        let api_key = Block::new("variable")
            .label(API_KEY_VARIABLE)
            .attr_opt("default", self.api_key.as_deref().map(|key| Value::literal(key)));

        let provider = Block::new("provider")
            .label(PROVIDER_NAME)
            .attr("token", Value::expr(format!("var.{}", API_KEY_VARIABLE)));

        let mut blocks = vec![required, api_key, provider];

        if !self.ssh_key_name.is_empty() {
            blocks.push(
                Block::new("data")
                    .label(SSH_KEY_DATA_SOURCE)
                    .label(&self.ssh_key_name)
                    .attr("name", Value::literal(&self.ssh_key_name)),
            );
        }

        blocks
    }
}

/// Ask for the provider credentials and append the provider blocks.
pub fn generate(answers: &mut dyn AnswerSource, appender: &FileAppender) -> IacResult<usize> {
    let api_key = answers.ask(API_KEY_PROMPT)?;
    let api_key = if api_key.is_empty() {
        None
    } else {
        warn!(
            "API key will be stored in plain text in {:?}",
            appender.path()
        );
        Some(api_key)
    };

    let ssh_key_name = answers.ask(SSH_KEY_PROMPT)?;
    if ssh_key_name.is_empty() {
        warn!("No SSH key name given, skipping SSH key lookup");
    }

    let record = ProviderRecord::new(api_key, ssh_key_name);
    let written = appender.append_blocks(&record.to_blocks())?;
    info!("Declared {} provider {}", PROVIDER_NAME, record.required_version);
    Ok(written)
}
