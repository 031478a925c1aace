//! Droplet (compute instance) resources.

use tracing::info;

use crate::answers::AnswerSource;
use crate::appender::FileAppender;
use crate::error::IacResult;
use crate::generators::provider::SSH_KEY_DATA_SOURCE;
use crate::generators::VARIABLE_MARKER;
use crate::hcl::{Block, Value};

pub const RESOURCE_TYPE: &str = "digitalocean_droplet";

/// Size slug used when the size answer is blank.
pub const DEFAULT_SIZE: &str = "s-1vcpu-1gb";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropletRecord {
    pub resource_name: String,
    pub image: String,
    pub hostname: String,
    pub region: String,
    pub size: String,
    pub ssh_key_name: String,
}

impl DropletRecord {
    /// Collect the droplet answers in prompt order.
    pub fn ask(answers: &mut dyn AnswerSource) -> IacResult<Self> {
        let resource_name = answers.ask("Resource name")?;
        let image = answers.ask("Image (e.g. ubuntu-20-04-x64)")?;
        let hostname = answers.ask("Hostname (literal or var.<name>)")?;
        let region = answers.ask("Region (e.g. nyc3)")?;
        let size = answers.ask(&format!("Size (blank for {})", DEFAULT_SIZE))?;
        let ssh_key_name = answers.ask("SSH key name declared in the provider")?;

        Ok(Self {
            resource_name,
            image,
            hostname,
            region,
            size: if size.is_empty() {
                DEFAULT_SIZE.to_string()
            } else {
                size
            },
            ssh_key_name,
        })
    }

    pub fn to_block(&self) -> Block {
        Block::new("resource")
            .label(RESOURCE_TYPE)
            .label(&self.resource_name)
            .attr("image", Value::literal(&self.image))
            .attr(
                "name",
                Value::reference_or_literal(&self.hostname, VARIABLE_MARKER),
            )
            .attr("region", Value::literal(&self.region))
            .attr("size", Value::literal(&self.size))
            .attr(
                "ssh_keys",
                Value::List(vec![Value::expr(format!(
                    "data.{}.{}.id",
                    SSH_KEY_DATA_SOURCE, self.ssh_key_name
                ))]),
            )
    }
}

/// Ask for one droplet and append its resource block.
pub fn generate(answers: &mut dyn AnswerSource, appender: &FileAppender) -> IacResult<usize> {
    let record = DropletRecord::ask(answers)?;
    let written = appender.append_blocks(&[record.to_block()])?;
    info!("Declared droplet {}", record.resource_name);
    Ok(written)
}
