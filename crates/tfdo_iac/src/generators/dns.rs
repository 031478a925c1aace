//! DNS record resources.

use tracing::info;

use crate::answers::AnswerSource;
use crate::appender::FileAppender;
use crate::error::IacResult;
use crate::generators::{DROPLET_MARKER, VARIABLE_MARKER};
use crate::hcl::{Block, Value};

pub const RESOURCE_TYPE: &str = "digitalocean_record";

/// TTL used when the TTL answer is blank.
pub const DEFAULT_TTL: &str = "600";

/// Priority always attached to MX records.
pub const MX_PRIORITY: &str = "10";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub resource_name: String,
    pub domain: String,
    pub record_type: String,
    pub hostname: String,
    pub value: String,
    pub ttl: String,
}

impl DnsRecord {
    /// Collect the record answers in prompt order.
    pub fn ask(answers: &mut dyn AnswerSource) -> IacResult<Self> {
        let resource_name = answers.ask("Resource name")?;
        let domain = answers.ask("Domain (literal or var.<name>)")?;
        let record_type = answers.ask("Record type (A, AAAA, CNAME, MX, TXT, ...)")?;
        let hostname = answers.ask("Hostname (e.g. www or @)")?;
        let value = answers.ask("Value")?;
        let ttl = answers.ask(&format!("TTL in seconds (blank for {})", DEFAULT_TTL))?;

        Ok(Self {
            resource_name,
            domain,
            record_type,
            hostname,
            value,
            ttl: if ttl.is_empty() {
                DEFAULT_TTL.to_string()
            } else {
                ttl
            },
        })
    }

    pub fn is_mx(&self) -> bool {
        self.record_type == "MX"
    }

    /// Value expression for the record.
    ///
    /// CNAME and MX targets become fully qualified interpolations; droplet
    /// attribute references stay unquoted.
    pub fn value_expr(&self) -> Value {
        if self.record_type == "CNAME" || self.is_mx() {
            Value::Template(format!("${{{}}}.", self.value))
        } else {
            Value::reference_or_literal(&self.value, DROPLET_MARKER)
        }
    }

    /// Always `10` for MX records, absent otherwise.
    pub fn priority(&self) -> Option<Value> {
        self.is_mx()
            .then(|| Value::Number(MX_PRIORITY.to_string()))
    }

    pub fn to_block(&self) -> Block {
        Block::new("resource")
            .label(RESOURCE_TYPE)
            .label(&self.resource_name)
            .attr(
                "domain",
                Value::reference_or_literal(&self.domain, VARIABLE_MARKER),
            )
            .attr("type", Value::literal(&self.record_type))
            .attr("name", Value::literal(&self.hostname))
            .attr("value", self.value_expr())
            .attr_opt("priority", self.priority())
            .attr("ttl", Value::Number(self.ttl.clone()))
    }
}

/// Ask for one DNS record and append its resource block.
pub fn generate(answers: &mut dyn AnswerSource, appender: &FileAppender) -> IacResult<usize> {
    let record = DnsRecord::ask(answers)?;
    let written = appender.append_blocks(&[record.to_block()])?;
    info!(
        "Declared {} record {}",
        record.record_type, record.resource_name
    );
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::ScriptedAnswers;
    use std::fs;
    use tempfile::tempdir;

    fn render(answers: [&str; 6]) -> String {
        let mut answers = ScriptedAnswers::new(answers);
        DnsRecord::ask(&mut answers).unwrap().to_block().render()
    }

    #[test]
    fn test_mx_record() {
        let block = render(["mail", "example.com", "MX", "@", "mail.example.com", ""]);
        assert!(block.contains("value = \"${mail.example.com}.\"\n"));
        assert!(block.contains("priority = 10\n"));
        assert!(block.contains("ttl = 600\n"));
    }

    #[test]
    fn test_cname_record_has_no_priority() {
        let block = render(["www", "example.com", "CNAME", "www", "web.example.com", "300"]);
        assert!(block.contains("value = \"${web.example.com}.\"\n"));
        assert!(!block.contains("priority"));
        assert!(block.contains("ttl = 300\n"));
    }

    #[test]
    fn test_droplet_reference_is_unquoted() {
        let block = render([
            "web",
            "example.com",
            "A",
            "@",
            "digitalocean_droplet.web.ipv4_address",
            "",
        ]);
        assert!(block.contains("value = digitalocean_droplet.web.ipv4_address\n"));
    }

    #[test]
    fn test_plain_value_is_quoted() {
        let block = render(["txt", "example.com", "TXT", "@", "v=spf1 -all", ""]);
        assert!(block.contains("value = \"v=spf1 -all\"\n"));
    }

    #[test]
    fn test_domain_variable_reference() {
        let block = render(["web", "var.domain", "A", "@", "1.2.3.4", ""]);
        assert!(block.contains("domain = var.domain\n"));

        let block = render(["web", "example.com", "A", "@", "1.2.3.4", ""]);
        assert!(block.contains("domain = \"example.com\"\n"));
    }

    #[test]
    fn test_record_type_match_is_exact() {
        let block = render(["mail", "example.com", "mx", "@", "mail.example.com", ""]);
        assert!(!block.contains("priority"));
        assert!(block.contains("value = \"mail.example.com\"\n"));
    }

    #[test]
    fn test_ttl_is_not_validated() {
        let block = render(["web", "example.com", "A", "@", "1.2.3.4", "soon"]);
        assert!(block.contains("ttl = soon\n"));
    }

    #[test]
    fn test_full_mx_block() {
        let dir = tempdir().unwrap();
        let appender = FileAppender::new(dir.path().join("dns.tf"));
        let mut answers =
            ScriptedAnswers::new(["mail", "example.com", "MX", "@", "mail.example.com", ""]);

        assert_eq!(generate(&mut answers, &appender).unwrap(), 1);
        assert_eq!(
            fs::read_to_string(appender.path()).unwrap(),
            "resource \"digitalocean_record\" \"mail\" {\n\
             domain = \"example.com\"\n\
             type = \"MX\"\n\
             name = \"@\"\n\
             value = \"${mail.example.com}.\"\n\
             priority = 10\n\
             ttl = 600\n\
             }\n"
        );
    }
}
