//! Variable declarations.

use tracing::info;

use crate::answers::AnswerSource;
use crate::appender::FileAppender;
use crate::error::IacResult;
use crate::hcl::{Block, Value};

/// Answer that ends the variable loop.
pub const QUIT_SENTINEL: &str = "quit";

const NAME_PROMPT: &str = "Variable name (enter 'quit' to finish)";
const VALUE_PROMPT: &str = "Default value";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableRecord {
    pub name: String,
    pub default_value: String,
}

impl VariableRecord {
    pub fn to_block(&self) -> Block {
        Block::new("variable")
            .label(&self.name)
            .attr("default", Value::literal(&self.default_value))
    }
}

/// Ask for variables until the sentinel is entered, appending each one as it
/// is completed. Returns the number of blocks written.
pub fn generate(answers: &mut dyn AnswerSource, appender: &FileAppender) -> IacResult<usize> {
    let mut written = 0;

    loop {
        let name = answers.ask(NAME_PROMPT)?;
        if name == QUIT_SENTINEL {
            break;
        }
        let default_value = answers.ask(VALUE_PROMPT)?;

        let record = VariableRecord {
            name,
            default_value,
        };
        written += appender.append_blocks(&[record.to_block()])?;
        info!("Declared variable {}", record.name);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::ScriptedAnswers;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_single_variable_then_quit() {
        let dir = tempdir().unwrap();
        let appender = FileAppender::new(dir.path().join("variables.tf"));
        let mut answers = ScriptedAnswers::new(["host1", "1.2.3.4", "quit", ""]);

        assert_eq!(generate(&mut answers, &appender).unwrap(), 1);
        assert_eq!(
            fs::read_to_string(appender.path()).unwrap(),
            "variable \"host1\" {\ndefault = \"1.2.3.4\"\n}\n"
        );
        // The value after `quit` is never asked for.
        assert_eq!(answers.remaining(), 1);
    }

    #[test]
    fn test_quit_first_writes_nothing() {
        let dir = tempdir().unwrap();
        let appender = FileAppender::new(dir.path().join("variables.tf"));
        let mut answers = ScriptedAnswers::new(["quit"]);

        assert_eq!(generate(&mut answers, &appender).unwrap(), 0);
        assert!(!appender.path().exists());
    }

    #[test]
    fn test_variables_kept_in_entry_order() {
        let dir = tempdir().unwrap();
        let appender = FileAppender::new(dir.path().join("variables.tf"));
        let mut answers = ScriptedAnswers::new(["b", "2", "a", "1", "quit"]);

        assert_eq!(generate(&mut answers, &appender).unwrap(), 2);
        let content = fs::read_to_string(appender.path()).unwrap();
        let b = content.find("variable \"b\"").unwrap();
        let a = content.find("variable \"a\"").unwrap();
        assert!(b < a);
    }

    #[test]
    fn test_closed_input_keeps_completed_variables() {
        let dir = tempdir().unwrap();
        let appender = FileAppender::new(dir.path().join("variables.tf"));
        let mut answers = ScriptedAnswers::new(["region", "nyc3", "size"]);

        assert!(generate(&mut answers, &appender).is_err());
        let content = fs::read_to_string(appender.path()).unwrap();
        assert_eq!(content, "variable \"region\" {\ndefault = \"nyc3\"\n}\n");
    }
}
