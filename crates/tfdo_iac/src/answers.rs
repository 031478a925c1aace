//! Sources of operator answers.
//!
//! Generators never touch the console directly; they ask an [`AnswerSource`]
//! for each value. Production code reads standard input, tests feed canned
//! answers through [`ScriptedAnswers`].

use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, StdinLock, Stdout, Write};

use dialoguer::{Error as DialoguerError, Input};
use tracing::debug;

use crate::error::{IacError, IacResult};

/// Something that answers prompts one line at a time.
pub trait AnswerSource {
    /// Ask `prompt` and return the answer with surrounding whitespace removed.
    fn ask(&mut self, prompt: &str) -> IacResult<String>;
}

/// Answers read line by line from a reader, prompts written to a writer.
///
/// When both ends are a terminal, prompts go through an interactive line
/// editor instead.
pub struct ConsoleAnswers<R, W> {
    reader: R,
    writer: W,
    interactive: bool,
}

impl ConsoleAnswers<StdinLock<'static>, Stdout> {
    /// Answers from the process standard input.
    pub fn stdin() -> Self {
        let interactive = io::stdin().is_terminal() && io::stdout().is_terminal();
        Self {
            reader: io::stdin().lock(),
            writer: io::stdout(),
            interactive,
        }
    }
}

impl<R: BufRead, W: Write> ConsoleAnswers<R, W> {
    /// Plain line-based answers from `reader`.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            interactive: false,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn ask_interactive(&mut self, prompt: &str) -> IacResult<String> {
        match Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
        {
            Ok(value) => Ok(value.trim().to_string()),
            Err(DialoguerError::IO(err)) if err.kind() == io::ErrorKind::Interrupted => {
                Err(IacError::InputClosed(prompt.to_string()))
            }
            Err(err) => Err(IacError::Prompt(err.to_string())),
        }
    }

    fn ask_line(&mut self, prompt: &str) -> IacResult<String> {
        write!(self.writer, "{}: ", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(IacError::InputClosed(prompt.to_string()));
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> AnswerSource for ConsoleAnswers<R, W> {
    fn ask(&mut self, prompt: &str) -> IacResult<String> {
        let answer = if self.interactive {
            self.ask_interactive(prompt)?
        } else {
            self.ask_line(prompt)?
        };
        debug!("Answer received for prompt {:?}", prompt);
        Ok(answer)
    }
}

/// Canned answers for tests and scripted runs.
#[derive(Debug, Default, Clone)]
pub struct ScriptedAnswers {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedAnswers {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Prompts asked so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Number of answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl AnswerSource for ScriptedAnswers {
    fn ask(&mut self, prompt: &str) -> IacResult<String> {
        self.asked.push(prompt.to_string());
        self.answers
            .pop_front()
            .map(|answer| answer.trim().to_string())
            .ok_or_else(|| IacError::InputClosed(prompt.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_console_reads_lines_and_writes_prompts() {
        let input = Cursor::new("host1\n  1.2.3.4  \n");
        let mut answers = ConsoleAnswers::new(input, Vec::new());

        assert_eq!(answers.ask("Variable name").unwrap(), "host1");
        assert_eq!(answers.ask("Value").unwrap(), "1.2.3.4");

        let output = String::from_utf8(answers.into_writer()).unwrap();
        assert_eq!(output, "Variable name: Value: ");
    }

    #[test]
    fn test_console_blank_line_is_empty_answer() {
        let mut answers = ConsoleAnswers::new(Cursor::new("\n"), Vec::new());
        assert_eq!(answers.ask("Size").unwrap(), "");
    }

    #[test]
    fn test_console_eof_is_input_closed() {
        let mut answers = ConsoleAnswers::new(Cursor::new(""), Vec::new());
        match answers.ask("Region") {
            Err(IacError::InputClosed(prompt)) => assert_eq!(prompt, "Region"),
            other => panic!("expected InputClosed, got {:?}", other),
        }
    }

    #[test]
    fn test_scripted_records_prompts() {
        let mut answers = ScriptedAnswers::new(["a", " b "]);
        assert_eq!(answers.ask("first").unwrap(), "a");
        assert_eq!(answers.ask("second").unwrap(), "b");
        assert_eq!(answers.asked(), &["first".to_string(), "second".to_string()]);
        assert_eq!(answers.remaining(), 0);
        assert!(matches!(answers.ask("third"), Err(IacError::InputClosed(_))));
    }
}
