//! Minimal HCL block builder.
//!
//! Blocks are rendered one entry per line with no indentation; the external
//! formatter canonicalises layout afterwards.

use std::fmt;

/// Right-hand side of an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Quoted string; backslashes and quotes are escaped.
    Literal(String),
    /// Raw expression such as `var.name` or `data.x.y.id`.
    Expression(String),
    /// Quoted template, written without escaping (`"${x}."`).
    Template(String),
    /// Raw number as typed by the operator; not validated.
    Number(String),
    List(Vec<Value>),
    Object(Vec<(String, Value)>),
}

impl Value {
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    pub fn expr(value: impl Into<String>) -> Self {
        Self::Expression(value.into())
    }

    /// Expression when `answer` contains `marker`, quoted literal otherwise.
    ///
    /// This is a plain substring test: a literal that happens to contain the
    /// marker is emitted unquoted.
    pub fn reference_or_literal(answer: &str, marker: &str) -> Self {
        if answer.contains(marker) {
            Self::Expression(answer.to_string())
        } else {
            Self::Literal(answer.to_string())
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Literal(s) => write!(f, "\"{}\"", escape(s)),
            Value::Expression(s) | Value::Number(s) => f.write_str(s),
            Value::Template(s) => write!(f, "\"{}\"", s),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Object(entries) => {
                f.write_str("{\n")?;
                for (key, value) in entries {
                    writeln!(f, "{} = {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// A single line (or nested block) inside a block body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Attribute(String, Value),
    Block(Block),
}

/// A labelled HCL block such as `resource "type" "name" { ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    kind: String,
    labels: Vec<String>,
    body: Vec<Entry>,
}

impl Block {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            labels: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: Value) -> Self {
        self.body.push(Entry::Attribute(key.into(), value));
        self
    }

    /// Add an attribute only when `value` is `Some`.
    pub fn attr_opt(self, key: impl Into<String>, value: Option<Value>) -> Self {
        match value {
            Some(value) => self.attr(key, value),
            None => self,
        }
    }

    pub fn block(mut self, block: Block) -> Self {
        self.body.push(Entry::Block(block));
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Look up a top-level attribute by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.body.iter().find_map(|entry| match entry {
            Entry::Attribute(k, v) if k == key => Some(v),
            _ => None,
        })
    }

    /// Render the block followed by a newline.
    pub fn render(&self) -> String {
        format!("{}\n", self)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.kind)?;
        for label in &self.labels {
            write!(f, " \"{}\"", escape(label))?;
        }
        if self.body.is_empty() {
            return f.write_str(" {}");
        }
        f.write_str(" {\n")?;
        for entry in &self.body {
            match entry {
                Entry::Attribute(key, value) => writeln!(f, "{} = {}", key, value)?,
                Entry::Block(block) => writeln!(f, "{}", block)?,
            }
        }
        f.write_str("}")
    }
}

/// Render a sequence of blocks back to back.
pub fn render_all(blocks: &[Block]) -> String {
    blocks.iter().map(Block::render).collect()
}
