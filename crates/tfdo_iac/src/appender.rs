//! Append-only writer for generated Terraform files.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IacError, IacResult};
use crate::hcl::Block;

/// Appends text to a single target file, creating it on first use.
///
/// The file is opened for each append and closed before the call returns;
/// existing content is never truncated. Concurrent writers to the same file
/// are not coordinated.
#[derive(Debug, Clone)]
pub struct FileAppender {
    path: PathBuf,
}

impl FileAppender {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file if it does not exist yet, leaving content untouched.
    pub fn ensure_exists(&self) -> IacResult<()> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.write_error(source))?;
        Ok(())
    }

    /// Append a raw text fragment.
    pub fn append(&self, text: &str) -> IacResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.write_error(source))?;

        file.write_all(text.as_bytes())
            .map_err(|source| self.write_error(source))?;

        debug!("Appended {} bytes to {:?}", text.len(), self.path);
        Ok(())
    }

    /// Append rendered blocks in order.
    pub fn append_blocks(&self, blocks: &[Block]) -> IacResult<usize> {
        if blocks.is_empty() {
            return Ok(0);
        }
        self.append(&crate::hcl::render_all(blocks))?;
        Ok(blocks.len())
    }

    fn write_error(&self, source: std::io::Error) -> IacError {
        IacError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hcl::Value;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_append_creates_then_grows() {
        let dir = tempdir().unwrap();
        let appender = FileAppender::new(dir.path().join("variables.tf"));

        appender.append("a\n").unwrap();
        let first = fs::read_to_string(appender.path()).unwrap();
        appender.append("b\n").unwrap();
        let second = fs::read_to_string(appender.path()).unwrap();

        assert_eq!(first, "a\n");
        assert_eq!(second, "a\nb\n");
    }

    #[test]
    fn test_ensure_exists_keeps_content() {
        let dir = tempdir().unwrap();
        let appender = FileAppender::new(dir.path().join("droplets.tf"));

        appender.ensure_exists().unwrap();
        assert_eq!(fs::read_to_string(appender.path()).unwrap(), "");

        appender.append("x\n").unwrap();
        appender.ensure_exists().unwrap();
        assert_eq!(fs::read_to_string(appender.path()).unwrap(), "x\n");
    }

    #[test]
    fn test_append_blocks_counts() {
        let dir = tempdir().unwrap();
        let appender = FileAppender::new(dir.path().join("dns.tf"));

        let blocks = vec![
            Block::new("variable").label("a"),
            Block::new("variable").label("b").attr("default", Value::literal("x")),
        ];
        assert_eq!(appender.append_blocks(&blocks).unwrap(), 2);
        assert_eq!(appender.append_blocks(&[]).unwrap(), 0);

        let content = fs::read_to_string(appender.path()).unwrap();
        assert_eq!(content, "variable \"a\" {}\nvariable \"b\" {\ndefault = \"x\"\n}\n");
    }

    #[test]
    fn test_append_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let appender = FileAppender::new(dir.path().join("nope").join("provider.tf"));

        let err = appender.append("x").unwrap_err();
        assert!(matches!(err, IacError::Write { .. }));
        assert!(err.to_string().contains("provider.tf"));
    }
}
