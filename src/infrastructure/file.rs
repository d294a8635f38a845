use crate::domain::ports::{InputSource, OutputSink};
use crate::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Reads the input text from a file on disk.
///
/// The file is opened and closed within each `read_input` call; nothing is
/// held between calls.
#[derive(Debug, Clone)]
pub struct FileInputSource {
    path: PathBuf,
}

impl FileInputSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl InputSource for FileInputSource {
    async fn read_input(&self) -> Result<String> {
        tracing::debug!(path = %self.path.display(), "reading input");
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}

/// Writes the report to a file on disk, replacing any previous contents.
#[derive(Debug, Clone)]
pub struct FileOutputSink {
    path: PathBuf,
}

impl FileOutputSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl OutputSink for FileOutputSink {
    async fn write_output(&self, text: &str) -> Result<()> {
        tracing::debug!(path = %self.path.display(), "writing output");
        tokio::fs::write(&self.path, text).await?;
        Ok(())
    }
}
