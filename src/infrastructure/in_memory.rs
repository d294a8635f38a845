use crate::domain::ports::{InputSource, OutputSink};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// An input source backed by a string held in memory.
#[derive(Debug, Clone)]
pub struct InMemoryInputSource {
    text: String,
}

impl InMemoryInputSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl InputSource for InMemoryInputSource {
    async fn read_input(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}

/// A thread-safe in-memory output sink.
///
/// Clones share the same buffer, so a caller can hand one clone to the
/// engine and inspect what was written through another. The buffer stays
/// `None` until something is written.
#[derive(Debug, Default, Clone)]
pub struct InMemoryOutputSink {
    buffer: Arc<RwLock<Option<String>>>,
}

impl InMemoryOutputSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last text written, if any.
    pub async fn contents(&self) -> Option<String> {
        self.buffer.read().await.clone()
    }
}

#[async_trait]
impl OutputSink for InMemoryOutputSink {
    async fn write_output(&self, text: &str) -> Result<()> {
        let mut buffer = self.buffer.write().await;
        *buffer = Some(text.to_string());
        Ok(())
    }
}
