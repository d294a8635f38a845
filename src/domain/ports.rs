use crate::error::Result;
use async_trait::async_trait;

/// Somewhere the raw input text can be read from.
#[async_trait]
pub trait InputSource: Send + Sync {
    async fn read_input(&self) -> Result<String>;
}

/// Somewhere the rendered report can be written to.
#[async_trait]
pub trait OutputSink: Send + Sync {
    async fn write_output(&self, text: &str) -> Result<()>;
}

pub type InputSourceBox = Box<dyn InputSource>;
pub type OutputSinkBox = Box<dyn OutputSink>;
