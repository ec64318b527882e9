use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use nc_core::{Error, Result};

use crate::Config;

pub mod dummy;
pub mod gemini;

pub use dummy::DummyModel;
pub use gemini::GeminiModel;

/// A chat-capable language model. One session is opened per inbound
/// request; sessions are never reused across requests.
#[async_trait]
pub trait ChatModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    async fn start_chat(&self) -> Result<Box<dyn ChatSession>>;
}

/// A single conversation. Every send submits the full history so far and
/// appends the model's reply to it, so turns stay strictly ordered.
#[async_trait]
pub trait ChatSession: Send {
    async fn send_message(&mut self, text: &str) -> Result<String>;
}

/// Create a model from configuration. Defaults to Gemini.
pub fn create_model(config: Option<Config>) -> Result<Arc<dyn ChatModel>> {
    let config = config.unwrap_or_default();
    match config.model_name.as_deref().unwrap_or("gemini") {
        "gemini" => Ok(Arc::new(GeminiModel::new(&config)?)),
        "dummy" => Ok(Arc::new(DummyModel::new())),
        other => Err(Error::Inference(format!("Unknown model: {}", other))),
    }
}
