use std::time::Duration;

pub mod assistant;
pub mod models;

pub use assistant::{ChatService, NewsAssistant};
pub use models::{create_model, ChatModel, ChatSession};

/// Model construction options.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api_key: Option<String>,
    /// Which model implementation to use ("gemini" or "dummy").
    pub model_name: Option<String>,
    /// Provider-side model id override.
    pub model_id: Option<String>,
    /// Timeout applied to every provider call.
    pub timeout: Option<Duration>,
}

pub mod prelude {
    pub use crate::models::{create_model, ChatModel, ChatSession};
    pub use crate::{ChatService, Config, NewsAssistant};
    pub use nc_core::{Error, Result};
}
