use std::sync::Arc;

use async_trait::async_trait;
use nc_core::Result;
use nc_context::ContextStore;
use tracing::error;

use crate::models::ChatModel;

const PERSONA: &str = "You are MyNews Assistant, an expert on semiconductor and technology news. \
You help users by answering questions about current events, feature articles, and topics covered on MyNews.";

/// The chat surface the web layer talks to.
#[async_trait]
pub trait ChatService: Send + Sync {
    async fn respond(&self, message: &str) -> Result<String>;
}

/// Relays a user message, context-first, to the configured chat model.
pub struct NewsAssistant {
    model: Arc<dyn ChatModel>,
    context: ContextStore,
}

impl NewsAssistant {
    pub fn new(model: Arc<dyn ChatModel>, context: ContextStore) -> Self {
        Self { model, context }
    }

    fn preamble(&self) -> String {
        format!(
            "{}\n\nHere is some context about recent articles on the website:\n{}",
            PERSONA,
            self.context.snapshot()
        )
    }

    // The session has no dedicated system role, so the preamble goes out as
    // an ordinary first turn and rides along as history on the second call.
    async fn relay(&self, message: &str) -> Result<String> {
        let mut chat = self.model.start_chat().await?;
        chat.send_message(&self.preamble()).await?;
        chat.send_message(message).await
    }
}

#[async_trait]
impl ChatService for NewsAssistant {
    async fn respond(&self, message: &str) -> Result<String> {
        match self.relay(message).await {
            Ok(reply) => Ok(reply),
            Err(e) => {
                error!("Error calling Gemini API: {}", e);
                Ok(format!("Error calling Gemini API: {}", e))
            }
        }
    }
}
