use std::fmt;

use async_trait::async_trait;
use nc_core::Result;

use super::{ChatModel, ChatSession};

/// Offline model for tests and keyless local runs. Replies echo the first
/// words of the incoming message.
pub struct DummyModel;

impl DummyModel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DummyModel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

#[async_trait]
impl ChatModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn start_chat(&self) -> Result<Box<dyn ChatSession>> {
        Ok(Box::new(DummyChat))
    }
}

struct DummyChat;

#[async_trait]
impl ChatSession for DummyChat {
    async fn send_message(&mut self, text: &str) -> Result<String> {
        let words: Vec<&str> = text.split_whitespace().take(20).collect();
        Ok(words.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dummy_model_echoes_first_words() {
        let model = DummyModel::new();
        let mut chat = model.start_chat().await.unwrap();

        let reply = chat.send_message("What's new in semiconductors?").await.unwrap();
        assert_eq!(reply, "What's new in semiconductors?");

        let long: String = (0..40).map(|i| format!("w{} ", i)).collect();
        let reply = chat.send_message(&long).await.unwrap();
        assert_eq!(reply.split_whitespace().count(), 20);
    }
}
