use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use nc_core::{Error, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{ChatModel, ChatSession};
use crate::Config;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.0-flash-001";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// Fixed generation parameters for every session.
const TEMPERATURE: f32 = 0.7;
const MAX_OUTPUT_TOKENS: u32 = 1024;

#[derive(Serialize, Deserialize, Debug, Clone)]
struct Content {
    role: String,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: &'a [Content],
    generation_config: GenerationConfig,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

/// Client for the Generative Language `generateContent` API.
pub struct GeminiModel {
    client: Client,
    api_key: String,
    model_id: String,
    base_url: String,
}

impl fmt::Debug for GeminiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiModel")
            .field("api_key", &"<redacted>")
            .field("model_id", &self.model_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GeminiModel {
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::Inference("Gemini API key is required".to_string()))?;

        let client = Client::builder()
            .timeout(config.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()?;

        Ok(Self {
            client,
            api_key,
            model_id: config
                .model_id
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: BASE_URL.to_string(),
        })
    }
}

#[async_trait]
impl ChatModel for GeminiModel {
    fn name(&self) -> &str {
        "Gemini"
    }

    async fn start_chat(&self) -> Result<Box<dyn ChatSession>> {
        Ok(Box::new(GeminiChat {
            client: self.client.clone(),
            url: format!(
                "{}/models/{}:generateContent?key={}",
                self.base_url, self.model_id, self.api_key
            ),
            history: Vec::new(),
        }))
    }
}

struct GeminiChat {
    client: Client,
    url: String,
    history: Vec<Content>,
}

#[async_trait]
impl ChatSession for GeminiChat {
    async fn send_message(&mut self, text: &str) -> Result<String> {
        self.history.push(Content {
            role: "user".to_string(),
            parts: vec![Part {
                text: text.to_string(),
            }],
        });

        let request = GenerateContentRequest {
            contents: &self.history,
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<GenerateContentResponse>()
            .await?;

        let content = response
            .candidates
            .into_iter()
            .next()
            .map(|candidate| candidate.content)
            .ok_or_else(|| Error::Inference("Gemini returned no candidates".to_string()))?;

        let reply: String = content
            .parts
            .iter()
            .map(|part| part.text.as_str())
            .collect();
        self.history.push(content);
        Ok(reply)
    }
}
