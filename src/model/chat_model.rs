use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::model::ReviewError;

pub const DEFAULT_MODEL: &str = "gpt-4-turbo";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Seam for the external inference service.
///
/// The review pipeline only needs one operation: send a system message and a
/// prompt, get the reply text back. Tests substitute canned replies here.
pub trait CompletionModel {
    fn complete(&self, system: &str, prompt: &str) -> Result<String>;
}

#[derive(Debug, Clone)]
pub struct ChatModelConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    /// Stays at 0.0 so repeated runs judge the same sheet the same way.
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl ChatModelConfig {
    pub fn new(api_key: String) -> Self {
        ChatModelConfig {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.0,
            timeout_secs: 120,
        }
    }
}

/// Blocking client for the OpenAI chat-completions API.
///
/// No retry loop: a failed call surfaces immediately and becomes that
/// row's review outcome.
pub struct OpenAiChatClient {
    client: Client,
    config: ChatModelConfig,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: String,
}

impl OpenAiChatClient {
    pub fn new(config: ChatModelConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(OpenAiChatClient { client, config })
    }
}

impl CompletionModel for OpenAiChatClient {
    fn complete(&self, system: &str, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: self.config.temperature,
        };

        let url = format!("{}/v1/chat/completions", self.config.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text()?;
            return Err(ReviewError::ChatApi {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let reply: ChatResponse = response.json()?;
        let content = reply
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(ReviewError::EmptyReply)?;

        Ok(content)
    }
}
