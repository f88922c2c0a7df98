//! Assistant chat client.
//!
//! One-shot chat completion: a fixed system instruction plus the latest
//! user message, no multi-turn context assembly. The HTTP backend sits
//! behind [`CompletionApi`] so the `ask` command can be tested with stubs.

use crate::config::StudzConfig;
use crate::error::{Result, StudzError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// System instruction sent with every request.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

const REQUEST_TIMEOUT_SECONDS: u64 = 30;

pub trait CompletionApi {
    /// Request a single reply for `user` under the `system` instruction.
    fn complete(&self, system: &str, user: &str) -> Result<String>;
}

/// Chat-completions client over HTTP (OpenAI-compatible wire format).
pub struct OpenAiClient {
    client: reqwest::blocking::Client,
    url: String,
    model: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: String,
}

impl OpenAiClient {
    /// Build a client from config. The API key is read from the
    /// environment variable the config names, never stored on disk.
    pub fn from_config(config: &StudzConfig) -> Result<Self> {
        let api_key = std::env::var(&config.assistant_key_env).map_err(|_| {
            StudzError::Api(format!(
                "Assistant requires the {} environment variable to be set",
                config.assistant_key_env
            ))
        })?;

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECONDS))
            .build()
            .map_err(StudzError::Http)?;

        Ok(Self {
            client,
            url: config.assistant_url.clone(),
            model: config.assistant_model.clone(),
            api_key,
        })
    }
}

impl CompletionApi for OpenAiClient {
    fn complete(&self, system: &str, user: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        let response: ChatResponse = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?
            .error_for_status()?
            .json()?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| StudzError::Api("Assistant returned no choices".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_system_then_user() {
        let request = ChatRequest {
            model: "gpt-4o-mini",
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: "What is normalization?",
                },
            ],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "What is normalization?");
    }

    #[test]
    fn response_parses_first_choice() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"Hi there"}}]}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.choices[0].message.content, "Hi there");
    }
}
