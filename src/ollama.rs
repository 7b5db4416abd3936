use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::error::InferenceError;

/// Capability to run one chat exchange against a language model.
///
/// Every call sends exactly one system message and one user message and
/// yields the text of the assistant reply. `Ok(None)` means the engine
/// answered but the reply carried no text value.
#[async_trait]
pub trait LanguageInferenceClient: Send + Sync {
    async fn chat(
        &self,
        model: &str,
        system: &str,
        user: &str,
    ) -> Result<Option<String>, InferenceError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    message: Option<ResponseMessage>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    // Kept loose so a null or non-string content is reported as "no text"
    #[serde(default)]
    content: serde_json::Value,
}

impl ChatResponse {
    fn into_text(self) -> Result<Option<String>, InferenceError> {
        if let Some(error) = self.error {
            return Err(InferenceError::Model(error));
        }

        Ok(self.message.and_then(|m| match m.content {
            serde_json::Value::String(text) => Some(text),
            _ => None,
        }))
    }
}

/// HTTP client for an Ollama server's `/api/chat` endpoint
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: reqwest::Client,
    chat_url: String,
}

impl OllamaClient {
    pub fn new(config: &Config) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Use a preconfigured `reqwest::Client` (timeouts, proxies, TLS roots)
    pub fn with_http_client(config: &Config, http: reqwest::Client) -> Self {
        Self {
            http,
            chat_url: config.chat_url(),
        }
    }

    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }
}

#[async_trait]
impl LanguageInferenceClient for OllamaClient {
    async fn chat(
        &self,
        model: &str,
        system: &str,
        user: &str,
    ) -> Result<Option<String>, InferenceError> {
        let request = ChatRequest {
            model,
            messages: vec![
                Message {
                    role: "system",
                    content: system,
                },
                Message {
                    role: "user",
                    content: user,
                },
            ],
            stream: false,
        };

        debug!("POST {} (model {})", self.chat_url, model);

        let response = self.http.post(&self.chat_url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(InferenceError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let chat_response: ChatResponse =
            serde_json::from_str(&body).map_err(|e| InferenceError::Decode(e.to_string()))?;

        chat_response.into_text()
    }
}
