//! Ollama backend implementation
//!
//! HTTP client for the Ollama chat API. One non-streaming request per advice
//! call; no retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};

use super::payload::AdvicePayload;
use super::prompt::{render_user, SYSTEM_PROMPT};
use super::AdviceBackend;

/// Default Ollama server URL
pub const DEFAULT_OLLAMA_HOST: &str = "http://localhost:11434";

/// Default chat model
pub const DEFAULT_MODEL: &str = "llama3.1:8b";

/// Timeout for a full advice generation
pub const GENERATE_TIMEOUT: Duration = Duration::from_secs(180);

/// Timeout for the availability probe
pub const HEALTH_TIMEOUT: Duration = Duration::from_millis(1500);

/// Ollama backend
#[derive(Clone)]
pub struct OllamaBackend {
    http_client: Client,
    base_url: String,
    model: String,
}

impl OllamaBackend {
    /// Create a new Ollama backend
    pub fn new(base_url: &str, model: &str) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }

    /// Create a new instance with a different model
    pub fn with_model(&self, model: &str) -> Self {
        Self {
            http_client: self.http_client.clone(),
            base_url: self.base_url.clone(),
            model: model.to_string(),
        }
    }

    /// Create from `OLLAMA_HOST` / `OLLAMA_MODEL`, defaulting to a local server
    pub fn from_env() -> Self {
        let host = std::env::var("OLLAMA_HOST").unwrap_or_else(|_| DEFAULT_OLLAMA_HOST.to_string());
        let model = std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(&host, &model)
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Request to the Ollama chat API
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

/// Response from the Ollama chat API
#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[async_trait]
impl AdviceBackend for OllamaBackend {
    async fn generate_advice(&self, payload: &AdvicePayload) -> Result<String> {
        let user = render_user(payload)?;
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &user,
                },
            ],
            stream: false,
        };

        debug!(model = %self.model, host = %self.base_url, "Requesting advice");

        let response = self
            .http_client
            .post(format!("{}/api/chat", self.base_url))
            .timeout(GENERATE_TIMEOUT)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let chat: ChatResponse = response.json().await?;
        debug!(chars = chat.message.content.len(), "Ollama advice response");

        if chat.message.content.trim().is_empty() {
            return Err(Error::Advice("Model returned an empty response".into()));
        }
        Ok(chat.message.content)
    }

    async fn health_check(&self) -> bool {
        match self
            .http_client
            .get(&self.base_url)
            .timeout(HEALTH_TIMEOUT)
            .send()
            .await
        {
            Ok(resp) => matches!(resp.status(), StatusCode::OK | StatusCode::NOT_FOUND),
            Err(e) => {
                warn!(host = %self.base_url, error = %e, "Ollama not reachable");
                false
            }
        }
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn host(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BudgetConfig;
    use crate::plan::BudgetPlan;
    use crate::test_utils::MockOllamaServer;

    fn payload() -> AdvicePayload {
        let plan = BudgetPlan::compute(&BudgetConfig::default(), &[], &[], None, None).unwrap();
        AdvicePayload::from_plan(&plan, None)
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let backend = OllamaBackend::new("http://localhost:11434/", "llama3.1:8b");
        assert_eq!(backend.host(), "http://localhost:11434");
        assert_eq!(backend.with_model("mistral").model(), "mistral");
    }

    #[tokio::test]
    async fn test_generate_advice_against_mock_server() {
        let server = MockOllamaServer::start().await;
        let backend = OllamaBackend::new(&server.url(), DEFAULT_MODEL);

        assert!(backend.health_check().await);
        let advice = backend.generate_advice(&payload()).await.unwrap();
        assert!(advice.contains("Summary"));
        // The mock echoes back that it saw the payload
        assert!(advice.contains("monthly_income"));
    }

    #[tokio::test]
    async fn test_unknown_model_is_http_error() {
        let server = MockOllamaServer::start().await;
        let backend = OllamaBackend::new(&server.url(), "missing-model");

        let err = backend.generate_advice(&payload()).await.unwrap_err();
        assert!(matches!(err, Error::Http(_)));
    }

    #[tokio::test]
    async fn test_health_check_unreachable() {
        // Port 9 (discard) is not expected to run an HTTP server
        let backend = OllamaBackend::new("http://127.0.0.1:9", DEFAULT_MODEL);
        assert!(!backend.health_check().await);
    }
}
