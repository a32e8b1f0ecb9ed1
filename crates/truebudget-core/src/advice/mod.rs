//! Pluggable advice backend abstraction
//!
//! The budget numbers are always computed locally; a backend only phrases
//! them as advice. Backends receive an [`AdvicePayload`] and return free text.
//!
//! # Architecture
//!
//! - `AdviceBackend` trait: the injected "payload to text" capability
//! - `AdviceClient` enum: concrete wrapper providing Clone + compile-time dispatch
//! - Backend implementations: `OllamaBackend`, `MockBackend`
//!
//! # Configuration
//!
//! Environment variables:
//! - `AI_BACKEND`: Backend to use (ollama, mock). Default: ollama
//! - `OLLAMA_HOST`: Ollama server URL (default: http://localhost:11434)
//! - `OLLAMA_MODEL`: Model name (default: llama3.1:8b)

mod mock;
mod ollama;
pub mod payload;
pub mod prompt;

pub use mock::MockBackend;
pub use ollama::{OllamaBackend, DEFAULT_MODEL, DEFAULT_OLLAMA_HOST};
pub use payload::AdvicePayload;

use async_trait::async_trait;

use crate::error::Result;

/// Trait defining the interface for all advice backends
#[async_trait]
pub trait AdviceBackend: Send + Sync {
    /// Phrase the payload's numbers as advice, without altering them
    async fn generate_advice(&self, payload: &AdvicePayload) -> Result<String>;

    /// Check if the backend is available
    async fn health_check(&self) -> bool;

    /// Get the model name (for display)
    fn model(&self) -> &str;

    /// Get the host URL (for logging)
    fn host(&self) -> &str;
}

/// Concrete advice client enum
#[derive(Clone)]
pub enum AdviceClient {
    /// Ollama backend (HTTP API)
    Ollama(OllamaBackend),
    /// Mock backend for testing
    Mock(MockBackend),
}

impl AdviceClient {
    /// Create an advice client from environment variables
    ///
    /// Checks `AI_BACKEND` to determine which backend to use:
    /// - `ollama` (default): Uses OLLAMA_HOST and OLLAMA_MODEL
    /// - `mock`: Canned response, no network
    pub fn from_env() -> Self {
        let backend = std::env::var("AI_BACKEND").unwrap_or_else(|_| "ollama".to_string());

        match backend.to_lowercase().as_str() {
            "ollama" => AdviceClient::Ollama(OllamaBackend::from_env()),
            "mock" => AdviceClient::Mock(MockBackend::new()),
            _ => {
                tracing::warn!(backend = %backend, "Unknown AI_BACKEND, falling back to ollama");
                AdviceClient::Ollama(OllamaBackend::from_env())
            }
        }
    }

    /// Create an Ollama backend directly
    pub fn ollama(host: &str, model: &str) -> Self {
        AdviceClient::Ollama(OllamaBackend::new(host, model))
    }

    /// Create a mock backend for testing
    pub fn mock() -> Self {
        AdviceClient::Mock(MockBackend::new())
    }

    /// Create a new instance with a different model
    pub fn with_model(&self, model: &str) -> Self {
        match self {
            AdviceClient::Ollama(b) => AdviceClient::Ollama(b.with_model(model)),
            AdviceClient::Mock(b) => AdviceClient::Mock(b.with_model(model)),
        }
    }
}

#[async_trait]
impl AdviceBackend for AdviceClient {
    async fn generate_advice(&self, payload: &AdvicePayload) -> Result<String> {
        match self {
            AdviceClient::Ollama(b) => b.generate_advice(payload).await,
            AdviceClient::Mock(b) => b.generate_advice(payload).await,
        }
    }

    async fn health_check(&self) -> bool {
        match self {
            AdviceClient::Ollama(b) => b.health_check().await,
            AdviceClient::Mock(b) => b.health_check().await,
        }
    }

    fn model(&self) -> &str {
        match self {
            AdviceClient::Ollama(b) => b.model(),
            AdviceClient::Mock(b) => b.model(),
        }
    }

    fn host(&self) -> &str {
        match self {
            AdviceClient::Ollama(b) => b.host(),
            AdviceClient::Mock(b) => b.host(),
        }
    }
}

/// Remove zero-width characters models sometimes emit
pub fn clean_advice(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{FEFF}'))
        .collect()
}

/// Generate advice and strip zero-width characters from the result
pub async fn advise<B: AdviceBackend + ?Sized>(
    backend: &B,
    payload: &AdvicePayload,
) -> Result<String> {
    let text = backend.generate_advice(payload).await?;
    Ok(clean_advice(&text))
}
