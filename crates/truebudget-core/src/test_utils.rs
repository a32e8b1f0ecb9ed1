//! Test utilities for truebudget-core
//!
//! This module provides a mock Ollama server that answers the chat endpoint
//! with canned advice, for development and integration tests.

use axum::{
    extract::Json,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::sync::oneshot;

/// Model name the mock server rejects with 404
pub const MISSING_MODEL: &str = "missing-model";

/// Mock Ollama server for testing and development
pub struct MockOllamaServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockOllamaServer {
    /// Start the mock server on an available port
    pub async fn start() -> Self {
        let app = Router::new()
            .route("/", get(handle_root))
            .route("/api/chat", post(handle_chat));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .unwrap();
        });

        Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Get the base URL for this mock server
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stop the mock server
    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockOllamaServer {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn handle_root() -> &'static str {
    "Ollama is running"
}

/// Ollama chat endpoint
///
/// Replies with a summary that lists which payload fields the user message
/// carried, plus a zero-width space to exercise cleaning.
async fn handle_chat(
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ErrorResponse>)> {
    if request.model == MISSING_MODEL {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("model '{}' not found", request.model),
            }),
        ));
    }

    let has_system = request.messages.iter().any(|m| m.role == "system");
    let user = request
        .messages
        .iter()
        .find(|m| m.role == "user")
        .map(|m| m.content.as_str())
        .unwrap_or_default();

    let seen: Vec<&str> = ["monthly_income", "discretionary_left", "warnings"]
        .into_iter()
        .filter(|field| user.contains(field))
        .collect();

    let content = format!(
        "Summary\u{200B}: budget reviewed (system prompt: {}). Fields: {}\n\n- Tip one\n- Tip two\n- Tip three",
        has_system,
        seen.join(", ")
    );

    Ok(Json(ChatResponse {
        model: request.model,
        message: ChatMessage {
            role: "assistant".to_string(),
            content,
        },
        done: !request.stream,
    }))
}

#[derive(Debug, Deserialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(default)]
    stream: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatResponse {
    model: String,
    message: ChatMessage,
    done: bool,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}
