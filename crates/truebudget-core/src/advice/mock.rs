//! Mock backend for testing
//!
//! Returns a fixed advice string without any network access.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{Error, Result};

use super::payload::AdvicePayload;
use super::AdviceBackend;

const DEFAULT_RESPONSE: &str = "Summary: your budget is balanced.\n\n- Keep tracking your spending.";

/// Mock advice backend
///
/// Records every payload it receives so tests can check what would have
/// been sent.
#[derive(Clone)]
pub struct MockBackend {
    /// Whether health_check should return true
    pub healthy: bool,
    response: String,
    received: Arc<Mutex<Vec<AdvicePayload>>>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    /// Create a new mock backend (healthy by default)
    pub fn new() -> Self {
        Self::with_response(DEFAULT_RESPONSE)
    }

    /// Mock that always answers with `response`
    pub fn with_response(response: &str) -> Self {
        Self {
            healthy: true,
            response: response.to_string(),
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create an unhealthy mock backend
    pub fn unhealthy() -> Self {
        Self {
            healthy: false,
            ..Self::new()
        }
    }

    /// Create a new instance with a different model (no-op for mock)
    pub fn with_model(&self, _model: &str) -> Self {
        self.clone()
    }

    /// Payloads received so far
    pub fn received(&self) -> Vec<AdvicePayload> {
        self.received
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl AdviceBackend for MockBackend {
    async fn generate_advice(&self, payload: &AdvicePayload) -> Result<String> {
        if !self.healthy {
            return Err(Error::Advice("Mock backend is unhealthy".into()));
        }
        self.received
            .lock()
            .map_err(|_| Error::Advice("Mock backend lock poisoned".into()))?
            .push(payload.clone());
        Ok(self.response.clone())
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }

    fn model(&self) -> &str {
        "mock"
    }

    fn host(&self) -> &str {
        "mock://localhost"
    }
}
