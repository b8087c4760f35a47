//! Mock agent implementation for testing.

use crate::agents::base::{Agent, AgentError};
use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::Mutex;

/// Agent with scripted behavior that records every message it receives.
pub struct MockAgent {
    id: String,
    initialize_succeeds: bool,
    response: String,
    delay: Option<Duration>,
    received: Mutex<Vec<String>>,
}

impl MockAgent {
    pub fn new(id: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            initialize_succeeds: true,
            response: response.into(),
            delay: None,
            received: Mutex::new(Vec::new()),
        }
    }

    /// A mock whose `initialize` always fails.
    pub fn failing(id: impl Into<String>) -> Self {
        Self {
            initialize_succeeds: false,
            ..Self::new(id, "")
        }
    }

    /// Sleep for `delay` inside both `initialize` and `process_message`.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Messages received so far, in arrival order.
    pub async fn received(&self) -> Vec<String> {
        self.received.lock().await.clone()
    }

    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl Agent for MockAgent {
    fn id(&self) -> &str {
        &self.id
    }

    async fn initialize(&mut self, _config: &str) -> Result<(), AgentError> {
        self.pause().await;
        if self.initialize_succeeds {
            Ok(())
        } else {
            Err(AgentError::InitializationFailed {
                id: self.id.clone(),
                reason: "Mock failure".to_string(),
            })
        }
    }

    async fn process_message(&self, message: &str) -> String {
        self.pause().await;
        self.received.lock().await.push(message.to_string());
        self.response.clone()
    }
}
