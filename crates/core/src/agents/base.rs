//! Base Agent trait and supporting types.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    #[error("Unknown agent type: {0}")]
    UnknownType(String),
    #[error("Invalid configuration for agent '{id}': {reason}")]
    InvalidConfig { id: String, reason: String },
    #[error("Initialization failed for agent '{id}': {reason}")]
    InitializationFailed { id: String, reason: String },
}

/// A stateful unit that turns an input message into a response.
///
/// Implementations are created by the [`AgentFactory`](crate::agents::AgentFactory),
/// initialized once, and then shared behind an `Arc` by the
/// [`AgentManager`](crate::agents::AgentManager). `process_message` may be
/// called concurrently; each agent guards its own mutable state.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Identifier, stable for the agent's lifetime.
    fn id(&self) -> &str;

    /// Apply a JSON configuration payload.
    ///
    /// Errors leave the agent not ready; the factory discards it.
    async fn initialize(&mut self, config: &str) -> Result<(), AgentError>;

    /// Produce a response for `message`. Never fails.
    async fn process_message(&self, message: &str) -> String;
}

/// Parse a JSON configuration payload into a typed config for agent `id`.
///
/// Malformed JSON and wrong field types both surface as
/// [`AgentError::InvalidConfig`].
pub fn parse_config<T>(id: &str, config: &str) -> Result<T, AgentError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(config).map_err(|e| AgentError::InvalidConfig {
        id: id.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ar_protocol::LearningConfig;

    struct TestAgent {
        id: String,
        initialize_succeeds: bool,
        initialized: bool,
        last_config: Option<String>,
        response: String,
    }

    impl TestAgent {
        fn new(id: &str) -> Self {
            Self {
                id: id.to_string(),
                initialize_succeeds: true,
                initialized: false,
                last_config: None,
                response: String::new(),
            }
        }
    }

    #[async_trait]
    impl Agent for TestAgent {
        fn id(&self) -> &str {
            &self.id
        }

        async fn initialize(&mut self, config: &str) -> Result<(), AgentError> {
            self.last_config = Some(config.to_string());
            self.initialized = self.initialize_succeeds;
            if self.initialized {
                Ok(())
            } else {
                Err(AgentError::InitializationFailed {
                    id: self.id.clone(),
                    reason: "test agent configured to fail".to_string(),
                })
            }
        }

        async fn process_message(&self, message: &str) -> String {
            format!("{}: {}", self.response, message)
        }
    }

    #[test]
    fn test_agent_id_is_set() {
        let agent = TestAgent::new("test-agent-1");
        assert_eq!(agent.id(), "test-agent-1");
    }

    #[tokio::test]
    async fn test_agent_initialization_succeeds() {
        let mut agent = TestAgent::new("test-agent-2");
        let config = r#"{"key": "value"}"#;

        assert!(agent.initialize(config).await.is_ok());
        assert!(agent.initialized);
        assert_eq!(agent.last_config.as_deref(), Some(config));
    }

    #[tokio::test]
    async fn test_agent_initialization_fails() {
        let mut agent = TestAgent::new("test-agent-3");
        agent.initialize_succeeds = false;

        let result = agent.initialize("{}").await;
        assert!(matches!(result, Err(AgentError::InitializationFailed { .. })));
        assert!(!agent.initialized);
    }

    #[tokio::test]
    async fn test_agent_trait_object() {
        let mut agent = TestAgent::new("test-agent-4");
        agent.response = "echo".to_string();
        let agent: Box<dyn Agent> = Box::new(agent);

        assert_eq!(agent.process_message("Hello, agent!").await, "echo: Hello, agent!");
    }

    #[test]
    fn test_parse_config_valid() {
        let config: LearningConfig = parse_config("a", r#"{"learning_rate": 0.2}"#).unwrap();
        assert_eq!(config.learning_rate, 0.2);
    }

    #[test]
    fn test_parse_config_malformed() {
        let result: Result<LearningConfig, _> = parse_config("a", "invalid_json");
        match result {
            Err(AgentError::InvalidConfig { id, .. }) => assert_eq!(id, "a"),
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn test_agent_error_display() {
        let err = AgentError::UnknownType("robot".to_string());
        assert_eq!(err.to_string(), "Unknown agent type: robot");
    }
}
