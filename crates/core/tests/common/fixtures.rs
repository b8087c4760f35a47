//! Test fixtures for agent configurations and factories.

use ar_core::agents::{AgentFactory, AgentManager};
use serde_json::json;
use std::time::Duration;
use tempfile::TempDir;

use crate::common::mock_agents::{GaugeAgent, InFlightGauge};

/// Rule configuration used by most registry tests.
pub fn greeter_config() -> String {
    json!({
        "default_response": "I'm not sure how to respond to that.",
        "rules": [
            {"pattern": ".*hello.*", "response": "Hello! How can I help you today?", "priority": 10},
            {"pattern": ".*help.*", "response": "I'm here to assist you.", "priority": 5},
            {"pattern": "my name is (\\w+)", "response": "Nice to meet you, $1!", "priority": 1}
        ]
    })
    .to_string()
}

/// Learning configuration with a small seed memory.
pub fn student_config() -> String {
    json!({
        "learning_rate": 0.1,
        "initial_memory": {
            "hello": ["Hi there!", "Hello!", "Greetings!"],
            "how_are_you": ["I'm doing well, thank you!", "Great, thanks for asking!"]
        }
    })
    .to_string()
}

/// A manager over a fresh temporary memory directory.
///
/// Besides the built-in types it knows `gauge`, an agent that takes
/// `delay` per message and reports to `gauge`.
///
/// Returns a TempDir that must be kept alive for the test duration.
pub fn test_manager(gauge: InFlightGauge, delay: Duration) -> (TempDir, AgentManager) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let factory = AgentFactory::new(dir.path()).with_agent_type("gauge", move |id| {
        Box::new(GaugeAgent::new(id, gauge.clone(), delay))
    });
    (dir, AgentManager::new(factory))
}
