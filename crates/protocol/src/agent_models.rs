//! Agent declaration and configuration models.
//!
//! An agent is declared by a type name, a unique id and a JSON configuration
//! payload. The payload schema depends on the type; the two built-in schemas
//! live here so that transports and the core agree on field names.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

/// Type name of the priority-ordered pattern matching agent.
pub const RULE_BASED_AGENT_TYPE: &str = "rule_based";

/// Type name of the associative-memory learning agent.
pub const LEARNING_AGENT_TYPE: &str = "learning";

/// Declares one agent to be created by the runtime.
///
/// # Example
///
/// ```json
/// {
///   "id": "greeter",
///   "type": "rule_based",
///   "config": {
///     "rules": [{ "pattern": ".*hello.*", "response": "Hi there!", "priority": 10 }]
///   }
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
pub struct AgentSpec {
    /// Unique identifier of the agent within a runtime.
    pub id: String,

    /// Agent type name, e.g. `rule_based` or `learning`.
    #[serde(rename = "type")]
    pub agent_type: String,

    /// Type-specific configuration payload.
    ///
    /// A missing payload is treated as an empty object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub config: Option<serde_json::Value>,
}

/// A single pattern rule as written in configuration.
///
/// `pattern` and `response` are optional at the schema level so that an
/// incomplete rule can be skipped on its own instead of rejecting the whole
/// configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct RuleSpec {
    /// Case-insensitive regular expression searched anywhere in a message.
    #[serde(default)]
    pub pattern: Option<String>,

    /// Response template; `$0` is the whole match, `$1`.. are capture groups.
    #[serde(default)]
    pub response: Option<String>,

    /// Higher priorities are tried first. Defaults to 0.
    #[serde(default)]
    pub priority: i32,
}

/// Configuration payload for a `rule_based` agent.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, TS)]
pub struct RuleBasedConfig {
    /// Response used when no rule matches.
    #[serde(default)]
    pub default_response: Option<String>,

    /// Rules in configuration order.
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
}

/// Configuration payload for a `learning` agent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
pub struct LearningConfig {
    /// Learning rate scalar. Accepted and stored; reserved for weighting.
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,

    /// Seed memory: associative key to candidate responses.
    ///
    /// When absent the agent restores its persisted snapshot instead.
    #[serde(default)]
    pub initial_memory: Option<BTreeMap<String, Vec<String>>>,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            learning_rate: default_learning_rate(),
            initial_memory: None,
        }
    }
}

fn default_learning_rate() -> f64 {
    0.1
}
