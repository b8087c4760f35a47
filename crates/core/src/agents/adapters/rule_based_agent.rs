//! Rule-based agent: answers with the first matching pattern rule.

use crate::agents::base::{parse_config, Agent, AgentError};
use crate::rules::{Rule, RuleSet};
use ar_protocol::RuleBasedConfig;
use async_trait::async_trait;
use tracing::{debug, error, info, warn};

/// Response used when no rule matches and no default is configured.
pub const DEFAULT_RULE_RESPONSE: &str = "I don't have a specific rule for that.";

/// Agent that matches messages against priority-ordered regex rules.
///
/// Rules are only added during [`Agent::initialize`], so the rule set is
/// read-only while messages are processed and needs no lock.
pub struct RuleBasedAgent {
    id: String,
    default_response: String,
    rules: RuleSet,
}

impl RuleBasedAgent {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            default_response: DEFAULT_RULE_RESPONSE.to_string(),
            rules: RuleSet::new(),
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn default_response(&self) -> &str {
        &self.default_response
    }

    /// Compile and add one rule. An invalid pattern is logged and skipped.
    fn add_rule(&mut self, pattern: &str, response: String, priority: i32) {
        match Rule::new(pattern, response, priority) {
            Ok(rule) => {
                debug!(agent_id = %self.id, pattern, priority, "Added rule");
                self.rules.add(rule);
            }
            Err(e) => {
                error!(agent_id = %self.id, pattern, error = %e, "Invalid regex pattern, rule skipped");
            }
        }
    }
}

#[async_trait]
impl Agent for RuleBasedAgent {
    fn id(&self) -> &str {
        &self.id
    }

    async fn initialize(&mut self, config: &str) -> Result<(), AgentError> {
        let config: RuleBasedConfig = parse_config(&self.id, config)?;

        if let Some(default_response) = config.default_response {
            self.default_response = default_response;
        }

        for (index, spec) in config.rules.into_iter().enumerate() {
            match (spec.pattern, spec.response) {
                (Some(pattern), Some(response)) => self.add_rule(&pattern, response, spec.priority),
                _ => warn!(
                    agent_id = %self.id,
                    rule_index = index,
                    "Rule is missing 'pattern' or 'response', skipped"
                ),
            }
        }

        info!(agent_id = %self.id, rules = self.rules.len(), "RuleBasedAgent initialized");
        Ok(())
    }

    async fn process_message(&self, message: &str) -> String {
        self.rules
            .respond(message)
            .unwrap_or_else(|| self.default_response.clone())
    }
}
