//! Concrete agent implementations.

mod learning_agent;
pub mod mock_agent;
mod rule_based_agent;

pub use learning_agent::{LearningAgent, EMPTY_MESSAGE_RESPONSE, UNKNOWN_KEY_RESPONSE};
pub use mock_agent::MockAgent;
pub use rule_based_agent::{RuleBasedAgent, DEFAULT_RULE_RESPONSE};
