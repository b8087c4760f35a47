//! Agent type enumeration for determining which built-in agent to construct.

use ar_protocol::{LEARNING_AGENT_TYPE, RULE_BASED_AGENT_TYPE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentType {
    RuleBased,
    Learning,
}

impl AgentType {
    /// Resolve a built-in agent type from its configuration name.
    ///
    /// # Arguments
    ///
    /// * `name` - The `type` field of an agent declaration
    ///
    /// # Returns
    ///
    /// The matching `AgentType`, or `None` when the name is not a built-in
    /// type. Matching is exact: type names are identifiers, not free text.
    ///
    /// # Examples
    ///
    /// ```
    /// use ar_core::agents::AgentType;
    ///
    /// assert_eq!(AgentType::from_type_name("rule_based"), Some(AgentType::RuleBased));
    /// assert_eq!(AgentType::from_type_name("learning"), Some(AgentType::Learning));
    /// assert_eq!(AgentType::from_type_name("unknown"), None);
    /// ```
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            RULE_BASED_AGENT_TYPE => Some(Self::RuleBased),
            LEARNING_AGENT_TYPE => Some(Self::Learning),
            _ => None,
        }
    }

    /// Get the configuration name for the agent type.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RuleBased => RULE_BASED_AGENT_TYPE,
            Self::Learning => LEARNING_AGENT_TYPE,
        }
    }
}
