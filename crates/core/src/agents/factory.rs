//! Agent factory for creating initialized agent instances by type name.

use crate::agents::adapters::{LearningAgent, RuleBasedAgent};
use crate::agents::agent_type::AgentType;
use crate::agents::base::{Agent, AgentError};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error};

/// Constructor for an agent type registered at runtime.
pub type AgentConstructor = Arc<dyn Fn(&str) -> Box<dyn Agent> + Send + Sync>;

/// Factory for creating agent instances based on a type name.
///
/// Built-in types are resolved through [`AgentType`]; additional types can be
/// registered with [`AgentFactory::with_agent_type`]. Every agent returned by
/// [`AgentFactory::create`] has been initialized successfully.
#[derive(Clone)]
pub struct AgentFactory {
    memory_dir: PathBuf,
    custom: HashMap<String, AgentConstructor>,
}

impl Default for AgentFactory {
    fn default() -> Self {
        Self::new(".")
    }
}

impl fmt::Debug for AgentFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut custom: Vec<_> = self.custom.keys().collect();
        custom.sort();
        f.debug_struct("AgentFactory")
            .field("memory_dir", &self.memory_dir)
            .field("custom", &custom)
            .finish()
    }
}

impl AgentFactory {
    /// Create a factory whose learning agents keep snapshots in `memory_dir`.
    pub fn new(memory_dir: impl Into<PathBuf>) -> Self {
        Self {
            memory_dir: memory_dir.into(),
            custom: HashMap::new(),
        }
    }

    /// Register an additional agent type.
    ///
    /// Built-in type names always resolve to the built-in agents, so
    /// registering `rule_based` or `learning` has no effect on creation.
    pub fn with_agent_type<F>(mut self, type_name: impl Into<String>, constructor: F) -> Self
    where
        F: Fn(&str) -> Box<dyn Agent> + Send + Sync + 'static,
    {
        self.custom.insert(type_name.into(), Arc::new(constructor));
        self
    }

    pub fn memory_dir(&self) -> &Path {
        &self.memory_dir
    }

    /// Whether `type_name` can be created by this factory.
    pub fn supports(&self, type_name: &str) -> bool {
        AgentType::from_type_name(type_name).is_some() || self.custom.contains_key(type_name)
    }

    /// Create and initialize an agent.
    ///
    /// # Arguments
    ///
    /// * `type_name` - `rule_based`, `learning`, or a registered custom type
    /// * `id` - Identifier for the new agent
    /// * `config` - JSON configuration passed to `initialize`
    ///
    /// # Returns
    ///
    /// The initialized agent, ready to be shared.
    ///
    /// # Errors
    ///
    /// [`AgentError::UnknownType`] for an unsupported type name, or the
    /// agent's own error when initialization fails. A failed agent is
    /// discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use ar_core::agents::AgentFactory;
    ///
    /// # async fn example() -> Result<(), ar_core::agents::AgentError> {
    /// let factory = AgentFactory::new(std::env::temp_dir());
    /// let config = r#"{"rules": [{"pattern": "hello", "response": "Hi!"}]}"#;
    /// let agent = factory.create("rule_based", "greeter", config).await?;
    ///
    /// assert_eq!(agent.process_message("hello").await, "Hi!");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(
        &self,
        type_name: &str,
        id: &str,
        config: &str,
    ) -> Result<Arc<dyn Agent>, AgentError> {
        let mut agent = self.instantiate(type_name, id).inspect_err(|e| {
            error!(agent_id = %id, agent_type = %type_name, error = %e, "Cannot create agent");
        })?;

        if let Err(e) = agent.initialize(config).await {
            error!(agent_id = %id, agent_type = %type_name, error = %e, "Failed to initialize agent");
            return Err(e);
        }

        debug!(agent_id = %id, agent_type = %type_name, "Agent created");
        Ok(Arc::from(agent))
    }

    fn instantiate(&self, type_name: &str, id: &str) -> Result<Box<dyn Agent>, AgentError> {
        match AgentType::from_type_name(type_name) {
            Some(AgentType::RuleBased) => Ok(Box::new(RuleBasedAgent::new(id))),
            Some(AgentType::Learning) => Ok(Box::new(LearningAgent::new(id, &self.memory_dir))),
            None => self
                .custom
                .get(type_name)
                .map(|constructor| constructor(id))
                .ok_or_else(|| AgentError::UnknownType(type_name.to_string())),
        }
    }
}
