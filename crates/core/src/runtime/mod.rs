//! Runtime facade used by transports.
//!
//! The `Runtime` wraps an [`AgentManager`], creates the agents declared in a
//! [`RuntimeConfig`] and answers every transport [`Op`] with one [`Event`].

use crate::agents::{AgentFactory, AgentManager};
use ar_protocol::{AgentSpec, Event, Op, RuntimeConfig};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

/// Entry point for transports.
///
/// Cheap to clone; clones share the same agents.
#[derive(Clone)]
pub struct Runtime {
    manager: Arc<AgentManager>,
}

impl Runtime {
    pub fn new(factory: AgentFactory) -> Self {
        Self {
            manager: Arc::new(AgentManager::new(factory)),
        }
    }

    /// Build a runtime whose learning agents use the configured memory
    /// directory. Agents are not created until [`Runtime::bootstrap`].
    pub fn from_config(config: &RuntimeConfig) -> Self {
        Self::new(AgentFactory::new(&config.memory_dir))
    }

    pub fn manager(&self) -> &Arc<AgentManager> {
        &self.manager
    }

    /// Create every declared agent.
    ///
    /// A failing declaration is logged and skipped; the remaining agents are
    /// still created.
    ///
    /// # Returns
    ///
    /// The number of agents created.
    pub async fn bootstrap(&self, agents: &[AgentSpec]) -> usize {
        let mut created = 0;
        for spec in agents {
            let config = config_payload(spec.config.as_ref());
            match self
                .manager
                .create_agent(&spec.agent_type, &spec.id, &config)
                .await
            {
                Ok(()) => created += 1,
                Err(e) => {
                    error!(agent_id = %spec.id, agent_type = %spec.agent_type, error = %e, "Failed to create configured agent");
                }
            }
        }
        info!(created, declared = agents.len(), "Runtime bootstrapped");
        created
    }

    /// Execute one operation and describe its outcome.
    pub async fn handle(&self, op: Op) -> Event {
        match op {
            Op::CreateAgent {
                agent_type,
                id,
                config,
            } => {
                let config = config_payload(Some(&config));
                let success = self
                    .manager
                    .create_agent(&agent_type, &id, &config)
                    .await
                    .is_ok();
                Event::AgentCreated { id, success }
            }
            Op::ListAgents => Event::AgentList {
                ids: self.manager.list_agent_ids().await,
            },
            Op::DeleteAgent { id } => {
                let success = self.manager.destroy_agent(&id).await;
                Event::AgentDeleted { id, success }
            }
            Op::SendMessage { id, message } => {
                match self.manager.send_message(&id, &message).await {
                    Ok(response) => Event::MessageResponse { id, response },
                    Err(e) => Event::Error {
                        message: e.to_string(),
                    },
                }
            }
            Op::Shutdown => {
                self.shutdown().await;
                Event::ShutdownComplete
            }
        }
    }

    /// Release every agent, writing learning-agent snapshots.
    pub async fn shutdown(&self) {
        self.manager.shutdown().await;
    }
}

/// JSON text handed to `initialize`. An absent or `null` config becomes `{}`.
pub fn config_payload(config: Option<&Value>) -> String {
    match config {
        None | Some(Value::Null) => "{}".to_string(),
        Some(value) => value.to_string(),
    }
}
